//! Database repository layer for all domain entities.
//!
//! Each resource has a repository trait, the contract the service layer depends on, and
//! a SeaORM implementation. Repositories use SeaORM entity models internally and return
//! domain models. Tests swap in the in-memory implementations from `in_memory`.

pub mod account;
pub mod employee;
pub mod student;

#[cfg(test)]
pub mod in_memory;

#[cfg(test)]
mod test;
