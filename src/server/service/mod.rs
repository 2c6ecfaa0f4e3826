//! Service layer for business logic and orchestration.
//!
//! Every operation is a single-method use-case trait with one `Db*` implementation that
//! depends on repository traits and utility traits only. Controllers hold use-cases as
//! `Arc<dyn Trait>` so tests can replace them with stubs.
//!
//! All use-cases return `UseCaseError`, tagging business rule violations apart from
//! repository failures.

pub mod account;
pub mod auth;
pub mod employee;
pub mod student;

#[cfg(test)]
mod test;
