pub mod prelude;

pub mod account;
pub mod employee;
pub mod student;
