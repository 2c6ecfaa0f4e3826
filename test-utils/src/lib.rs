//! Secretaria Test Utils
//!
//! Shared testing utilities for the secretaria server. Provides a builder for test contexts
//! backed by in-memory SQLite databases and factories for seeding accounts, students and
//! employees.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory::account::AccountFactory;
//!
//! #[tokio::test]
//! async fn lists_accounts() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_school_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let admin = AccountFactory::new(db).admin().build().await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
