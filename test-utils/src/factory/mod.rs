//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let account = factory::create_account(&db).await?;
//! let admin = factory::account::AccountFactory::new(&db)
//!     .admin()
//!     .access_token("admin-token")
//!     .build()
//!     .await?;
//! let student = factory::student::StudentFactory::new(&db)
//!     .email("aluno@mail.com")
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod employee;
pub mod helpers;
pub mod student;

pub use account::create_account;
pub use employee::create_employee;
pub use student::create_student;
