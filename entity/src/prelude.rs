pub use super::account::Entity as Account;
pub use super::employee::Entity as Employee;
pub use super::student::Entity as Student;
