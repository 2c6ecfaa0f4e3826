//! Collaborators the use-cases depend on through traits.

pub mod email;
pub mod encrypter;
pub mod token;
