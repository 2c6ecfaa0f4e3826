//! Request processing ahead of the controllers.

pub mod auth;

#[cfg(test)]
mod test;
