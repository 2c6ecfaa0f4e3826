use super::*;
use crate::{
    model::account::Role,
    server::{
        data::account::{AccountRepository, SeaOrmAccountRepository},
        model::account::{AccountProps, UpdateAccountParam},
    },
};

mod access_token;
mod admin_exists;
mod create;
mod delete;
mod get;
mod update;

fn props(email: &str) -> AccountProps {
    AccountProps {
        email: email.to_string(),
        password: "hashed".to_string(),
        role: Role::User,
        avatar: None,
    }
}
