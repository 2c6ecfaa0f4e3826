//! Account domain models and parameters.
//!
//! Accounts hold login credentials and a role. The password is always stored hashed and
//! the access token lives only in the repository, so neither appears in `AccountPropsDto`.

use std::str::FromStr;

use sea_orm::DbErr;

use crate::{
    model::{
        account::{AccountDto, AccountPropsDto, CreateAccountDto, Role, UpdateAccountDto},
        auth::{SignInDto, SignUpDto},
    },
    server::{error::internal::InternalError, model::entity::Entity},
};

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            other => Err(InternalError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountProps {
    pub email: String,
    /// Salted hash, never the plain password.
    pub password: String,
    pub role: Role,
    /// Base64 encoded image.
    pub avatar: Option<String>,
}

pub type Account = Entity<AccountProps>;

impl Entity<AccountProps> {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Account)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::account::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        Ok(Self::with_id(
            entity.id,
            AccountProps {
                email: entity.email,
                password: entity.password,
                role,
                avatar: entity.avatar,
            },
        ))
    }

    pub fn into_dto(self) -> AccountDto {
        self.into_dto_with(|props| AccountPropsDto {
            email: props.email,
            role: props.role,
            avatar: props.avatar,
        })
    }
}

impl AccountProps {
    /// Returns the properties with every field present in `param` replaced.
    pub fn apply(self, param: UpdateAccountParam) -> Self {
        Self {
            email: param.email.unwrap_or(self.email),
            password: param.password.unwrap_or(self.password),
            role: param.role.unwrap_or(self.role),
            avatar: param.avatar.unwrap_or(self.avatar),
        }
    }
}

/// Input for account creation. `password` is plain text; the role defaults to `USER`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccountParam {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl CreateAccountParam {
    pub fn from_dto(dto: CreateAccountDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            role: dto.role,
        }
    }
}

impl From<SignUpDto> for CreateAccountParam {
    fn from(dto: SignUpDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            role: None,
        }
    }
}

/// Partial account update. `None` leaves a field untouched; `avatar: Some(None)` clears
/// the avatar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateAccountParam {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub avatar: Option<Option<String>>,
}

impl UpdateAccountParam {
    /// Builds the update from the request body and the uploaded file.
    ///
    /// The avatar is always part of the patch: a request without a file clears it.
    pub fn from_dto(dto: UpdateAccountDto, avatar: Option<String>) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            role: dto.role,
            avatar: Some(avatar),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationParam {
    pub email: String,
    pub password: String,
}

impl From<SignInDto> for AuthenticationParam {
    fn from(dto: SignInDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
