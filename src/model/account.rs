use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::EntityDto;

/// Account role. Serialized as `"ADMIN"` or `"USER"`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Public account properties. The password hash and access token never leave the server.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AccountPropsDto {
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

pub type AccountDto = EntityDto<AccountPropsDto>;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Partial account update. The avatar travels separately as an uploaded file.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateAccountDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}
