use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{double_option, EntityDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmployeePropsDto {
    pub nome: String,
    pub email: String,
    pub cargo: String,
    pub telefone: Option<String>,
    #[serde(rename = "CPF")]
    pub cpf: Option<String>,
}

pub type EmployeeDto = EntityDto<EmployeePropsDto>;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEmployeeDto {
    pub nome: String,
    pub email: String,
    pub cargo: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default, rename = "CPF")]
    pub cpf: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateEmployeeDto {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub telefone: Option<Option<String>>,
    #[serde(default, rename = "CPF", deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub cpf: Option<Option<String>>,
}
