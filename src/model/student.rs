use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::{double_option, EntityDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPropsDto {
    pub matricula: i32,
    pub nome: String,
    pub status: String,
    pub serie: String,
    pub email: String,
    pub nascimento: DateTime<Utc>,
    pub sexo: String,
    pub endereco: String,
    pub email_responsavel: String,
    #[serde(rename = "CPF")]
    pub cpf: Option<String>,
    #[serde(rename = "RG")]
    pub rg: Option<String>,
    pub nome_mae: Option<String>,
    pub nome_pai: Option<String>,
    pub telefone_mae: Option<String>,
    pub telefone_pai: Option<String>,
}

pub type StudentDto = EntityDto<StudentPropsDto>;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub matricula: i32,
    pub nome: String,
    pub status: String,
    pub serie: String,
    pub email: String,
    pub nascimento: DateTime<Utc>,
    pub sexo: String,
    pub endereco: String,
    pub email_responsavel: String,
    #[serde(default, rename = "CPF")]
    pub cpf: Option<String>,
    #[serde(default, rename = "RG")]
    pub rg: Option<String>,
    #[serde(default)]
    pub nome_mae: Option<String>,
    #[serde(default)]
    pub nome_pai: Option<String>,
    #[serde(default)]
    pub telefone_mae: Option<String>,
    #[serde(default)]
    pub telefone_pai: Option<String>,
}

/// Partial student update.
///
/// Optional columns accept `null` to clear the stored value; omitted keys are left as is.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[serde(default)]
    pub matricula: Option<i32>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub serie: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nascimento: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sexo: Option<String>,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub email_responsavel: Option<String>,
    #[serde(default, rename = "CPF", deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub cpf: Option<Option<String>>,
    #[serde(default, rename = "RG", deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub rg: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub nome_mae: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub nome_pai: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub telefone_mae: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub telefone_pai: Option<Option<String>>,
}
