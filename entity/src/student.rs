use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub matricula: i32,
    pub nome: String,
    pub status: String,
    pub serie: String,
    #[sea_orm(unique)]
    pub email: String,
    pub nascimento: DateTimeUtc,
    pub sexo: String,
    pub endereco: String,
    pub email_responsavel: String,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub nome_mae: Option<String>,
    pub nome_pai: Option<String>,
    pub telefone_mae: Option<String>,
    pub telefone_pai: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
