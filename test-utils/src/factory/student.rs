//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students.
///
/// Optional document and parent fields are left empty unless set.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    matricula: i32,
    nome: String,
    status: String,
    email: String,
    cpf: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - id: `"student-{id}"`
    /// - matricula: the counter value
    /// - nome: `"Aluno {id}"`
    /// - status: `"ATIVO"`
    /// - email: `"aluno{id}@mail.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("student-{}", id),
            matricula: id as i32,
            nome: format!("Aluno {}", id),
            status: "ATIVO".to_string(),
            email: format!("aluno{}@mail.com", id),
            cpf: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = nome.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let nascimento = Utc
            .with_ymd_and_hms(2010, 3, 15, 0, 0, 0)
            .single()
            .ok_or_else(|| DbErr::Custom("invalid birth date".to_string()))?;

        entity::student::ActiveModel {
            id: ActiveValue::Set(self.id),
            matricula: ActiveValue::Set(self.matricula),
            nome: ActiveValue::Set(self.nome),
            status: ActiveValue::Set(self.status),
            serie: ActiveValue::Set("1 ANO".to_string()),
            email: ActiveValue::Set(self.email),
            nascimento: ActiveValue::Set(nascimento),
            sexo: ActiveValue::Set("MASCULINO".to_string()),
            endereco: ActiveValue::Set("Rua A, 10".to_string()),
            email_responsavel: ActiveValue::Set("responsavel@mail.com".to_string()),
            cpf: ActiveValue::Set(self.cpf),
            rg: ActiveValue::Set(None),
            nome_mae: ActiveValue::Set(None),
            nome_pai: ActiveValue::Set(None),
            telefone_mae: ActiveValue::Set(None),
            telefone_pai: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
