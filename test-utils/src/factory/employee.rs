//! Employee factory for creating test employee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees.
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    nome: String,
    email: String,
    cargo: String,
    telefone: Option<String>,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - id: `"employee-{id}"`
    /// - nome: `"Funcionario {id}"`
    /// - email: `"funcionario{id}@mail.com"`
    /// - cargo: `"PROFESSOR"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("employee-{}", id),
            nome: format!("Funcionario {}", id),
            email: format!("funcionario{}@mail.com", id),
            cargo: "PROFESSOR".to_string(),
            telefone: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn cargo(mut self, cargo: impl Into<String>) -> Self {
        self.cargo = cargo.into();
        self
    }

    pub fn telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = Some(telefone.into());
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            id: ActiveValue::Set(self.id),
            nome: ActiveValue::Set(self.nome),
            email: ActiveValue::Set(self.email),
            cargo: ActiveValue::Set(self.cargo),
            telefone: ActiveValue::Set(self.telefone),
            cpf: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
