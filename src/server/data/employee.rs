use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::employee::{Employee, EmployeeProps, UpdateEmployeeParam};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee under a freshly generated identifier.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The stored employee
    /// - `Err(DbErr)` - The insert failed, including a unique violation on `email`
    async fn create(&self, props: EmployeeProps) -> Result<Employee, DbErr>;

    async fn get(&self) -> Result<Vec<Employee>, DbErr>;

    /// Returns `Ok(None)` when no employee has this id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr>;

    /// Returns `Ok(None)` when no employee has this email.
    async fn get_by_email(&self, email: &str) -> Result<Option<Employee>, DbErr>;

    /// Merges the supplied fields into the stored employee.
    ///
    /// # Arguments
    /// - `id` - Identifier of the employee to change
    /// - `param` - Fields to replace, `telefone: Some(None)` clears the phone number
    ///
    /// # Returns
    /// - `Ok(())` - Updated, or no employee has this id
    /// - `Err(DbErr)` - The update failed
    async fn update(&self, id: &str, param: UpdateEmployeeParam) -> Result<(), DbErr>;

    /// Removes the employee. Unknown ids are a no-op.
    async fn delete(&self, id: &str) -> Result<(), DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, props: EmployeeProps) -> Result<Employee, DbErr> {
        let entity = entity::employee::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            nome: ActiveValue::Set(props.nome),
            email: ActiveValue::Set(props.email),
            cargo: ActiveValue::Set(props.cargo),
            telefone: ActiveValue::Set(props.telefone),
            cpf: ActiveValue::Set(props.cpf),
        }
        .insert(&self.db)
        .await?;

        Ok(Employee::from_entity(entity))
    }

    async fn get(&self) -> Result<Vec<Employee>, DbErr> {
        let entities = entity::prelude::Employee::find().all(&self.db).await?;

        Ok(entities.into_iter().map(Employee::from_entity).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find()
            .filter(entity::employee::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }

    async fn update(&self, id: &str, param: UpdateEmployeeParam) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Employee::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(());
        };

        let mut employee: entity::employee::ActiveModel = entity.into();
        if let Some(nome) = param.nome {
            employee.nome = ActiveValue::Set(nome);
        }
        if let Some(email) = param.email {
            employee.email = ActiveValue::Set(email);
        }
        if let Some(cargo) = param.cargo {
            employee.cargo = ActiveValue::Set(cargo);
        }
        if let Some(telefone) = param.telefone {
            employee.telefone = ActiveValue::Set(telefone);
        }
        if let Some(cpf) = param.cpf {
            employee.cpf = ActiveValue::Set(cpf);
        }

        if employee.is_changed() {
            employee.update(&self.db).await?;
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Employee::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
