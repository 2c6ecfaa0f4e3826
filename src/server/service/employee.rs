use std::sync::Arc;

use async_trait::async_trait;

use crate::server::{
    data::employee::EmployeeRepository,
    error::domain::{DomainError, UseCaseError},
    model::employee::{Employee, EmployeeProps, UpdateEmployeeParam},
};

const RESOURCE: &str = "Employee";

#[async_trait]
pub trait CreateEmployee: Send + Sync {
    async fn execute(&self, props: EmployeeProps) -> Result<Employee, UseCaseError>;
}

#[async_trait]
pub trait GetEmployees: Send + Sync {
    async fn execute(&self) -> Result<Vec<Employee>, UseCaseError>;
}

#[async_trait]
pub trait GetEmployeeById: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Option<Employee>, UseCaseError>;
}

#[async_trait]
pub trait GetEmployeeByEmail: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Option<Employee>, UseCaseError>;
}

#[async_trait]
pub trait UpdateEmployee: Send + Sync {
    async fn execute(&self, id: &str, param: UpdateEmployeeParam) -> Result<(), UseCaseError>;
}

#[async_trait]
pub trait DeleteEmployee: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError>;
}

pub struct DbCreateEmployee {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbCreateEmployee {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl CreateEmployee for DbCreateEmployee {
    async fn execute(&self, props: EmployeeProps) -> Result<Employee, UseCaseError> {
        if self
            .employee_repository
            .get_by_email(&props.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailInUse.into());
        }

        Ok(self
            .employee_repository
            .create(props)
            .await
            .map_err(UseCaseError::from_write)?)
    }
}

pub struct DbGetEmployees {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbGetEmployees {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl GetEmployees for DbGetEmployees {
    async fn execute(&self) -> Result<Vec<Employee>, UseCaseError> {
        Ok(self.employee_repository.get().await?)
    }
}

pub struct DbGetEmployeeById {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbGetEmployeeById {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl GetEmployeeById for DbGetEmployeeById {
    async fn execute(&self, id: &str) -> Result<Option<Employee>, UseCaseError> {
        Ok(self.employee_repository.get_by_id(id).await?)
    }
}

pub struct DbGetEmployeeByEmail {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbGetEmployeeByEmail {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl GetEmployeeByEmail for DbGetEmployeeByEmail {
    async fn execute(&self, email: &str) -> Result<Option<Employee>, UseCaseError> {
        Ok(self.employee_repository.get_by_email(email).await?)
    }
}

pub struct DbUpdateEmployee {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbUpdateEmployee {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl UpdateEmployee for DbUpdateEmployee {
    async fn execute(&self, id: &str, param: UpdateEmployeeParam) -> Result<(), UseCaseError> {
        if self.employee_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        if let Some(email) = &param.email {
            if let Some(holder) = self.employee_repository.get_by_email(email).await? {
                if holder.id() != id {
                    return Err(DomainError::EmailInUse.into());
                }
            }
        }

        self.employee_repository
            .update(id, param)
            .await
            .map_err(UseCaseError::from_write)?;

        Ok(())
    }
}

pub struct DbDeleteEmployee {
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DbDeleteEmployee {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repository }
    }
}

#[async_trait]
impl DeleteEmployee for DbDeleteEmployee {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError> {
        if self.employee_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        self.employee_repository.delete(id).await?;

        Ok(())
    }
}
