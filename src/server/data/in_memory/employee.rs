use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    data::{in_memory::InMemoryRepository, employee::EmployeeRepository},
    model::employee::{Employee, EmployeeProps, UpdateEmployeeParam},
};

pub type InMemoryEmployeeRepository = InMemoryRepository<EmployeeProps>;

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, props: EmployeeProps) -> Result<Employee, DbErr> {
        self.create_record(props).await
    }

    async fn get(&self) -> Result<Vec<Employee>, DbErr> {
        Ok(self.all().await)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        Ok(self.find_by_id(id).await)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Employee>, DbErr> {
        Ok(self.find_by_email(email).await)
    }

    async fn update(&self, id: &str, param: UpdateEmployeeParam) -> Result<(), DbErr> {
        self.patch(id, param).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        self.remove(id).await;
        Ok(())
    }
}
