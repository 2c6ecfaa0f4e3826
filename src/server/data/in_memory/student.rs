use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    data::{in_memory::InMemoryRepository, student::StudentRepository},
    model::student::{Student, StudentProps, UpdateStudentParam},
};

pub type InMemoryStudentRepository = InMemoryRepository<StudentProps>;

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, props: StudentProps) -> Result<Student, DbErr> {
        self.create_record(props).await
    }

    async fn get(&self) -> Result<Vec<Student>, DbErr> {
        Ok(self.all().await)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Student>, DbErr> {
        Ok(self.find_by_id(id).await)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        Ok(self.find_by_email(email).await)
    }

    async fn update(&self, id: &str, param: UpdateStudentParam) -> Result<(), DbErr> {
        self.patch(id, param).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        self.remove(id).await;
        Ok(())
    }
}
