use std::sync::Arc;

use async_trait::async_trait;

use crate::server::{
    data::student::StudentRepository,
    error::domain::{DomainError, UseCaseError},
    model::student::{Student, StudentProps, UpdateStudentParam},
};

const RESOURCE: &str = "Student";

#[async_trait]
pub trait CreateStudent: Send + Sync {
    async fn execute(&self, props: StudentProps) -> Result<Student, UseCaseError>;
}

#[async_trait]
pub trait GetStudents: Send + Sync {
    async fn execute(&self) -> Result<Vec<Student>, UseCaseError>;
}

#[async_trait]
pub trait GetStudentById: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Option<Student>, UseCaseError>;
}

#[async_trait]
pub trait GetStudentByEmail: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Option<Student>, UseCaseError>;
}

#[async_trait]
pub trait UpdateStudent: Send + Sync {
    async fn execute(&self, id: &str, param: UpdateStudentParam) -> Result<(), UseCaseError>;
}

#[async_trait]
pub trait DeleteStudent: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError>;
}

pub struct DbCreateStudent {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbCreateStudent {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl CreateStudent for DbCreateStudent {
    async fn execute(&self, props: StudentProps) -> Result<Student, UseCaseError> {
        if self
            .student_repository
            .get_by_email(&props.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailInUse.into());
        }

        Ok(self
            .student_repository
            .create(props)
            .await
            .map_err(UseCaseError::from_write)?)
    }
}

pub struct DbGetStudents {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbGetStudents {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl GetStudents for DbGetStudents {
    async fn execute(&self) -> Result<Vec<Student>, UseCaseError> {
        Ok(self.student_repository.get().await?)
    }
}

pub struct DbGetStudentById {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbGetStudentById {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl GetStudentById for DbGetStudentById {
    async fn execute(&self, id: &str) -> Result<Option<Student>, UseCaseError> {
        Ok(self.student_repository.get_by_id(id).await?)
    }
}

pub struct DbGetStudentByEmail {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbGetStudentByEmail {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl GetStudentByEmail for DbGetStudentByEmail {
    async fn execute(&self, email: &str) -> Result<Option<Student>, UseCaseError> {
        Ok(self.student_repository.get_by_email(email).await?)
    }
}

pub struct DbUpdateStudent {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbUpdateStudent {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl UpdateStudent for DbUpdateStudent {
    async fn execute(&self, id: &str, param: UpdateStudentParam) -> Result<(), UseCaseError> {
        if self.student_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        if let Some(email) = &param.email {
            if let Some(holder) = self.student_repository.get_by_email(email).await? {
                if holder.id() != id {
                    return Err(DomainError::EmailInUse.into());
                }
            }
        }

        self.student_repository
            .update(id, param)
            .await
            .map_err(UseCaseError::from_write)?;

        Ok(())
    }
}

pub struct DbDeleteStudent {
    student_repository: Arc<dyn StudentRepository>,
}

impl DbDeleteStudent {
    pub fn new(student_repository: Arc<dyn StudentRepository>) -> Self {
        Self { student_repository }
    }
}

#[async_trait]
impl DeleteStudent for DbDeleteStudent {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError> {
        if self.student_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        self.student_repository.delete(id).await?;

        Ok(())
    }
}
