use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::student::{Student, StudentProps, UpdateStudentParam};

/// Persistence for student records, keyed by a generated UUID string.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Stores a new student under a freshly generated identifier.
    ///
    /// # Arguments
    /// - `props` - Validated student properties
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student with its new id
    /// - `Err(DbErr)` - The insert failed, including a unique violation on `email`
    async fn create(&self, props: StudentProps) -> Result<Student, DbErr>;

    /// Lists every student.
    async fn get(&self) -> Result<Vec<Student>, DbErr>;

    /// # Returns
    /// - `Ok(Some(Student))` - The student with this id
    /// - `Ok(None)` - No student has this id
    /// - `Err(DbErr)` - The query failed
    async fn get_by_id(&self, id: &str) -> Result<Option<Student>, DbErr>;

    /// Looks a student up by its own email, not the guardian's.
    async fn get_by_email(&self, email: &str) -> Result<Option<Student>, DbErr>;

    /// Merges the supplied fields into the stored student.
    ///
    /// # Arguments
    /// - `id` - Identifier of the student to change
    /// - `param` - Fields to replace, `Some(None)` clears an optional column
    ///
    /// # Returns
    /// - `Ok(())` - Updated, or no student has this id
    /// - `Err(DbErr)` - The update failed, including a unique violation on `email`
    async fn update(&self, id: &str, param: UpdateStudentParam) -> Result<(), DbErr>;

    /// Removes the student. Unknown ids are a no-op.
    async fn delete(&self, id: &str) -> Result<(), DbErr>;
}

/// Repository providing database operations for student records.
#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn create(&self, props: StudentProps) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            matricula: ActiveValue::Set(props.matricula),
            nome: ActiveValue::Set(props.nome),
            status: ActiveValue::Set(props.status),
            serie: ActiveValue::Set(props.serie),
            email: ActiveValue::Set(props.email),
            nascimento: ActiveValue::Set(props.nascimento),
            sexo: ActiveValue::Set(props.sexo),
            endereco: ActiveValue::Set(props.endereco),
            email_responsavel: ActiveValue::Set(props.email_responsavel),
            cpf: ActiveValue::Set(props.cpf),
            rg: ActiveValue::Set(props.rg),
            nome_mae: ActiveValue::Set(props.nome_mae),
            nome_pai: ActiveValue::Set(props.nome_pai),
            telefone_mae: ActiveValue::Set(props.telefone_mae),
            telefone_pai: ActiveValue::Set(props.telefone_pai),
        }
        .insert(&self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    async fn get(&self) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find().all(&self.db).await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    async fn update(&self, id: &str, param: UpdateStudentParam) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Student::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(());
        };

        let mut student: entity::student::ActiveModel = entity.into();
        if let Some(matricula) = param.matricula {
            student.matricula = ActiveValue::Set(matricula);
        }
        if let Some(nome) = param.nome {
            student.nome = ActiveValue::Set(nome);
        }
        if let Some(status) = param.status {
            student.status = ActiveValue::Set(status);
        }
        if let Some(serie) = param.serie {
            student.serie = ActiveValue::Set(serie);
        }
        if let Some(email) = param.email {
            student.email = ActiveValue::Set(email);
        }
        if let Some(nascimento) = param.nascimento {
            student.nascimento = ActiveValue::Set(nascimento);
        }
        if let Some(sexo) = param.sexo {
            student.sexo = ActiveValue::Set(sexo);
        }
        if let Some(endereco) = param.endereco {
            student.endereco = ActiveValue::Set(endereco);
        }
        if let Some(email_responsavel) = param.email_responsavel {
            student.email_responsavel = ActiveValue::Set(email_responsavel);
        }
        if let Some(cpf) = param.cpf {
            student.cpf = ActiveValue::Set(cpf);
        }
        if let Some(rg) = param.rg {
            student.rg = ActiveValue::Set(rg);
        }
        if let Some(nome_mae) = param.nome_mae {
            student.nome_mae = ActiveValue::Set(nome_mae);
        }
        if let Some(nome_pai) = param.nome_pai {
            student.nome_pai = ActiveValue::Set(nome_pai);
        }
        if let Some(telefone_mae) = param.telefone_mae {
            student.telefone_mae = ActiveValue::Set(telefone_mae);
        }
        if let Some(telefone_pai) = param.telefone_pai {
            student.telefone_pai = ActiveValue::Set(telefone_pai);
        }

        if student.is_changed() {
            student.update(&self.db).await?;
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
