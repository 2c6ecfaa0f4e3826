//! Student domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{CreateStudentDto, StudentDto, StudentPropsDto, UpdateStudentDto},
    server::model::entity::Entity,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProps {
    /// Enrollment number.
    pub matricula: i32,
    pub nome: String,
    pub status: String,
    /// Grade the student is enrolled in.
    pub serie: String,
    pub email: String,
    /// Date of birth.
    pub nascimento: DateTime<Utc>,
    pub sexo: String,
    pub endereco: String,
    /// Contact email of the legal guardian.
    pub email_responsavel: String,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub nome_mae: Option<String>,
    pub nome_pai: Option<String>,
    pub telefone_mae: Option<String>,
    pub telefone_pai: Option<String>,
}

pub type Student = Entity<StudentProps>;

impl Entity<StudentProps> {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self::with_id(
            entity.id,
            StudentProps {
                matricula: entity.matricula,
                nome: entity.nome,
                status: entity.status,
                serie: entity.serie,
                email: entity.email,
                nascimento: entity.nascimento,
                sexo: entity.sexo,
                endereco: entity.endereco,
                email_responsavel: entity.email_responsavel,
                cpf: entity.cpf,
                rg: entity.rg,
                nome_mae: entity.nome_mae,
                nome_pai: entity.nome_pai,
                telefone_mae: entity.telefone_mae,
                telefone_pai: entity.telefone_pai,
            },
        )
    }

    pub fn into_dto(self) -> StudentDto {
        self.into_dto_with(|props| StudentPropsDto {
            matricula: props.matricula,
            nome: props.nome,
            status: props.status,
            serie: props.serie,
            email: props.email,
            nascimento: props.nascimento,
            sexo: props.sexo,
            endereco: props.endereco,
            email_responsavel: props.email_responsavel,
            cpf: props.cpf,
            rg: props.rg,
            nome_mae: props.nome_mae,
            nome_pai: props.nome_pai,
            telefone_mae: props.telefone_mae,
            telefone_pai: props.telefone_pai,
        })
    }
}

impl StudentProps {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            matricula: dto.matricula,
            nome: dto.nome,
            status: dto.status,
            serie: dto.serie,
            email: dto.email,
            nascimento: dto.nascimento,
            sexo: dto.sexo,
            endereco: dto.endereco,
            email_responsavel: dto.email_responsavel,
            cpf: dto.cpf,
            rg: dto.rg,
            nome_mae: dto.nome_mae,
            nome_pai: dto.nome_pai,
            telefone_mae: dto.telefone_mae,
            telefone_pai: dto.telefone_pai,
        }
    }

    /// Returns the properties with every field present in `param` replaced.
    pub fn apply(self, param: UpdateStudentParam) -> Self {
        Self {
            matricula: param.matricula.unwrap_or(self.matricula),
            nome: param.nome.unwrap_or(self.nome),
            status: param.status.unwrap_or(self.status),
            serie: param.serie.unwrap_or(self.serie),
            email: param.email.unwrap_or(self.email),
            nascimento: param.nascimento.unwrap_or(self.nascimento),
            sexo: param.sexo.unwrap_or(self.sexo),
            endereco: param.endereco.unwrap_or(self.endereco),
            email_responsavel: param.email_responsavel.unwrap_or(self.email_responsavel),
            cpf: param.cpf.unwrap_or(self.cpf),
            rg: param.rg.unwrap_or(self.rg),
            nome_mae: param.nome_mae.unwrap_or(self.nome_mae),
            nome_pai: param.nome_pai.unwrap_or(self.nome_pai),
            telefone_mae: param.telefone_mae.unwrap_or(self.telefone_mae),
            telefone_pai: param.telefone_pai.unwrap_or(self.telefone_pai),
        }
    }
}

/// Partial student update. Optional columns use `Some(None)` to clear the stored value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateStudentParam {
    pub matricula: Option<i32>,
    pub nome: Option<String>,
    pub status: Option<String>,
    pub serie: Option<String>,
    pub email: Option<String>,
    pub nascimento: Option<DateTime<Utc>>,
    pub sexo: Option<String>,
    pub endereco: Option<String>,
    pub email_responsavel: Option<String>,
    pub cpf: Option<Option<String>>,
    pub rg: Option<Option<String>>,
    pub nome_mae: Option<Option<String>>,
    pub nome_pai: Option<Option<String>>,
    pub telefone_mae: Option<Option<String>>,
    pub telefone_pai: Option<Option<String>>,
}

impl From<UpdateStudentDto> for UpdateStudentParam {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            matricula: dto.matricula,
            nome: dto.nome,
            status: dto.status,
            serie: dto.serie,
            email: dto.email,
            nascimento: dto.nascimento,
            sexo: dto.sexo,
            endereco: dto.endereco,
            email_responsavel: dto.email_responsavel,
            cpf: dto.cpf,
            rg: dto.rg,
            nome_mae: dto.nome_mae,
            nome_pai: dto.nome_pai,
            telefone_mae: dto.telefone_mae,
            telefone_pai: dto.telefone_pai,
        }
    }
}
