use crate::{
    model::employee::{CreateEmployeeDto, EmployeeDto, EmployeePropsDto, UpdateEmployeeDto},
    server::model::entity::Entity,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProps {
    pub nome: String,
    pub email: String,
    /// Job title.
    pub cargo: String,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
}

pub type Employee = Entity<EmployeeProps>;

impl Entity<EmployeeProps> {
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self::with_id(
            entity.id,
            EmployeeProps {
                nome: entity.nome,
                email: entity.email,
                cargo: entity.cargo,
                telefone: entity.telefone,
                cpf: entity.cpf,
            },
        )
    }

    pub fn into_dto(self) -> EmployeeDto {
        self.into_dto_with(|props| EmployeePropsDto {
            nome: props.nome,
            email: props.email,
            cargo: props.cargo,
            telefone: props.telefone,
            cpf: props.cpf,
        })
    }
}

impl EmployeeProps {
    pub fn from_dto(dto: CreateEmployeeDto) -> Self {
        Self {
            nome: dto.nome,
            email: dto.email,
            cargo: dto.cargo,
            telefone: dto.telefone,
            cpf: dto.cpf,
        }
    }

    pub fn apply(self, param: UpdateEmployeeParam) -> Self {
        Self {
            nome: param.nome.unwrap_or(self.nome),
            email: param.email.unwrap_or(self.email),
            cargo: param.cargo.unwrap_or(self.cargo),
            telefone: param.telefone.unwrap_or(self.telefone),
            cpf: param.cpf.unwrap_or(self.cpf),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateEmployeeParam {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub cargo: Option<String>,
    pub telefone: Option<Option<String>>,
    pub cpf: Option<Option<String>>,
}

impl From<UpdateEmployeeDto> for UpdateEmployeeParam {
    fn from(dto: UpdateEmployeeDto) -> Self {
        Self {
            nome: dto.nome,
            email: dto.email,
            cargo: dto.cargo,
            telefone: dto.telefone,
            cpf: dto.cpf,
        }
    }
}
