use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    model::employee::{CreateEmployeeDto, UpdateEmployeeDto},
    server::{
        controller::respond,
        error::param::MissingParamError,
        http::{helper, Controller, HttpRequest, HttpResponse},
        model::employee::{EmployeeProps, UpdateEmployeeParam},
        service::employee::{
            CreateEmployee, DeleteEmployee, GetEmployeeByEmail, GetEmployeeById, GetEmployees,
            UpdateEmployee,
        },
    },
};

const CREATE_REQUIRED: [&str; 3] = ["nome", "email", "cargo"];

pub struct CreateEmployeeController {
    create_employee: Arc<dyn CreateEmployee>,
}

impl CreateEmployeeController {
    pub fn new(create_employee: Arc<dyn CreateEmployee>) -> Self {
        Self { create_employee }
    }

    async fn create(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        if let Some(err) = helper::missing_param(&request.body, &CREATE_REQUIRED) {
            return Err(helper::bad_request(err));
        }

        let dto: CreateEmployeeDto =
            helper::parse_body(&request.body).map_err(helper::bad_request)?;

        self.create_employee
            .execute(EmployeeProps::from_dto(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::created())
    }
}

#[async_trait]
impl Controller for CreateEmployeeController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.create(request).await)
    }
}

pub struct GetEmployeesController {
    get_employees: Arc<dyn GetEmployees>,
}

impl GetEmployeesController {
    pub fn new(get_employees: Arc<dyn GetEmployees>) -> Self {
        Self { get_employees }
    }
}

#[async_trait]
impl Controller for GetEmployeesController {
    async fn handle(&self, _request: HttpRequest) -> HttpResponse {
        match self.get_employees.execute().await {
            Ok(employees) => helper::ok(
                employees
                    .into_iter()
                    .map(|employee| employee.into_dto())
                    .collect::<Vec<_>>(),
            ),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetEmployeeByIdController {
    get_employee_by_id: Arc<dyn GetEmployeeById>,
}

impl GetEmployeeByIdController {
    pub fn new(get_employee_by_id: Arc<dyn GetEmployeeById>) -> Self {
        Self { get_employee_by_id }
    }
}

#[async_trait]
impl Controller for GetEmployeeByIdController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.get_employee_by_id.execute(id).await {
            Ok(employee) => helper::ok(employee.map(|employee| employee.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetEmployeeByEmailController {
    get_employee_by_email: Arc<dyn GetEmployeeByEmail>,
}

impl GetEmployeeByEmailController {
    pub fn new(get_employee_by_email: Arc<dyn GetEmployeeByEmail>) -> Self {
        Self {
            get_employee_by_email,
        }
    }
}

#[async_trait]
impl Controller for GetEmployeeByEmailController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(email) = request.param("email") else {
            return helper::bad_request(MissingParamError::new("email"));
        };

        match self.get_employee_by_email.execute(email).await {
            Ok(employee) => helper::ok(employee.map(|employee| employee.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct UpdateEmployeeController {
    update_employee: Arc<dyn UpdateEmployee>,
}

impl UpdateEmployeeController {
    pub fn new(update_employee: Arc<dyn UpdateEmployee>) -> Self {
        Self { update_employee }
    }

    async fn update(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        let Some(id) = request.param("id") else {
            return Err(helper::bad_request(MissingParamError::new("id")));
        };

        let dto: UpdateEmployeeDto =
            helper::parse_patch(&request.body).map_err(helper::bad_request)?;

        self.update_employee
            .execute(id, UpdateEmployeeParam::from(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::ok_empty())
    }
}

#[async_trait]
impl Controller for UpdateEmployeeController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.update(request).await)
    }
}

pub struct DeleteEmployeeController {
    delete_employee: Arc<dyn DeleteEmployee>,
}

impl DeleteEmployeeController {
    pub fn new(delete_employee: Arc<dyn DeleteEmployee>) -> Self {
        Self { delete_employee }
    }
}

#[async_trait]
impl Controller for DeleteEmployeeController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.delete_employee.execute(id).await {
            Ok(()) => helper::ok_empty(),
            Err(err) => helper::use_case_error(err),
        }
    }
}
