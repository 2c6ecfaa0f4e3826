use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    model::student::{CreateStudentDto, UpdateStudentDto},
    server::{
        controller::respond,
        error::param::MissingParamError,
        http::{helper, Controller, HttpRequest, HttpResponse},
        model::student::{StudentProps, UpdateStudentParam},
        service::student::{
            CreateStudent, DeleteStudent, GetStudentByEmail, GetStudentById, GetStudents,
            UpdateStudent,
        },
    },
};

const CREATE_REQUIRED: [&str; 9] = [
    "matricula",
    "nome",
    "status",
    "serie",
    "email",
    "nascimento",
    "sexo",
    "endereco",
    "emailResponsavel",
];

pub struct CreateStudentController {
    create_student: Arc<dyn CreateStudent>,
}

impl CreateStudentController {
    pub fn new(create_student: Arc<dyn CreateStudent>) -> Self {
        Self { create_student }
    }

    async fn create(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        if let Some(err) = helper::missing_param(&request.body, &CREATE_REQUIRED) {
            return Err(helper::bad_request(err));
        }

        let dto: CreateStudentDto =
            helper::parse_body(&request.body).map_err(helper::bad_request)?;

        self.create_student
            .execute(StudentProps::from_dto(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::created())
    }
}

#[async_trait]
impl Controller for CreateStudentController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.create(request).await)
    }
}

pub struct GetStudentsController {
    get_students: Arc<dyn GetStudents>,
}

impl GetStudentsController {
    pub fn new(get_students: Arc<dyn GetStudents>) -> Self {
        Self { get_students }
    }
}

#[async_trait]
impl Controller for GetStudentsController {
    async fn handle(&self, _request: HttpRequest) -> HttpResponse {
        match self.get_students.execute().await {
            Ok(students) => helper::ok(
                students
                    .into_iter()
                    .map(|student| student.into_dto())
                    .collect::<Vec<_>>(),
            ),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetStudentByIdController {
    get_student_by_id: Arc<dyn GetStudentById>,
}

impl GetStudentByIdController {
    pub fn new(get_student_by_id: Arc<dyn GetStudentById>) -> Self {
        Self { get_student_by_id }
    }
}

#[async_trait]
impl Controller for GetStudentByIdController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.get_student_by_id.execute(id).await {
            Ok(student) => helper::ok(student.map(|student| student.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetStudentByEmailController {
    get_student_by_email: Arc<dyn GetStudentByEmail>,
}

impl GetStudentByEmailController {
    pub fn new(get_student_by_email: Arc<dyn GetStudentByEmail>) -> Self {
        Self {
            get_student_by_email,
        }
    }
}

#[async_trait]
impl Controller for GetStudentByEmailController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(email) = request.param("email") else {
            return helper::bad_request(MissingParamError::new("email"));
        };

        match self.get_student_by_email.execute(email).await {
            Ok(student) => helper::ok(student.map(|student| student.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct UpdateStudentController {
    update_student: Arc<dyn UpdateStudent>,
}

impl UpdateStudentController {
    pub fn new(update_student: Arc<dyn UpdateStudent>) -> Self {
        Self { update_student }
    }

    async fn update(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        let Some(id) = request.param("id") else {
            return Err(helper::bad_request(MissingParamError::new("id")));
        };

        let dto: UpdateStudentDto =
            helper::parse_patch(&request.body).map_err(helper::bad_request)?;

        self.update_student
            .execute(id, UpdateStudentParam::from(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::ok_empty())
    }
}

#[async_trait]
impl Controller for UpdateStudentController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.update(request).await)
    }
}

pub struct DeleteStudentController {
    delete_student: Arc<dyn DeleteStudent>,
}

impl DeleteStudentController {
    pub fn new(delete_student: Arc<dyn DeleteStudent>) -> Self {
        Self { delete_student }
    }
}

#[async_trait]
impl Controller for DeleteStudentController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.delete_student.execute(id).await {
            Ok(()) => helper::ok_empty(),
            Err(err) => helper::use_case_error(err),
        }
    }
}
