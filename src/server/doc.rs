//! OpenAPI documentation configuration.
//!
//! `ApiDoc` collects every route handler annotated with `#[utoipa::path]`. The bearer
//! scheme documents the access token returned by `POST /api/sign-in`; the role
//! middleware also accepts it in the `x-access-token` header.

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{account::Role, api::ErrorDto},
    server::route,
};

/// Registers the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Secretaria API",
        description = "Accounts, students and employees of a school administration."
    ),
    paths(
        route::auth::sign_up,
        route::auth::sign_in,
        route::auth::sign_out,
        route::account::create_account,
        route::account::get_accounts,
        route::account::get_account_by_id,
        route::account::get_account_by_email,
        route::account::update_account,
        route::account::delete_account,
        route::student::create_student,
        route::student::get_students,
        route::student::get_student_by_id,
        route::student::get_student_by_email,
        route::student::update_student,
        route::student::delete_student,
        route::employee::create_employee,
        route::employee::get_employees,
        route::employee::get_employee_by_id,
        route::employee::get_employee_by_email,
        route::employee::update_employee,
        route::employee::delete_employee,
    ),
    components(schemas(ErrorDto, Role)),
    tags(
        (name = "auth", description = "Sign up, sign in and sign out"),
        (name = "usuarios", description = "Account management"),
        (name = "alunos", description = "Student records"),
        (name = "funcionarios", description = "Employee records")
    )
)]
pub struct ApiDoc;
