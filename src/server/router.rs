use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::account::Role,
    server::{
        doc::ApiDoc,
        middleware::auth::{require_roles, AuthGuard, RoleGate},
        route::{account, auth, employee, student},
        state::AppState,
    },
};

const ADMIN: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[Role::Admin, Role::User];

/// Wraps a single method route in the role check.
fn gated(
    route: MethodRouter<AppState>,
    guard: &Arc<AuthGuard>,
    roles: &'static [Role],
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        RoleGate::new(guard.clone(), roles),
        require_roles,
    ))
}

/// Builds the complete application router.
///
/// API routes live under `/api`; the OpenAPI document is served at
/// `/api-docs/openapi.json` with Swagger UI at `/docs`. Every request is traced and
/// CORS accepts any origin, method and header.
pub fn router(state: AppState) -> Router {
    let guard = state.auth_guard.clone();

    let api = Router::new()
        .route("/sign-up", post(auth::sign_up))
        .route("/sign-in", post(auth::sign_in))
        .route("/sign-out", gated(post(auth::sign_out), &guard, ANY_ROLE))
        .route(
            "/usuarios",
            gated(post(account::create_account), &guard, ADMIN),
        )
        .route("/usuarios", gated(get(account::get_accounts), &guard, ADMIN))
        .route(
            "/usuarios/{id}",
            gated(get(account::get_account_by_id), &guard, ANY_ROLE),
        )
        .route(
            "/usuarios/{id}",
            gated(put(account::update_account), &guard, ADMIN),
        )
        .route(
            "/usuarios/{id}",
            gated(delete(account::delete_account), &guard, ADMIN),
        )
        .route(
            "/usuarios/email/{email}",
            gated(get(account::get_account_by_email), &guard, ADMIN),
        )
        .route(
            "/alunos",
            gated(post(student::create_student), &guard, ADMIN),
        )
        .route(
            "/alunos",
            gated(get(student::get_students), &guard, ANY_ROLE),
        )
        .route(
            "/alunos/{id}",
            gated(get(student::get_student_by_id), &guard, ANY_ROLE),
        )
        .route(
            "/alunos/{id}",
            gated(put(student::update_student), &guard, ADMIN),
        )
        .route(
            "/alunos/{id}",
            gated(delete(student::delete_student), &guard, ADMIN),
        )
        .route(
            "/alunos/email/{email}",
            gated(get(student::get_student_by_email), &guard, ANY_ROLE),
        )
        .route(
            "/funcionarios",
            gated(post(employee::create_employee), &guard, ADMIN),
        )
        .route(
            "/funcionarios",
            gated(get(employee::get_employees), &guard, ANY_ROLE),
        )
        .route(
            "/funcionarios/{id}",
            gated(get(employee::get_employee_by_id), &guard, ANY_ROLE),
        )
        .route(
            "/funcionarios/{id}",
            gated(put(employee::update_employee), &guard, ADMIN),
        )
        .route(
            "/funcionarios/{id}",
            gated(delete(employee::delete_employee), &guard, ADMIN),
        )
        .route(
            "/funcionarios/email/{email}",
            gated(get(employee::get_employee_by_email), &guard, ANY_ROLE),
        );

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
