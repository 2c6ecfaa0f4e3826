//! Router level tests: real routes, middleware and repositories over in-memory SQLite.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory::account::AccountFactory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

const ADMIN_TOKEN: &str = "admin-token";

async fn setup() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.unwrap();

    AccountFactory::new(&db)
        .id("admin")
        .email("admin@mail.com")
        .admin()
        .access_token(ADMIN_TOKEN)
        .build()
        .await
        .unwrap();

    (router(AppState::new(db.clone())), db)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends one request and returns the status with the parsed JSON body, `None` when empty.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    (status, body)
}

fn student_body(email: &str) -> Value {
    json!({
        "matricula": 7,
        "nome": "Bruno Alves",
        "status": "ATIVO",
        "serie": "3 ANO",
        "email": email,
        "nascimento": "2016-03-15T00:00:00Z",
        "sexo": "MASCULINO",
        "endereco": "Rua B, 20",
        "emailResponsavel": "responsavel@mail.com"
    })
}

/// Tests account creation through the admin route.
///
/// Expected: 201 for a new email, 400 "Email already in use" when repeated
#[tokio::test]
async fn admin_creates_accounts() {
    let (app, _db) = setup().await;
    let account = json!({
        "email": "professor@mail.com",
        "password": "secret",
        "passwordConfirmation": "secret",
        "role": "USER"
    });

    let (status, body) = send(
        &app,
        request(Method::POST, "/api/usuarios", Some(ADMIN_TOKEN), Some(account.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_none());

    let (status, body) = send(
        &app,
        request(Method::POST, "/api/usuarios", Some(ADMIN_TOKEN), Some(account)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Some(json!({ "error": "Email already in use" })));

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/usuarios", Some(ADMIN_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap().as_array().map(Vec::len), Some(2));
}

/// Tests the role gate on an admin route.
///
/// Expected: 403 without a token, with an unknown token and with a USER token
#[tokio::test]
async fn gate_rejects_unauthorized_callers() {
    let (app, db) = setup().await;
    AccountFactory::new(&db)
        .access_token("user-token")
        .build()
        .await
        .unwrap();

    for token in [None, Some("nope"), Some("user-token")] {
        let (status, body) = send(&app, request(Method::GET, "/api/usuarios", token, None)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, Some(json!({ "error": "Access denied" })));
    }
}

/// Tests the `x-access-token` header.
///
/// Expected: 200 on an admin route
#[tokio::test]
async fn accepts_access_token_header() {
    let (app, _db) = setup().await;

    let request = Request::builder()
        .uri("/api/usuarios")
        .header("x-access-token", ADMIN_TOKEN)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
}

/// Tests the full session lifecycle of a self-registered user.
///
/// Verifies that sign-up creates a USER, the issued token opens ANY_ROLE routes but
/// not admin routes, and sign-out invalidates it.
///
/// Expected: 200 on sign-up, sign-in and sign-out, then 403 with the revoked token
#[tokio::test]
async fn session_lifecycle() {
    let (app, _db) = setup().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/sign-up",
            None,
            Some(json!({
                "email": "new@mail.com",
                "password": "secret",
                "passwordConfirmation": "secret",
                "role": "ADMIN"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let account = body.unwrap();
    assert_eq!(account["props"]["role"], "USER");
    assert!(account["props"].get("password").is_none());
    let id = account["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/sign-in",
            None,
            Some(json!({ "email": "new@mail.com", "password": "secret" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body.unwrap()["accessToken"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/api/usuarios/{}", id), Some(token.as_str()), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["props"]["email"], "new@mail.com");

    let (status, _) = send(&app, request(Method::GET, "/api/usuarios", Some(token.as_str()), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, request(Method::POST, "/api/sign-out", Some(token.as_str()), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_none());

    let (status, _) = send(
        &app,
        request(Method::GET, &format!("/api/usuarios/{}", id), Some(token.as_str()), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests sign-in with a wrong password.
///
/// Expected: 400 "Invalid credentials"
#[tokio::test]
async fn rejects_wrong_password() {
    let (app, _db) = setup().await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/sign-in",
            None,
            Some(json!({ "email": "admin@mail.com", "password": "wrong" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Some(json!({ "error": "Invalid credentials" })));
}

/// Tests student CRUD through the routes.
///
/// Expected: create 201, read by email, update 200, delete 200, then `null` by id
#[tokio::test]
async fn manages_students() {
    let (app, _db) = setup().await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/alunos",
            Some(ADMIN_TOKEN),
            Some(student_body("bruno@mail.com")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/api/alunos/email/bruno@mail.com",
            Some(ADMIN_TOKEN),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let student = body.unwrap();
    let id = student["_id"].as_str().unwrap().to_string();
    assert_eq!(student["props"]["matricula"], 7);

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/alunos/{}", id),
            Some(ADMIN_TOKEN),
            Some(json!({ "serie": "4 ANO", "nomeMae": "Clara Alves" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        request(Method::GET, &format!("/api/alunos/{}", id), Some(ADMIN_TOKEN), None),
    )
    .await;
    let props = &body.unwrap()["props"];
    assert_eq!(props["serie"], "4 ANO");
    assert_eq!(props["nomeMae"], "Clara Alves");
    assert_eq!(props["nome"], "Bruno Alves");

    let (status, _) = send(
        &app,
        request(Method::DELETE, &format!("/api/alunos/{}", id), Some(ADMIN_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/api/alunos/{}", id), Some(ADMIN_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(Value::Null));

    let (status, body) = send(
        &app,
        request(Method::DELETE, &format!("/api/alunos/{}", id), Some(ADMIN_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Some(json!({ "error": "Student not found" })));
}

/// Tests employee reads are open to users while writes stay admin only.
///
/// Expected: 403 for a USER create, 201 for the admin, 200 list for the USER
#[tokio::test]
async fn employee_writes_require_admin() {
    let (app, db) = setup().await;
    AccountFactory::new(&db)
        .access_token("user-token")
        .build()
        .await
        .unwrap();
    let employee = json!({ "nome": "Rita Dias", "email": "rita@mail.com", "cargo": "PROFESSORA" });

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/funcionarios", Some("user-token"), Some(employee.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/funcionarios", Some(ADMIN_TOKEN), Some(employee)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/funcionarios", Some("user-token"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()[0]["props"]["cargo"], "PROFESSORA");
}

/// Tests the OpenAPI document is served.
///
/// Expected: 200 with the account routes listed
#[tokio::test]
async fn serves_openapi_document() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, request(Method::GET, "/api-docs/openapi.json", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.unwrap()["paths"].get("/api/usuarios").is_some());
}

/// Tests simultaneous student creates with one email.
///
/// Expected: one 201, every other request 400 "Email already in use", one stored row
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_store_email_once() {
    let (app, _db) = setup().await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    request(
                        Method::POST,
                        "/api/alunos",
                        Some(ADMIN_TOKEN),
                        Some(student_body("disputado@mail.com")),
                    ),
                )
                .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            (StatusCode::CREATED, _) => created += 1,
            (status, body) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, Some(json!({ "error": "Email already in use" })));
            }
        }
    }
    assert_eq!(created, 1);

    let (_, body) = send(
        &app,
        request(Method::GET, "/api/alunos", Some(ADMIN_TOKEN), None),
    )
    .await;
    assert_eq!(body.unwrap().as_array().map(Vec::len), Some(1));
}
