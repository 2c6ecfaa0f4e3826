//! Controller tests drive each controller with stub use-cases.
//!
//! `Stub<A, T>` records every argument it receives and answers with a preset `Outcome`,
//! so tests can check both the status mapping and what reached the use-case.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use sea_orm::DbErr;
use serde_json::{json, Value};

use crate::server::{
    error::domain::{DomainError, UseCaseError},
    http::{Controller, HttpRequest, HttpResponse},
    model::{
        account::{Account, AuthenticationParam, CreateAccountParam, UpdateAccountParam},
        employee::{Employee, EmployeeProps, UpdateEmployeeParam},
        student::{Student, StudentProps, UpdateStudentParam},
    },
    service::{
        account::{
            CreateAccount, DeleteAccount, GetAccountByEmail, GetAccountById, GetAccounts,
            UpdateAccount,
        },
        auth::{Authenticate, RevokeAccessToken},
        employee::{
            CreateEmployee, DeleteEmployee, GetEmployeeByEmail, GetEmployeeById, GetEmployees,
            UpdateEmployee,
        },
        student::{
            CreateStudent, DeleteStudent, GetStudentByEmail, GetStudentById, GetStudents,
            UpdateStudent,
        },
    },
    util::email::EmailAddressValidator,
};


#[derive(Clone)]
enum Outcome<T> {
    Ok(T),
    Domain(DomainError),
    Repository,
}

struct Stub<A, T> {
    outcome: Outcome<T>,
    received: Mutex<Vec<A>>,
}

impl<A, T: Clone> Stub<A, T> {
    fn returning(value: T) -> Arc<Self> {
        Self::with(Outcome::Ok(value))
    }

    fn failing(err: DomainError) -> Arc<Self> {
        Self::with(Outcome::Domain(err))
    }

    fn broken() -> Arc<Self> {
        Self::with(Outcome::Repository)
    }

    fn with(outcome: Outcome<T>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            received: Mutex::new(Vec::new()),
        })
    }

    fn call(&self, arg: A) -> Result<T, UseCaseError> {
        self.received.lock().unwrap().push(arg);

        match &self.outcome {
            Outcome::Ok(value) => Ok(value.clone()),
            Outcome::Domain(err) => Err(err.clone().into()),
            Outcome::Repository => Err(DbErr::Custom("connection lost".to_string()).into()),
        }
    }

    fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<A: Clone, T> Stub<A, T> {
    fn last(&self) -> Option<A> {
        self.received.lock().unwrap().last().cloned()
    }
}

/// Implements a use-case trait for `Stub`, mapping the call arguments onto the recorded
/// argument type.
macro_rules! stub_use_case {
    ($trait:ident, $arg:ty, $ret:ty, || $record:expr) => {
        #[async_trait]
        impl $trait for Stub<$arg, $ret> {
            async fn execute(&self) -> Result<$ret, UseCaseError> {
                self.call($record)
            }
        }
    };
    ($trait:ident, $arg:ty, $ret:ty, |$($name:ident : $ty:ty),+| $record:expr) => {
        #[async_trait]
        impl $trait for Stub<$arg, $ret> {
            async fn execute(&self, $($name: $ty),+) -> Result<$ret, UseCaseError> {
                self.call($record)
            }
        }
    };
}

stub_use_case!(CreateAccount, CreateAccountParam, Account, |param: CreateAccountParam| param);
stub_use_case!(GetAccounts, (), Vec<Account>, || ());
stub_use_case!(GetAccountById, String, Option<Account>, |id: &str| id.to_string());
stub_use_case!(GetAccountByEmail, String, Option<Account>, |email: &str| email.to_string());
stub_use_case!(UpdateAccount, (String, UpdateAccountParam), (), |id: &str, param: UpdateAccountParam| (id.to_string(), param));
stub_use_case!(DeleteAccount, String, (), |id: &str| id.to_string());

stub_use_case!(Authenticate, AuthenticationParam, String, |param: AuthenticationParam| param);
stub_use_case!(RevokeAccessToken, String, (), |token: &str| token.to_string());

stub_use_case!(CreateStudent, StudentProps, Student, |props: StudentProps| props);
stub_use_case!(GetStudents, (), Vec<Student>, || ());
stub_use_case!(GetStudentById, String, Option<Student>, |id: &str| id.to_string());
stub_use_case!(GetStudentByEmail, String, Option<Student>, |email: &str| email.to_string());
stub_use_case!(UpdateStudent, (String, UpdateStudentParam), (), |id: &str, param: UpdateStudentParam| (id.to_string(), param));
stub_use_case!(DeleteStudent, String, (), |id: &str| id.to_string());

stub_use_case!(CreateEmployee, EmployeeProps, Employee, |props: EmployeeProps| props);
stub_use_case!(GetEmployees, (), Vec<Employee>, || ());
stub_use_case!(GetEmployeeById, String, Option<Employee>, |id: &str| id.to_string());
stub_use_case!(GetEmployeeByEmail, String, Option<Employee>, |email: &str| email.to_string());
stub_use_case!(UpdateEmployee, (String, UpdateEmployeeParam), (), |id: &str, param: UpdateEmployeeParam| (id.to_string(), param));
stub_use_case!(DeleteEmployee, String, (), |id: &str| id.to_string());

fn email_validator() -> Arc<EmailAddressValidator> {
    Arc::new(EmailAddressValidator)
}

fn body(value: Value) -> HttpRequest {
    HttpRequest::default().with_body(value)
}

fn error_body(message: &str) -> Option<Value> {
    Some(json!({ "error": message }))
}

fn assert_status(response: &HttpResponse, status: StatusCode) {
    assert_eq!(response.status_code, status, "body: {:?}", response.body);
}

/// Every controller answers a domain rejection with 400 and a repository failure with 500.
async fn assert_error_mapping<C: Controller>(
    domain: C,
    repository: C,
    request: HttpRequest,
    message: &str,
) {
    let response = domain.handle(request.clone()).await;
    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, error_body(message));

    let response = repository.handle(request).await;
    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, error_body("Internal server error"));
}
