//! Dependency wiring.
//!
//! One `make_*` function per controller, each assembling the use-case and repository it
//! needs from a database handle. All of them are called once from `Controllers::new`
//! while the router is built; nothing here runs per request.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    controller::{
        account::{
            CreateAccountController, DeleteAccountController, GetAccountByEmailController,
            GetAccountByIdController, GetAccountsController, UpdateAccountController,
        },
        auth::{SignInController, SignOutController, SignUpController},
        employee::{
            CreateEmployeeController, DeleteEmployeeController, GetEmployeeByEmailController,
            GetEmployeeByIdController, GetEmployeesController, UpdateEmployeeController,
        },
        student::{
            CreateStudentController, DeleteStudentController, GetStudentByEmailController,
            GetStudentByIdController, GetStudentsController, UpdateStudentController,
        },
    },
    data::{
        account::{AccountRepository, SeaOrmAccountRepository},
        employee::{EmployeeRepository, SeaOrmEmployeeRepository},
        student::{SeaOrmStudentRepository, StudentRepository},
    },
    http::Controller,
    middleware::auth::AuthGuard,
    service::{
        account::{
            DbCreateAccount, DbDeleteAccount, DbGetAccountByEmail, DbGetAccountById,
            DbGetAccounts, DbUpdateAccount,
        },
        auth::{DbAuthenticate, DbLoadAccountByToken, DbRevokeAccessToken},
        employee::{
            DbCreateEmployee, DbDeleteEmployee, DbGetEmployeeByEmail, DbGetEmployeeById,
            DbGetEmployees, DbUpdateEmployee,
        },
        student::{
            DbCreateStudent, DbDeleteStudent, DbGetStudentByEmail, DbGetStudentById,
            DbGetStudents, DbUpdateStudent,
        },
    },
    util::{
        email::{EmailAddressValidator, EmailValidator},
        encrypter::{Argon2Encrypter, Encrypter},
        token::{RandomTokenGenerator, TokenGenerator},
    },
};

fn account_repository(db: &DatabaseConnection) -> Arc<dyn AccountRepository> {
    Arc::new(SeaOrmAccountRepository::new(db.clone()))
}

fn student_repository(db: &DatabaseConnection) -> Arc<dyn StudentRepository> {
    Arc::new(SeaOrmStudentRepository::new(db.clone()))
}

fn employee_repository(db: &DatabaseConnection) -> Arc<dyn EmployeeRepository> {
    Arc::new(SeaOrmEmployeeRepository::new(db.clone()))
}

fn encrypter() -> Arc<dyn Encrypter> {
    Arc::new(Argon2Encrypter::default())
}

fn email_validator() -> Arc<dyn EmailValidator> {
    Arc::new(EmailAddressValidator)
}

fn token_generator() -> Arc<dyn TokenGenerator> {
    Arc::new(RandomTokenGenerator)
}

pub fn make_auth_guard(db: &DatabaseConnection) -> AuthGuard {
    AuthGuard::new(Arc::new(DbLoadAccountByToken::new(account_repository(db))))
}

pub fn make_create_account_controller(db: &DatabaseConnection) -> CreateAccountController {
    CreateAccountController::new(
        Arc::new(DbCreateAccount::new(encrypter(), account_repository(db))),
        email_validator(),
    )
}

pub fn make_get_accounts_controller(db: &DatabaseConnection) -> GetAccountsController {
    GetAccountsController::new(Arc::new(DbGetAccounts::new(account_repository(db))))
}

pub fn make_get_account_by_id_controller(db: &DatabaseConnection) -> GetAccountByIdController {
    GetAccountByIdController::new(Arc::new(DbGetAccountById::new(account_repository(db))))
}

pub fn make_get_account_by_email_controller(
    db: &DatabaseConnection,
) -> GetAccountByEmailController {
    GetAccountByEmailController::new(Arc::new(DbGetAccountByEmail::new(account_repository(
        db,
    ))))
}

pub fn make_update_account_controller(db: &DatabaseConnection) -> UpdateAccountController {
    UpdateAccountController::new(
        Arc::new(DbUpdateAccount::new(encrypter(), account_repository(db))),
        email_validator(),
    )
}

pub fn make_delete_account_controller(db: &DatabaseConnection) -> DeleteAccountController {
    DeleteAccountController::new(Arc::new(DbDeleteAccount::new(account_repository(db))))
}

pub fn make_sign_up_controller(db: &DatabaseConnection) -> SignUpController {
    SignUpController::new(
        Arc::new(DbCreateAccount::new(encrypter(), account_repository(db))),
        email_validator(),
    )
}

pub fn make_sign_in_controller(db: &DatabaseConnection) -> SignInController {
    SignInController::new(Arc::new(DbAuthenticate::new(
        encrypter(),
        token_generator(),
        account_repository(db),
    )))
}

pub fn make_sign_out_controller(db: &DatabaseConnection) -> SignOutController {
    SignOutController::new(Arc::new(DbRevokeAccessToken::new(account_repository(db))))
}

pub fn make_create_student_controller(db: &DatabaseConnection) -> CreateStudentController {
    CreateStudentController::new(Arc::new(DbCreateStudent::new(student_repository(db))))
}

pub fn make_get_students_controller(db: &DatabaseConnection) -> GetStudentsController {
    GetStudentsController::new(Arc::new(DbGetStudents::new(student_repository(db))))
}

pub fn make_get_student_by_id_controller(db: &DatabaseConnection) -> GetStudentByIdController {
    GetStudentByIdController::new(Arc::new(DbGetStudentById::new(student_repository(db))))
}

pub fn make_get_student_by_email_controller(
    db: &DatabaseConnection,
) -> GetStudentByEmailController {
    GetStudentByEmailController::new(Arc::new(DbGetStudentByEmail::new(student_repository(
        db,
    ))))
}

pub fn make_update_student_controller(db: &DatabaseConnection) -> UpdateStudentController {
    UpdateStudentController::new(Arc::new(DbUpdateStudent::new(student_repository(db))))
}

pub fn make_delete_student_controller(db: &DatabaseConnection) -> DeleteStudentController {
    DeleteStudentController::new(Arc::new(DbDeleteStudent::new(student_repository(db))))
}

pub fn make_create_employee_controller(db: &DatabaseConnection) -> CreateEmployeeController {
    CreateEmployeeController::new(Arc::new(DbCreateEmployee::new(employee_repository(db))))
}

pub fn make_get_employees_controller(db: &DatabaseConnection) -> GetEmployeesController {
    GetEmployeesController::new(Arc::new(DbGetEmployees::new(employee_repository(db))))
}

pub fn make_get_employee_by_id_controller(db: &DatabaseConnection) -> GetEmployeeByIdController {
    GetEmployeeByIdController::new(Arc::new(DbGetEmployeeById::new(employee_repository(db))))
}

pub fn make_get_employee_by_email_controller(
    db: &DatabaseConnection,
) -> GetEmployeeByEmailController {
    GetEmployeeByEmailController::new(Arc::new(DbGetEmployeeByEmail::new(employee_repository(
        db,
    ))))
}

pub fn make_update_employee_controller(db: &DatabaseConnection) -> UpdateEmployeeController {
    UpdateEmployeeController::new(Arc::new(DbUpdateEmployee::new(employee_repository(db))))
}

pub fn make_delete_employee_controller(db: &DatabaseConnection) -> DeleteEmployeeController {
    DeleteEmployeeController::new(Arc::new(DbDeleteEmployee::new(employee_repository(db))))
}

/// Every controller the router dispatches to, built once at startup.
pub struct Controllers {
    pub create_account: Box<dyn Controller>,
    pub get_accounts: Box<dyn Controller>,
    pub get_account_by_id: Box<dyn Controller>,
    pub get_account_by_email: Box<dyn Controller>,
    pub update_account: Box<dyn Controller>,
    pub delete_account: Box<dyn Controller>,

    pub sign_up: Box<dyn Controller>,
    pub sign_in: Box<dyn Controller>,
    pub sign_out: Box<dyn Controller>,

    pub create_student: Box<dyn Controller>,
    pub get_students: Box<dyn Controller>,
    pub get_student_by_id: Box<dyn Controller>,
    pub get_student_by_email: Box<dyn Controller>,
    pub update_student: Box<dyn Controller>,
    pub delete_student: Box<dyn Controller>,

    pub create_employee: Box<dyn Controller>,
    pub get_employees: Box<dyn Controller>,
    pub get_employee_by_id: Box<dyn Controller>,
    pub get_employee_by_email: Box<dyn Controller>,
    pub update_employee: Box<dyn Controller>,
    pub delete_employee: Box<dyn Controller>,
}

impl Controllers {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            create_account: Box::new(make_create_account_controller(db)),
            get_accounts: Box::new(make_get_accounts_controller(db)),
            get_account_by_id: Box::new(make_get_account_by_id_controller(db)),
            get_account_by_email: Box::new(make_get_account_by_email_controller(db)),
            update_account: Box::new(make_update_account_controller(db)),
            delete_account: Box::new(make_delete_account_controller(db)),

            sign_up: Box::new(make_sign_up_controller(db)),
            sign_in: Box::new(make_sign_in_controller(db)),
            sign_out: Box::new(make_sign_out_controller(db)),

            create_student: Box::new(make_create_student_controller(db)),
            get_students: Box::new(make_get_students_controller(db)),
            get_student_by_id: Box::new(make_get_student_by_id_controller(db)),
            get_student_by_email: Box::new(make_get_student_by_email_controller(db)),
            update_student: Box::new(make_update_student_controller(db)),
            delete_student: Box::new(make_delete_student_controller(db)),

            create_employee: Box::new(make_create_employee_controller(db)),
            get_employees: Box::new(make_get_employees_controller(db)),
            get_employee_by_id: Box::new(make_get_employee_by_id_controller(db)),
            get_employee_by_email: Box::new(make_get_employee_by_email_controller(db)),
            update_employee: Box::new(make_update_employee_controller(db)),
            delete_employee: Box::new(make_delete_employee_controller(db)),
        }
    }
}
