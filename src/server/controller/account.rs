use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    model::account::{CreateAccountDto, UpdateAccountDto},
    server::{
        controller::respond,
        error::param::{InvalidParamError, MissingParamError},
        http::{helper, Controller, HttpRequest, HttpResponse},
        model::account::{CreateAccountParam, UpdateAccountParam},
        service::account::{
            CreateAccount, DeleteAccount, GetAccountByEmail, GetAccountById, GetAccounts,
            UpdateAccount,
        },
        util::email::EmailValidator,
    },
};

const CREATE_REQUIRED: [&str; 3] = ["email", "password", "passwordConfirmation"];

pub struct CreateAccountController {
    create_account: Arc<dyn CreateAccount>,
    email_validator: Arc<dyn EmailValidator>,
}

impl CreateAccountController {
    pub fn new(
        create_account: Arc<dyn CreateAccount>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            create_account,
            email_validator,
        }
    }

    async fn create(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        if let Some(err) = helper::missing_param(&request.body, &CREATE_REQUIRED) {
            return Err(helper::bad_request(err));
        }

        let dto: CreateAccountDto =
            helper::parse_body(&request.body).map_err(helper::bad_request)?;

        if dto.password != dto.password_confirmation {
            return Err(helper::bad_request(InvalidParamError::new(
                "passwordConfirmation",
            )));
        }
        if !self.email_validator.is_valid(&dto.email) {
            return Err(helper::bad_request(InvalidParamError::new("email")));
        }

        self.create_account
            .execute(CreateAccountParam::from_dto(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::created())
    }
}

#[async_trait]
impl Controller for CreateAccountController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.create(request).await)
    }
}

pub struct GetAccountsController {
    get_accounts: Arc<dyn GetAccounts>,
}

impl GetAccountsController {
    pub fn new(get_accounts: Arc<dyn GetAccounts>) -> Self {
        Self { get_accounts }
    }
}

#[async_trait]
impl Controller for GetAccountsController {
    async fn handle(&self, _request: HttpRequest) -> HttpResponse {
        match self.get_accounts.execute().await {
            Ok(accounts) => helper::ok(
                accounts
                    .into_iter()
                    .map(|account| account.into_dto())
                    .collect::<Vec<_>>(),
            ),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetAccountByIdController {
    get_account_by_id: Arc<dyn GetAccountById>,
}

impl GetAccountByIdController {
    pub fn new(get_account_by_id: Arc<dyn GetAccountById>) -> Self {
        Self { get_account_by_id }
    }
}

#[async_trait]
impl Controller for GetAccountByIdController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.get_account_by_id.execute(id).await {
            Ok(account) => helper::ok(account.map(|account| account.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct GetAccountByEmailController {
    get_account_by_email: Arc<dyn GetAccountByEmail>,
}

impl GetAccountByEmailController {
    pub fn new(get_account_by_email: Arc<dyn GetAccountByEmail>) -> Self {
        Self {
            get_account_by_email,
        }
    }
}

#[async_trait]
impl Controller for GetAccountByEmailController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(email) = request.param("email") else {
            return helper::bad_request(MissingParamError::new("email"));
        };

        match self.get_account_by_email.execute(email).await {
            Ok(account) => helper::ok(account.map(|account| account.into_dto())),
            Err(err) => helper::use_case_error(err),
        }
    }
}

pub struct UpdateAccountController {
    update_account: Arc<dyn UpdateAccount>,
    email_validator: Arc<dyn EmailValidator>,
}

impl UpdateAccountController {
    pub fn new(
        update_account: Arc<dyn UpdateAccount>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            update_account,
            email_validator,
        }
    }

    async fn update(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        let Some(id) = request.param("id") else {
            return Err(helper::bad_request(MissingParamError::new("id")));
        };

        let dto: UpdateAccountDto =
            helper::parse_patch(&request.body).map_err(helper::bad_request)?;

        if let Some(email) = &dto.email {
            if !self.email_validator.is_valid(email) {
                return Err(helper::bad_request(InvalidParamError::new("email")));
            }
        }

        // The avatar is always replaced: no uploaded file clears it.
        let param = UpdateAccountParam::from_dto(dto, request.base64_file.clone());

        self.update_account
            .execute(id, param)
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::ok_empty())
    }
}

#[async_trait]
impl Controller for UpdateAccountController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.update(request).await)
    }
}

pub struct DeleteAccountController {
    delete_account: Arc<dyn DeleteAccount>,
}

impl DeleteAccountController {
    pub fn new(delete_account: Arc<dyn DeleteAccount>) -> Self {
        Self { delete_account }
    }
}

#[async_trait]
impl Controller for DeleteAccountController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(id) = request.param("id") else {
            return helper::bad_request(MissingParamError::new("id"));
        };

        match self.delete_account.execute(id).await {
            Ok(()) => helper::ok_empty(),
            Err(err) => helper::use_case_error(err),
        }
    }
}
