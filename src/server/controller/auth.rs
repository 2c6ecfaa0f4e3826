use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    model::auth::{AccessTokenDto, SignInDto, SignUpDto},
    server::{
        controller::respond,
        error::param::{InvalidParamError, MissingParamError},
        http::{helper, Controller, HttpRequest, HttpResponse},
        model::account::{AuthenticationParam, CreateAccountParam},
        service::{
            account::CreateAccount,
            auth::{Authenticate, RevokeAccessToken},
        },
        util::email::EmailValidator,
    },
};

const SIGN_UP_REQUIRED: [&str; 3] = ["email", "password", "passwordConfirmation"];
const SIGN_IN_REQUIRED: [&str; 2] = ["email", "password"];

/// Public registration. Always creates a `USER` account and returns it.
pub struct SignUpController {
    create_account: Arc<dyn CreateAccount>,
    email_validator: Arc<dyn EmailValidator>,
}

impl SignUpController {
    pub fn new(
        create_account: Arc<dyn CreateAccount>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            create_account,
            email_validator,
        }
    }

    async fn sign_up(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        if let Some(err) = helper::missing_param(&request.body, &SIGN_UP_REQUIRED) {
            return Err(helper::bad_request(err));
        }

        let dto: SignUpDto = helper::parse_body(&request.body).map_err(helper::bad_request)?;

        if dto.password != dto.password_confirmation {
            return Err(helper::bad_request(InvalidParamError::new(
                "passwordConfirmation",
            )));
        }
        if !self.email_validator.is_valid(&dto.email) {
            return Err(helper::bad_request(InvalidParamError::new("email")));
        }

        let account = self
            .create_account
            .execute(CreateAccountParam::from(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::ok(account.into_dto()))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.sign_up(request).await)
    }
}

pub struct SignInController {
    authenticate: Arc<dyn Authenticate>,
}

impl SignInController {
    pub fn new(authenticate: Arc<dyn Authenticate>) -> Self {
        Self { authenticate }
    }

    async fn sign_in(&self, request: HttpRequest) -> Result<HttpResponse, HttpResponse> {
        if let Some(err) = helper::missing_param(&request.body, &SIGN_IN_REQUIRED) {
            return Err(helper::bad_request(err));
        }

        let dto: SignInDto = helper::parse_body(&request.body).map_err(helper::bad_request)?;

        let access_token = self
            .authenticate
            .execute(AuthenticationParam::from(dto))
            .await
            .map_err(helper::use_case_error)?;

        Ok(helper::ok(AccessTokenDto { access_token }))
    }
}

#[async_trait]
impl Controller for SignInController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        respond(self.sign_in(request).await)
    }
}

/// Clears the caller's access token.
pub struct SignOutController {
    revoke_access_token: Arc<dyn RevokeAccessToken>,
}

impl SignOutController {
    pub fn new(revoke_access_token: Arc<dyn RevokeAccessToken>) -> Self {
        Self {
            revoke_access_token,
        }
    }
}

#[async_trait]
impl Controller for SignOutController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let Some(token) = request.access_token.as_deref() else {
            return helper::bad_request(MissingParamError::new("accessToken"));
        };

        match self.revoke_access_token.execute(token).await {
            Ok(()) => helper::ok_empty(),
            Err(err) => helper::use_case_error(err),
        }
    }
}
