//! Sign-up pipeline.

use std::sync::Arc;

use crate::signup::{
    CreateAccount, EmailValidator, Fault, REQUIRED_FIELDS, Reply, RequestBody,
    SignupError, bad_request, is_falsy, ok, server_error,
};

/// Sign-up request handler.
///
/// Validates the body then delegates account creation. Both collaborators
/// are injected at construction and fixed for the handler's lifetime; the
/// handler itself keeps no state across calls.
#[derive(Clone)]
pub struct SignUpHandler {
    email_validator: Arc<dyn EmailValidator>,
    create_account: Arc<dyn CreateAccount>,
}

impl SignUpHandler {
    /// Create a new [`SignUpHandler`].
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        create_account: Arc<dyn CreateAccount>,
    ) -> Self {
        Self {
            email_validator,
            create_account,
        }
    }

    /// Handle one sign-up request, always producing exactly one [`Reply`].
    ///
    /// Validation failures are explicit 400 branches; any fault raised by a
    /// collaborator is caught here and downgraded to a generic 500.
    pub async fn handle(&self, body: &RequestBody) -> Reply {
        match self.run(body).await {
            Ok(reply) => reply,
            Err(fault) => {
                tracing::error!(error = %fault, "sign-up pipeline fault");
                server_error()
            },
        }
    }

    async fn run(&self, body: &RequestBody) -> Result<Reply, Fault> {
        // Absent and empty fields behave identically, on purpose.
        for field in REQUIRED_FIELDS {
            if body.get(field).is_none_or(is_falsy) {
                return Ok(bad_request(SignupError::MissingParam(
                    field.into(),
                )));
            }
        }

        let password = &body["password"];
        if password != &body["passwordConfirmation"] {
            return Ok(bad_request(SignupError::InvalidParam(
                "passwordConfirmation".into(),
            )));
        }

        let valid_email = match body["email"].as_str() {
            Some(email) => self.email_validator.is_valid(email)?,
            None => false,
        };
        if !valid_email {
            return Ok(bad_request(SignupError::InvalidParam("email".into())));
        }

        // A truthy non-string cannot satisfy the creation contract.
        let (Some(name), Some(email), Some(password)) = (
            body["name"].as_str(),
            body["email"].as_str(),
            password.as_str(),
        ) else {
            let field = if body["name"].as_str().is_none() {
                "name"
            } else {
                "password"
            };
            return Ok(bad_request(SignupError::InvalidParam(field.into())));
        };

        // Confirmation deliberately excluded from the creation payload.
        let account = self.create_account.create(name, email, password).await?;

        Ok(ok(account))
    }
}
