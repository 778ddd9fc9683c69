//! Recording test doubles for the sign-up collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::signup::{Account, CreateAccount, EmailValidator, Fault, RequestBody};

/// A complete, valid request body.
pub fn body() -> RequestBody {
    json!({
        "name": "any_name",
        "email": "any_email@hotmail.com",
        "password": "any_password",
        "passwordConfirmation": "any_password",
    })
    .as_object()
    .cloned()
    .unwrap()
}

/// [`EmailValidator`] double recording every submitted address.
pub struct EmailValidatorStub {
    verdict: Result<bool, ()>,
    calls: Mutex<Vec<String>>,
}

impl EmailValidatorStub {
    pub fn valid() -> Self {
        Self {
            verdict: Ok(true),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn invalid() -> Self {
        Self {
            verdict: Ok(false),
            ..Self::valid()
        }
    }

    pub fn faulty() -> Self {
        Self {
            verdict: Err(()),
            ..Self::valid()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> Result<bool, Fault> {
        self.calls.lock().unwrap().push(email.to_owned());
        self.verdict.map_err(|_| "email validator exploded".into())
    }
}

/// [`CreateAccount`] double returning a fixed account.
#[derive(Default)]
pub struct CreateAccountStub {
    faulty: bool,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl CreateAccountStub {
    pub fn faulty() -> Self {
        Self {
            faulty: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateAccount for CreateAccountStub {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, Fault> {
        self.calls.lock().unwrap().push((
            name.to_owned(),
            email.to_owned(),
            password.to_owned(),
        ));
        if self.faulty {
            return Err("account creation exploded".into());
        }

        Ok(Account {
            id: "valid_id".into(),
            name: "any_name".into(),
            email: "any@hotmail.com".into(),
            password: "any_password".into(),
        })
    }
}
