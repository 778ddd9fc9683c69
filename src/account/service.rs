//! Account manager.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::account::AccountRepository;
use crate::crypto::PasswordManager;
use crate::signup::{Account, CreateAccount, Fault};

/// [`CreateAccount`] collaborator persisting into PostgreSQL.
///
/// Generates the account identifier and stores the Argon2id hash of the
/// password, never the cleartext.
#[derive(Clone)]
pub struct AccountService {
    repo: AccountRepository,
    pwd: Arc<PasswordManager>,
}

impl AccountService {
    /// Create a new [`AccountService`].
    pub fn new(pool: Pool<Postgres>, pwd: Arc<PasswordManager>) -> Self {
        Self {
            repo: AccountRepository::new(pool),
            pwd,
        }
    }
}

#[async_trait]
impl CreateAccount for AccountService {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, Fault> {
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.pwd.hash_password(password)?,
        };

        self.repo.insert(&account).await?;

        tracing::info!(account_id = %account.id, "account created");

        Ok(account)
    }
}
