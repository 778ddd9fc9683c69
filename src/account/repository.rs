//! Handle database requests.

use sqlx::{Pool, Postgres};

use crate::error::Result;
use crate::signup::Account;

/// Account persistence over a PostgreSQL pool.
#[derive(Clone)]
pub struct AccountRepository {
    pool: Pool<Postgres>,
}

impl AccountRepository {
    /// Create a new [`AccountRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert [`Account`] into database.
    pub async fn insert(&self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO accounts (id, name, email, password)
                VALUES ($1, $2, $3, $4)"#,
        )
        .bind(&account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
