//! Sign-up request handling core.

mod handler;
mod response;
#[cfg(test)]
pub mod testing;

pub use handler::*;
pub use response::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Required body fields, checked in this exact order.
pub const REQUIRED_FIELDS: [&str; 4] =
    ["name", "email", "password", "passwordConfirmation"];

/// Parsed sign-up request body, before any validation.
///
/// Kept as a raw JSON object so absent and empty fields can be told apart
/// from well-typed ones only where the pipeline decides to.
pub type RequestBody = serde_json::Map<String, serde_json::Value>;

/// Opaque failure raised by a collaborator.
pub type Fault = Box<dyn std::error::Error + Send + Sync>;

/// Account as returned by the creation collaborator.
#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Syntactic email validation capability.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a well-formed address.
    fn is_valid(&self, email: &str) -> Result<bool, Fault>;
}

/// Account creation capability.
#[async_trait]
pub trait CreateAccount: Send + Sync {
    /// Create and persist an account, returning it with a generated id.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, Fault>;
}

/// Whether a JSON value counts as missing for the presence check.
///
/// Mirrors loose falsiness: `null`, `false`, numeric zero and the empty
/// string all behave as an absent field.
pub(crate) fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));

        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("any_name")));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }
}
