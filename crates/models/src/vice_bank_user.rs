//! The account aggregate holding a user's token balance.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::guard::{is_number, is_string, Schema};
use crate::model::{required_decimal, required_str, JsonModel};
use crate::numeric::decimal_to_json;

static VICE_BANK_USER_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("name", is_string)
        .field("currentTokens", is_number)
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViceBankUser {
    id: String,
    /// The authenticated user that owns this account.
    user_id: String,
    name: String,
    current_tokens: Decimal,
}

impl ViceBankUser {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_tokens(&self) -> Decimal {
        self.current_tokens
    }

    /// A copy of this account with its balance set to `tokens`.
    pub fn with_current_tokens(&self, tokens: Decimal) -> ViceBankUser {
        ViceBankUser {
            current_tokens: tokens,
            ..self.clone()
        }
    }

    pub fn from_new_vice_bank_user(id: impl Into<String>, user: &ViceBankUser) -> ViceBankUser {
        ViceBankUser {
            id: id.into(),
            ..user.clone()
        }
    }
}

impl JsonModel for ViceBankUser {
    const KIND: &'static str = "ViceBankUser";

    fn schema() -> &'static Schema {
        &VICE_BANK_USER_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(ViceBankUser {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            name: required_str(input, "name")?,
            current_tokens: required_decimal(input, "currentTokens")?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "name": self.name,
            "currentTokens": decimal_to_json(self.current_tokens),
        })
    }
}
