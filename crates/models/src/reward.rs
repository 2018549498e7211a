//! A spendable item with a fixed token price.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::guard::{is_number, is_string, Schema};
use crate::model::{required_decimal, required_str, JsonModel};
use crate::numeric::decimal_to_json;
use crate::purchase_price::PurchasePrice;

pub(crate) static REWARD_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("name", is_string)
        .field("price", is_number)
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    id: String,
    user_id: String,
    name: String,
    /// Tokens required per unit.
    price: Decimal,
}

impl Reward {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn from_new_reward(id: impl Into<String>, reward: &Reward) -> Reward {
        Reward {
            id: id.into(),
            ..reward.clone()
        }
    }
}

impl From<PurchasePrice> for Reward {
    fn from(price: PurchasePrice) -> Self {
        Reward {
            id: price.id().to_string(),
            user_id: price.user_id().to_string(),
            name: price.name().to_string(),
            price: price.price(),
        }
    }
}

impl JsonModel for Reward {
    const KIND: &'static str = "Reward";

    fn schema() -> &'static Schema {
        &REWARD_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(Reward {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            name: required_str(input, "name")?,
            price: required_decimal(input, "price")?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "name": self.name,
            "price": decimal_to_json(self.price),
        })
    }
}
