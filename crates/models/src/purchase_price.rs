//! Price list entries. The wire shape is the Reward shape, checked by the
//! same schema.

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::guard::Schema;
use crate::model::{required_decimal, required_str, JsonModel};
use crate::numeric::decimal_to_json;
use crate::reward::REWARD_SCHEMA;

/// The price list entry of a spendable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasePrice {
    id: String,
    user_id: String,
    name: String,
    price: Decimal,
}

impl PurchasePrice {
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

    pub fn from_new_purchase_price(id: impl Into<String>, price: &PurchasePrice) -> PurchasePrice {
        PurchasePrice {
            id: id.into(),
            ..price.clone()
        }
    }
}

impl JsonModel for PurchasePrice {
    const KIND: &'static str = "PurchasePrice";

    fn schema() -> &'static Schema {
        &REWARD_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(PurchasePrice {
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
