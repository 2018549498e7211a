//! The flattened ledger form of an action deposit.
//!
//! Instead of embedding the whole Action, a Deposit freezes only the parts
//! that determine what was earned: the action's identity, unit, rate and
//! cap at the time of the deposit.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use time::OffsetDateTime;

use crate::action_deposit::ActionDeposit;
use crate::datetime::format_date_time;
use crate::error::ModelError;
use crate::guard::{is_date_time, is_number, is_string, optional, Schema};
use crate::model::{
    insert_optional_decimal, optional_decimal, required_date, required_decimal, required_str,
    JsonModel,
};
use crate::numeric::{capped_quantity, decimal_to_json, token_product};

static DEPOSIT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("date", is_date_time)
        .field("depositQuantity", is_number)
        .field("conversionRate", is_number)
        .field("actionName", is_string)
        .field("actionId", is_string)
        .field("conversionUnit", is_string)
        .field("maxDeposit", optional(is_number))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deposit {
    id: String,
    user_id: String,
    date: OffsetDateTime,
    deposit_quantity: Decimal,
    conversion_rate: Decimal,
    action_id: String,
    action_name: String,
    conversion_unit: String,
    max_deposit: Option<Decimal>,
}

impl Deposit {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn deposit_quantity(&self) -> Decimal {
        self.deposit_quantity
    }

    pub fn conversion_rate(&self) -> Decimal {
        self.conversion_rate
    }

    pub fn action_id(&self) -> &str {
        &self.action_id
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn conversion_unit(&self) -> &str {
        &self.conversion_unit
    }

    pub fn max_deposit(&self) -> Option<Decimal> {
        self.max_deposit
    }

    pub fn tokens_earned(&self) -> Decimal {
        let quantity = capped_quantity(self.deposit_quantity, self.max_deposit);
        token_product(quantity, self.conversion_rate)
    }

    pub fn from_new_deposit(id: impl Into<String>, deposit: &Deposit) -> Deposit {
        Deposit {
            id: id.into(),
            ..deposit.clone()
        }
    }
}

impl From<&ActionDeposit> for Deposit {
    fn from(deposit: &ActionDeposit) -> Self {
        let action = deposit.action();
        Deposit {
            id: deposit.id().to_string(),
            user_id: deposit.user_id().to_string(),
            date: deposit.date(),
            deposit_quantity: deposit.deposit_quantity(),
            conversion_rate: action.conversion_rate(),
            action_id: action.id().to_string(),
            action_name: action.name().to_string(),
            conversion_unit: action.conversion_unit().to_string(),
            max_deposit: action.max_deposit(),
        }
    }
}

impl JsonModel for Deposit {
    const KIND: &'static str = "Deposit";

    fn schema() -> &'static Schema {
        &DEPOSIT_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(Deposit {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            date: required_date(input, "date")?,
            deposit_quantity: required_decimal(input, "depositQuantity")?,
            conversion_rate: required_decimal(input, "conversionRate")?,
            action_id: required_str(input, "actionId")?,
            action_name: required_str(input, "actionName")?,
            conversion_unit: required_str(input, "conversionUnit")?,
            max_deposit: optional_decimal(input, "maxDeposit")?,
        })
    }

    fn to_json(&self) -> Value {
        let mut value = json!({
            "id": self.id,
            "userId": self.user_id,
            "date": format_date_time(self.date),
            "depositQuantity": decimal_to_json(self.deposit_quantity),
            "conversionRate": decimal_to_json(self.conversion_rate),
            "actionName": self.action_name,
            "actionId": self.action_id,
            "conversionUnit": self.conversion_unit,
        });
        insert_optional_decimal(&mut value, "maxDeposit", self.max_deposit);
        value
    }
}
