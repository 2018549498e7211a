//! A recorded instance of performing an Action.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use time::OffsetDateTime;
use tracing::trace;

use crate::action::{Action, ACTION_SCHEMA};
use crate::datetime::{self, format_date_time};
use crate::error::ModelError;
use crate::guard::{is_date_time, is_number, is_string, nested, Schema};
use crate::model::{
    new_id, required_date, required_decimal, required_object, required_str, JsonModel,
};
use crate::numeric::{capped_quantity, decimal_to_json, token_product};

static ACTION_DEPOSIT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("date", is_date_time)
        .field("depositQuantity", is_number)
        .field("action", nested(&ACTION_SCHEMA))
});

/// The action is a snapshot taken when the deposit was made; later edits
/// to the Action do not change what this deposit earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDeposit {
    id: String,
    user_id: String,
    date: OffsetDateTime,
    deposit_quantity: Decimal,
    action: Action,
}

impl ActionDeposit {
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

    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Deposited quantity, capped at the action's `max_deposit`, times its rate.
    pub fn tokens_earned(&self) -> Decimal {
        let quantity = capped_quantity(self.deposit_quantity, self.action.max_deposit());
        token_product(quantity, self.action.conversion_rate())
    }

    /// Record a new deposit against `action`, owned by the action's user.
    ///
    /// `date` defaults to now (UTC).
    pub fn from_action(
        action: &Action,
        deposit_quantity: Decimal,
        date: Option<OffsetDateTime>,
    ) -> ActionDeposit {
        let deposit = ActionDeposit {
            id: new_id(),
            user_id: action.user_id().to_string(),
            date: date.map_or_else(datetime::now, datetime::truncate_to_millis),
            deposit_quantity,
            action: action.clone(),
        };
        trace!(id = %deposit.id, action = %action.id(), "created action deposit");
        deposit
    }

    pub fn from_new_action_deposit(id: impl Into<String>, deposit: &ActionDeposit) -> ActionDeposit {
        ActionDeposit {
            id: id.into(),
            ..deposit.clone()
        }
    }
}

impl JsonModel for ActionDeposit {
    const KIND: &'static str = "ActionDeposit";

    fn schema() -> &'static Schema {
        &ACTION_DEPOSIT_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(ActionDeposit {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            date: required_date(input, "date")?,
            deposit_quantity: required_decimal(input, "depositQuantity")?,
            action: Action::from_json(required_object(input, "action")?)?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "date": format_date_time(self.date),
            "depositQuantity": decimal_to_json(self.deposit_quantity),
            "action": self.action.to_json(),
        })
    }
}
