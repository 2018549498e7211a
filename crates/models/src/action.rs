//! A user-defined conversion rule from a measured activity to tokens.
//!
//! An Action says "every `input_quantity` units of `conversion_unit` earn
//! `tokens_earned_per_input` tokens". For instance 15 minutes of walking
//! could earn 0.25 tokens, or one hour could earn one token.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::guard::{is_number, is_string, optional, Schema};
use crate::model::{
    insert_optional_decimal, optional_decimal, required_decimal, required_str, JsonModel,
};
use crate::numeric::{decimal_to_json, token_product};

pub(crate) static ACTION_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("name", is_string)
        .field("conversionUnit", is_string)
        .field("inputQuantity", is_number)
        .field("tokensEarnedPerInput", is_number)
        .field("minDeposit", is_number)
        .field("maxDeposit", optional(is_number))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    id: String,
    user_id: String,
    name: String,
    /// Unit label, e.g. "minutes" or "each".
    conversion_unit: String,
    /// How much must be deposited for one earn cycle.
    input_quantity: Decimal,
    /// Tokens earned per earn cycle.
    tokens_earned_per_input: Decimal,
    min_deposit: Decimal,
    /// Caps the quantity that counts toward earning.
    max_deposit: Option<Decimal>,
}

impl Action {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conversion_unit(&self) -> &str {
        &self.conversion_unit
    }

    pub fn input_quantity(&self) -> Decimal {
        self.input_quantity
    }

    pub fn tokens_earned_per_input(&self) -> Decimal {
        self.tokens_earned_per_input
    }

    pub fn min_deposit(&self) -> Decimal {
        self.min_deposit
    }

    pub fn max_deposit(&self) -> Option<Decimal> {
        self.max_deposit
    }

    /// Multiply a deposited quantity by this rate to get tokens.
    pub fn conversion_rate(&self) -> Decimal {
        token_product(self.input_quantity, self.tokens_earned_per_input)
    }

    /// A copy of `action` under a new identifier.
    pub fn from_new_action(id: impl Into<String>, action: &Action) -> Action {
        Action {
            id: id.into(),
            ..action.clone()
        }
    }
}

impl JsonModel for Action {
    const KIND: &'static str = "Action";

    fn schema() -> &'static Schema {
        &ACTION_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(Action {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            name: required_str(input, "name")?,
            conversion_unit: required_str(input, "conversionUnit")?,
            input_quantity: required_decimal(input, "inputQuantity")?,
            tokens_earned_per_input: required_decimal(input, "tokensEarnedPerInput")?,
            min_deposit: required_decimal(input, "minDeposit")?,
            max_deposit: optional_decimal(input, "maxDeposit")?,
        })
    }

    fn to_json(&self) -> Value {
        let mut value = json!({
            "id": self.id,
            "userId": self.user_id,
            "name": self.name,
            "conversionUnit": self.conversion_unit,
            "inputQuantity": decimal_to_json(self.input_quantity),
            "tokensEarnedPerInput": decimal_to_json(self.tokens_earned_per_input),
            "minDeposit": decimal_to_json(self.min_deposit),
        });
        insert_optional_decimal(&mut value, "maxDeposit", self.max_deposit);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> Value {
        json!({
            "id": "id",
            "userId": "userId",
            "name": "name",
            "conversionUnit": "minutes",
            "inputQuantity": 1,
            "tokensEarnedPerInput": 2,
            "minDeposit": 3,
            "maxDeposit": 4
        })
    }

    #[test]
    fn to_json_matches_input() {
        let action = Action::from_json(&valid_input()).unwrap();
        assert_eq!(action.to_json(), valid_input());
    }

    #[test]
    fn getters_expose_fields() {
        let action = Action::from_json(&valid_input()).unwrap();
        assert_eq!(action.id(), "id");
        assert_eq!(action.user_id(), "userId");
        assert_eq!(action.name(), "name");
        assert_eq!(action.conversion_unit(), "minutes");
        assert_eq!(action.input_quantity(), Decimal::from(1));
        assert_eq!(action.tokens_earned_per_input(), Decimal::from(2));
        assert_eq!(action.min_deposit(), Decimal::from(3));
        assert_eq!(action.max_deposit(), Some(Decimal::from(4)));
    }

    #[test]
    fn conversion_rate_multiplies_quantity_by_tokens() {
        let action = Action::from_json(&valid_input()).unwrap();
        assert_eq!(action.conversion_rate(), Decimal::from(2));

        let mut input = valid_input();
        input["inputQuantity"] = json!(15);
        input["tokensEarnedPerInput"] = json!(0.25);
        let action = Action::from_json(&input).unwrap();
        assert_eq!(action.conversion_rate(), Decimal::new(375, 2));
    }

    #[test]
    fn missing_max_deposit_is_omitted_from_json() {
        let mut input = valid_input();
        input.as_object_mut().unwrap().remove("maxDeposit");
        let action = Action::from_json(&input).unwrap();
        assert_eq!(action.max_deposit(), None);
        assert!(action.to_json().get("maxDeposit").is_none());
    }

    #[test]
    fn null_max_deposit_is_treated_as_absent() {
        let mut input = valid_input();
        input["maxDeposit"] = Value::Null;
        let action = Action::from_json(&input).unwrap();
        assert_eq!(action.max_deposit(), None);
    }

    #[test]
    fn wrong_types_are_all_reported() {
        let mut input = valid_input();
        input["name"] = json!(5);
        input["minDeposit"] = json!("3");
        let err = Action::from_json(&input).unwrap_err();
        assert_eq!(err.to_string(), "Invalid JSON name, minDeposit");
    }

    #[test]
    fn from_new_action_replaces_only_the_id() {
        let action = Action::from_json(&valid_input()).unwrap();
        let copy = Action::from_new_action("newId", &action);
        let mut expected = valid_input();
        expected["id"] = json!("newId");
        assert_eq!(copy.to_json(), expected);
        assert_eq!(action.id(), "id");
    }
}
