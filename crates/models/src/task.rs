//! A recurring earning rule: a flat token reward per occurrence.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::frequency::{frequency_from_string, Frequency};
use crate::guard::{is_frequency, is_number, is_string, Schema};
use crate::model::{required_decimal, required_str, JsonModel};
use crate::numeric::decimal_to_json;

pub(crate) static TASK_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("name", is_string)
        .field("frequency", is_frequency)
        .field("tokensEarnedPerInput", is_number)
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: String,
    user_id: String,
    name: String,
    frequency: Frequency,
    tokens_earned_per_input: Decimal,
}

impl Task {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn tokens_earned_per_input(&self) -> Decimal {
        self.tokens_earned_per_input
    }

    pub fn from_new_task(id: impl Into<String>, task: &Task) -> Task {
        Task {
            id: id.into(),
            ..task.clone()
        }
    }
}

impl JsonModel for Task {
    const KIND: &'static str = "Task";

    fn schema() -> &'static Schema {
        &TASK_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(Task {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            name: required_str(input, "name")?,
            frequency: frequency_from_string(&required_str(input, "frequency")?)?,
            tokens_earned_per_input: required_decimal(input, "tokensEarnedPerInput")?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "name": self.name,
            "frequency": self.frequency.as_str(),
            "tokensEarnedPerInput": decimal_to_json(self.tokens_earned_per_input),
        })
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
            "frequency": "weekly",
            "tokensEarnedPerInput": 1.5
        })
    }

    #[test]
    fn to_json_matches_input() {
        let task = Task::from_json(&valid_input()).unwrap();
        assert_eq!(task.to_json(), valid_input());
    }

    #[test]
    fn frequency_is_parsed_into_the_enum() {
        let task = Task::from_json(&valid_input()).unwrap();
        assert_eq!(task.frequency(), Frequency::Weekly);
        assert_eq!(task.tokens_earned_per_input(), Decimal::new(15, 1));
    }

    #[test]
    fn unknown_frequency_fails_the_shape_check() {
        let mut input = valid_input();
        input["frequency"] = json!("hourly");
        assert_eq!(Task::json_test(&input), vec!["frequency"]);
        assert_eq!(
            Task::from_json(&input),
            Err(ModelError::InvalidInput {
                fields: vec!["frequency".to_string()]
            })
        );
    }

    #[test]
    fn from_new_task_replaces_only_the_id() {
        let task = Task::from_json(&valid_input()).unwrap();
        let copy = Task::from_new_task("newId", &task);
        assert_eq!(copy.id(), "newId");
        assert_eq!(copy.name(), task.name());
        assert_eq!(copy.frequency(), task.frequency());
    }
}
