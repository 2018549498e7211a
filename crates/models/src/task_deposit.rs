//! A recorded occurrence of a Task.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use time::OffsetDateTime;
use tracing::trace;

use crate::datetime::{self, format_date_time};
use crate::error::ModelError;
use crate::guard::{is_date_time, is_string, nested, Schema};
use crate::model::{new_id, required_date, required_object, required_str, JsonModel};
use crate::task::{Task, TASK_SCHEMA};

static TASK_DEPOSIT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("date", is_date_time)
        .field("task", nested(&TASK_SCHEMA))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDeposit {
    id: String,
    user_id: String,
    date: OffsetDateTime,
    task: Task,
}

impl TaskDeposit {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Tasks pay a flat amount per occurrence.
    pub fn tokens_earned(&self) -> Decimal {
        self.task.tokens_earned_per_input()
    }

    pub fn from_task(task: &Task, date: Option<OffsetDateTime>) -> TaskDeposit {
        let deposit = TaskDeposit {
            id: new_id(),
            user_id: task.user_id().to_string(),
            date: date.map_or_else(datetime::now, datetime::truncate_to_millis),
            task: task.clone(),
        };
        trace!(id = %deposit.id, task = %task.id(), "created task deposit");
        deposit
    }

    pub fn from_new_task_deposit(id: impl Into<String>, deposit: &TaskDeposit) -> TaskDeposit {
        TaskDeposit {
            id: id.into(),
            ..deposit.clone()
        }
    }
}

impl JsonModel for TaskDeposit {
    const KIND: &'static str = "TaskDeposit";

    fn schema() -> &'static Schema {
        &TASK_DEPOSIT_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(TaskDeposit {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            date: required_date(input, "date")?,
            task: Task::from_json(required_object(input, "task")?)?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "date": format_date_time(self.date),
            "task": self.task.to_json(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;

    fn task_json() -> Value {
        json!({
            "id": "taskId",
            "userId": "userId",
            "name": "Meal prep",
            "frequency": "daily",
            "tokensEarnedPerInput": 3
        })
    }

    fn valid_input() -> Value {
        json!({
            "id": "id",
            "userId": "userId",
            "date": "2024-03-19T00:00:00.000-05:00",
            "task": task_json()
        })
    }

    #[test]
    fn to_json_matches_input() {
        let deposit = TaskDeposit::from_json(&valid_input()).unwrap();
        assert_eq!(deposit.to_json(), valid_input());
        assert_eq!(deposit.task().frequency(), Frequency::Daily);
    }

    #[test]
    fn tokens_earned_is_the_flat_task_reward() {
        let deposit = TaskDeposit::from_json(&valid_input()).unwrap();
        assert_eq!(deposit.tokens_earned(), Decimal::from(3));
    }

    #[test]
    fn from_task_inherits_the_owner() {
        let task = Task::from_json(&task_json()).unwrap();
        let deposit = TaskDeposit::from_task(&task, None);
        assert_eq!(deposit.user_id(), "userId");
        assert_eq!(deposit.task(), &task);
        assert!(deposit.date().offset().is_utc());
    }

    #[test]
    fn copy_with_can_swap_the_task_snapshot() {
        let deposit = TaskDeposit::from_json(&valid_input()).unwrap();
        let mut task = task_json();
        task["tokensEarnedPerInput"] = json!(7);
        let overrides = json!({ "task": task });
        let updated = deposit.copy_with(overrides.as_object().unwrap()).unwrap();
        assert_eq!(updated.tokens_earned(), Decimal::from(7));
        assert_eq!(deposit.tokens_earned(), Decimal::from(3));
    }
}
