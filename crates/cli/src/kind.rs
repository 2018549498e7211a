//! Dispatch from a `--kind` flag to the concrete model type.

use clap::ValueEnum;
use serde_json::Value;
use vice_bank_models::{
    Action, ActionDeposit, Decimal, Deposit, JsonModel, ModelError, Purchase, PurchasePrice,
    Reward, Task, TaskDeposit, ViceBankUser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModelKind {
    Action,
    Task,
    Reward,
    PurchasePrice,
    User,
    ActionDeposit,
    TaskDeposit,
    Deposit,
    Purchase,
}

/// The token movement a transaction record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenFlow {
    Earned(Decimal),
    Spent(Decimal),
}

impl ModelKind {
    pub(crate) fn name(self) -> &'static str {
        match self {
            ModelKind::Action => Action::KIND,
            ModelKind::Task => Task::KIND,
            ModelKind::Reward => Reward::KIND,
            ModelKind::PurchasePrice => PurchasePrice::KIND,
            ModelKind::User => ViceBankUser::KIND,
            ModelKind::ActionDeposit => ActionDeposit::KIND,
            ModelKind::TaskDeposit => TaskDeposit::KIND,
            ModelKind::Deposit => Deposit::KIND,
            ModelKind::Purchase => Purchase::KIND,
        }
    }

    /// Failing fields for `input` (empty when valid).
    pub(crate) fn json_test(self, input: &Value) -> Vec<String> {
        match self {
            ModelKind::Action => Action::json_test(input),
            ModelKind::Task => Task::json_test(input),
            ModelKind::Reward => Reward::json_test(input),
            ModelKind::PurchasePrice => PurchasePrice::json_test(input),
            ModelKind::User => ViceBankUser::json_test(input),
            ModelKind::ActionDeposit => ActionDeposit::json_test(input),
            ModelKind::TaskDeposit => TaskDeposit::json_test(input),
            ModelKind::Deposit => Deposit::json_test(input),
            ModelKind::Purchase => Purchase::json_test(input),
        }
    }

    /// The token movement of a transaction record, or `None` for entity kinds.
    pub(crate) fn token_flow(self, input: &Value) -> Result<Option<TokenFlow>, ModelError> {
        let flow = match self {
            ModelKind::ActionDeposit => {
                TokenFlow::Earned(ActionDeposit::from_json(input)?.tokens_earned())
            }
            ModelKind::TaskDeposit => TokenFlow::Earned(TaskDeposit::from_json(input)?.tokens_earned()),
            ModelKind::Deposit => TokenFlow::Earned(Deposit::from_json(input)?.tokens_earned()),
            ModelKind::Purchase => TokenFlow::Spent(Purchase::from_json(input)?.tokens_spent()),
            _ => return Ok(None),
        };
        Ok(Some(flow))
    }

    /// Validate `input` and re-issue it under `id`.
    pub(crate) fn reissue(self, id: &str, input: &Value) -> Result<Value, ModelError> {
        let out = match self {
            ModelKind::Action => Action::from_new_action(id, &Action::from_json(input)?).to_json(),
            ModelKind::Task => Task::from_new_task(id, &Task::from_json(input)?).to_json(),
            ModelKind::Reward => Reward::from_new_reward(id, &Reward::from_json(input)?).to_json(),
            ModelKind::PurchasePrice => {
                PurchasePrice::from_new_purchase_price(id, &PurchasePrice::from_json(input)?)
                    .to_json()
            }
            ModelKind::User => {
                ViceBankUser::from_new_vice_bank_user(id, &ViceBankUser::from_json(input)?)
                    .to_json()
            }
            ModelKind::ActionDeposit => {
                ActionDeposit::from_new_action_deposit(id, &ActionDeposit::from_json(input)?)
                    .to_json()
            }
            ModelKind::TaskDeposit => {
                TaskDeposit::from_new_task_deposit(id, &TaskDeposit::from_json(input)?).to_json()
            }
            ModelKind::Deposit => Deposit::from_new_deposit(id, &Deposit::from_json(input)?).to_json(),
            ModelKind::Purchase => {
                Purchase::from_new_purchase(id, &Purchase::from_json(input)?).to_json()
            }
        };
        Ok(out)
    }
}
