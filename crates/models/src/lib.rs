//! vice-bank-models: Validated value objects for the Vice Bank token economy.
//!
//! Users earn tokens by depositing quantified actions and recurring tasks,
//! and spend them purchasing rewards. Every record type in this crate is an
//! immutable value object with a JSON round-trip contract:
//!
//! - `from_json()` is the single validation gate for untrusted input
//!   (persisted documents, API payloads). It reports every failing field.
//! - `to_json()` produces exactly the validated shape, so
//!   `from_json(x.to_json())` reconstructs `x`.
//! - Derived getters (`conversion_rate`, `tokens_earned`, `tokens_spent`)
//!   are pure functions of validated state.
//!
//! Composite records (deposits, purchases) own a snapshot of the entity
//! they were made from, so editing an Action or Reward later never
//! rewrites transaction history.

pub mod datetime;
pub mod error;
pub mod frequency;
pub mod guard;
pub mod model;
pub mod numeric;

pub mod action;
pub mod action_deposit;
pub mod deposit;
pub mod purchase;
pub mod purchase_price;
pub mod reward;
pub mod task;
pub mod task_deposit;
pub mod vice_bank_user;

pub use error::ModelError;
pub use frequency::{frequency_from_string, is_frequency, Frequency};
pub use guard::{FieldGuard, Schema, ROOT};
pub use model::JsonModel;

pub use action::Action;
pub use action_deposit::ActionDeposit;
pub use deposit::Deposit;
pub use purchase::Purchase;
pub use purchase_price::PurchasePrice;
pub use reward::Reward;
pub use task::Task;
pub use task_deposit::TaskDeposit;
pub use vice_bank_user::ViceBankUser;

pub use rust_decimal::Decimal;
pub use time::OffsetDateTime;
