//! Earning and spending tokens across entities and transaction records.

use serde_json::json;
use vice_bank_models::{
    Action, ActionDeposit, Decimal, Deposit, JsonModel, Purchase, Reward, Task, TaskDeposit,
    ViceBankUser,
};

fn walking() -> Action {
    Action::from_json(&json!({
        "id": "walk",
        "userId": "user-1",
        "name": "Walking",
        "conversionUnit": "minutes",
        "inputQuantity": 1,
        "tokensEarnedPerInput": 2,
        "minDeposit": 1
    }))
    .unwrap()
}

#[test]
fn conversion_scenario_from_the_model_rules() {
    let action = walking();
    assert_eq!(action.conversion_rate(), Decimal::from(2));

    let deposit = ActionDeposit::from_action(&action, Decimal::ONE, None);
    assert_eq!(deposit.tokens_earned(), Decimal::from(2));

    let capped_action = action
        .copy_with(json!({"maxDeposit": 1}).as_object().unwrap())
        .unwrap();
    let capped = ActionDeposit::from_action(&capped_action, Decimal::from(5), None);
    assert_eq!(capped.tokens_earned(), Decimal::from(2));
}

#[test]
fn balance_follows_deposits_and_purchases() {
    let user = ViceBankUser::from_json(&json!({
        "id": "account-1",
        "userId": "user-1",
        "name": "Alex",
        "currentTokens": 0
    }))
    .unwrap();

    let chores = Task::from_json(&json!({
        "id": "chores",
        "userId": "user-1",
        "name": "Chores",
        "frequency": "weekly",
        "tokensEarnedPerInput": 5
    }))
    .unwrap();
    let dessert = Reward::from_json(&json!({
        "id": "dessert",
        "userId": "user-1",
        "name": "Dessert",
        "price": 1.5
    }))
    .unwrap();

    let walk = ActionDeposit::from_action(&walking(), Decimal::from(3), None);
    let chore = TaskDeposit::from_task(&chores, None);
    let treat = Purchase::from_reward(&dessert, Decimal::from(2), None);

    let earned = walk.tokens_earned() + chore.tokens_earned();
    let spent = treat.tokens_spent();
    assert_eq!(earned, Decimal::from(11));
    assert_eq!(spent, Decimal::from(3));

    let updated = user.with_current_tokens(user.current_tokens() + earned - spent);
    assert_eq!(updated.current_tokens(), Decimal::from(8));
    // The price carried one decimal place, so the balance does too.
    assert_eq!(updated.to_json()["currentTokens"], json!(8.0));
}

#[test]
fn ledger_records_survive_a_round_trip() {
    let deposit = ActionDeposit::from_action(&walking(), Decimal::new(25, 1), None);
    let restored = ActionDeposit::from_json(&deposit.to_json()).unwrap();
    assert_eq!(restored, deposit);
    assert_eq!(restored.tokens_earned(), Decimal::from(5));

    let flat = Deposit::from(&restored);
    let flat_restored = Deposit::from_json(&flat.to_json()).unwrap();
    assert_eq!(flat_restored.tokens_earned(), restored.tokens_earned());
}
