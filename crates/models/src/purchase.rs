//! A recorded redemption of a Reward.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use time::OffsetDateTime;
use tracing::trace;

use crate::datetime::{self, format_date_time};
use crate::error::ModelError;
use crate::guard::{is_date_time, is_number, is_string, nested, Schema};
use crate::model::{
    new_id, required_date, required_decimal, required_object, required_str, JsonModel,
};
use crate::numeric::{decimal_to_json, token_product};
use crate::reward::{Reward, REWARD_SCHEMA};

static PURCHASE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field("id", is_string)
        .field("userId", is_string)
        .field("date", is_date_time)
        .field("purchasedQuantity", is_number)
        .field("reward", nested(&REWARD_SCHEMA))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    id: String,
    user_id: String,
    date: OffsetDateTime,
    purchased_quantity: Decimal,
    /// Snapshot of the reward, including the price paid.
    reward: Reward,
}

impl Purchase {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn date(&self) -> OffsetDateTime {
        self.date
    }

    pub fn purchased_quantity(&self) -> Decimal {
        self.purchased_quantity
    }

    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    pub fn tokens_spent(&self) -> Decimal {
        token_product(self.reward.price(), self.purchased_quantity)
    }

    pub fn from_reward(
        reward: &Reward,
        purchased_quantity: Decimal,
        date: Option<OffsetDateTime>,
    ) -> Purchase {
        let purchase = Purchase {
            id: new_id(),
            user_id: reward.user_id().to_string(),
            date: date.map_or_else(datetime::now, datetime::truncate_to_millis),
            purchased_quantity,
            reward: reward.clone(),
        };
        trace!(id = %purchase.id, reward = %reward.id(), "created purchase");
        purchase
    }

    pub fn from_new_purchase(id: impl Into<String>, purchase: &Purchase) -> Purchase {
        Purchase {
            id: id.into(),
            ..purchase.clone()
        }
    }
}

impl JsonModel for Purchase {
    const KIND: &'static str = "Purchase";

    fn schema() -> &'static Schema {
        &PURCHASE_SCHEMA
    }

    fn from_valid_json(input: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(Purchase {
            id: required_str(input, "id")?,
            user_id: required_str(input, "userId")?,
            date: required_date(input, "date")?,
            purchased_quantity: required_decimal(input, "purchasedQuantity")?,
            reward: Reward::from_json(required_object(input, "reward")?)?,
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "date": format_date_time(self.date),
            "purchasedQuantity": decimal_to_json(self.purchased_quantity),
            "reward": self.reward.to_json(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn reward_json() -> Value {
        json!({
            "id": "rewardId",
            "userId": "userId",
            "name": "Dessert",
            "price": 2.5
        })
    }

    fn valid_input() -> Value {
        json!({
            "id": "id",
            "userId": "userId",
            "date": "2023-02-25T00:00:00.000-06:00",
            "purchasedQuantity": 2,
            "reward": reward_json()
        })
    }

    #[test]
    fn to_json_matches_input() {
        let purchase = Purchase::from_json(&valid_input()).unwrap();
        assert_eq!(purchase.to_json(), valid_input());
    }

    #[test]
    fn tokens_spent_is_price_times_quantity() {
        let purchase = Purchase::from_json(&valid_input()).unwrap();
        assert_eq!(purchase.tokens_spent(), Decimal::from(5));
    }

    #[test]
    fn from_reward_uses_the_given_date() {
        let reward = Reward::from_json(&reward_json()).unwrap();
        let date = datetime!(2024-06-01 12:00:00 UTC);
        let purchase = Purchase::from_reward(&reward, Decimal::ONE, Some(date));
        assert_eq!(purchase.date(), date);
        assert_eq!(purchase.user_id(), "userId");
        assert_eq!(purchase.tokens_spent(), Decimal::new(25, 1));
        assert_eq!(purchase.to_json()["date"], json!("2024-06-01T12:00:00.000Z"));
    }
}
