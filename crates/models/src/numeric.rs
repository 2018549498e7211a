//! Token arithmetic on `rust_decimal::Decimal`.
//!
//! Quantities, rates, prices and balances arrive as JSON numbers but are
//! held as `Decimal` so that token sums never accumulate binary float
//! error. A JSON integer round-trips to a JSON integer and a JSON float
//! round-trips to a JSON float: the decimal scale carries which one it was.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Number, Value};

/// Convert a JSON number into a `Decimal`.
///
/// Returns `None` for non-numbers and for magnitudes above `Decimal::MAX`.
/// Magnitudes below the smallest `Decimal` step are rounded to
/// `Decimal::MAX_SCALE` places.
pub fn decimal_from_json(value: &Value) -> Option<Decimal> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    // Floats print through ryu, which switches to exponent notation for
    // very large and very small magnitudes.
    let text = n.to_string();
    if let Ok(mut d) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        // Exponent forms such as `1e16` normalize to scale 0; keep them floats.
        if d.scale() == 0 {
            d.rescale(1);
        }
        return Some(d);
    }
    let f = n.as_f64()?;
    if f.abs() < 1.0 {
        let steps = (f * 1e28).round() as i64;
        return Some(Decimal::new(steps, Decimal::MAX_SCALE));
    }
    None
}

/// Convert a `Decimal` back into a JSON number.
///
/// Scale-0 values within the 64-bit integer range become JSON integers;
/// everything else becomes the JSON float nearest to the decimal text.
pub fn decimal_to_json(value: Decimal) -> Value {
    if value.scale() == 0 {
        if let Some(i) = value.to_i64() {
            return Value::from(i);
        }
        if let Some(u) = value.to_u64() {
            return Value::from(u);
        }
    }
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// The quantity that counts toward earning, after applying an optional cap.
pub fn capped_quantity(quantity: Decimal, cap: Option<Decimal>) -> Decimal {
    match cap {
        Some(max) if max < quantity => max,
        _ => quantity,
    }
}

/// Multiply two token amounts, saturating at the `Decimal` bounds.
pub fn token_product(left: Decimal, right: Decimal) -> Decimal {
    left.saturating_mul(right)
}
