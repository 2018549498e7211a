//! Declarative per-field shape checking of untrusted JSON.
//!
//! A [`Schema`] maps field names to [`FieldGuard`]s. From one schema we get
//! both the whole-object guard ([`Schema::is_valid`]) and the diagnostic
//! producer ([`Schema::failing_fields`]), so the two can never disagree.
//!
//! Guards receive `Option<&Value>`: `None` means the property is absent.
//! Optional fields are modelled by a union with [`is_undefined`].

use serde_json::Value;

use crate::datetime;
use crate::frequency;

/// Diagnostic reported when the input is not a JSON object.
pub const ROOT: &str = "root";

/// A predicate over a single (possibly absent) JSON property.
pub trait FieldGuard: Send + Sync {
    fn check(&self, value: Option<&Value>) -> bool;
}

impl<F> FieldGuard for F
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    fn check(&self, value: Option<&Value>) -> bool {
        self(value)
    }
}

// ── Primitive guards ────────────────────────────────────────────────

pub fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

/// Any JSON number. Magnitude limits are enforced at construction.
pub fn is_number(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_)))
}

/// An absent property. An explicit `null` counts as absent.
pub fn is_undefined(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

pub fn is_frequency(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(frequency::is_frequency)
}

pub fn is_date_time(value: Option<&Value>) -> bool {
    value.is_some_and(datetime::is_valid_date_time_string)
}

// ── Combinators ─────────────────────────────────────────────────────

/// Accepts a value that either guard accepts.
pub struct Union<A, B>(pub A, pub B);

impl<A: FieldGuard, B: FieldGuard> FieldGuard for Union<A, B> {
    fn check(&self, value: Option<&Value>) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

pub fn union_guard<A: FieldGuard, B: FieldGuard>(a: A, b: B) -> Union<A, B> {
    Union(a, b)
}

/// The guard, or absent.
pub fn optional<G: FieldGuard>(guard: G) -> Union<G, fn(Option<&Value>) -> bool> {
    Union(guard, is_undefined as fn(Option<&Value>) -> bool)
}

/// Accepts a nested object that satisfies another schema.
pub struct Nested(&'static Schema);

impl FieldGuard for Nested {
    fn check(&self, value: Option<&Value>) -> bool {
        value.is_some_and(|v| self.0.is_valid(v))
    }
}

pub fn nested(schema: &'static Schema) -> Nested {
    Nested(schema)
}

// ── Schema ──────────────────────────────────────────────────────────

/// An ordered field-name → guard mapping describing one JSON shape.
#[derive(Default)]
pub struct Schema {
    fields: Vec<(&'static str, Box<dyn FieldGuard>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, guard: impl FieldGuard + 'static) -> Self {
        self.fields.push((name, Box::new(guard)));
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// True iff `input` is a JSON object and every field guard holds.
    ///
    /// Arrays and `null` are not objects.
    pub fn is_valid(&self, input: &Value) -> bool {
        let Some(obj) = input.as_object() else {
            return false;
        };
        self.fields
            .iter()
            .all(|(name, guard)| guard.check(obj.get(*name)))
    }

    /// Names of the fields whose guard fails, in declaration order.
    ///
    /// Returns `["root"]` when `input` is not a JSON object.
    pub fn failing_fields(&self, input: &Value) -> Vec<String> {
        let Some(obj) = input.as_object() else {
            return vec![ROOT.to_string()];
        };
        self.fields
            .iter()
            .filter(|(name, guard)| !guard.check(obj.get(*name)))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::LazyLock;

    static INNER: LazyLock<Schema> = LazyLock::new(|| Schema::new().field("label", is_string));

    fn sample_schema() -> Schema {
        Schema::new()
            .field("name", is_string)
            .field("count", is_number)
            .field("limit", optional(is_number))
            .field("inner", nested(&INNER))
    }

    #[test]
    fn valid_object_passes() {
        let schema = sample_schema();
        let input = json!({"name": "a", "count": 1, "limit": 2, "inner": {"label": "x"}});
        assert!(schema.is_valid(&input));
        assert!(schema.failing_fields(&input).is_empty());
    }

    #[test]
    fn optional_field_may_be_absent_or_null() {
        let schema = sample_schema();
        let absent = json!({"name": "a", "count": 1, "inner": {"label": "x"}});
        let null = json!({"name": "a", "count": 1, "limit": null, "inner": {"label": "x"}});
        assert!(schema.is_valid(&absent));
        assert!(schema.is_valid(&null));
    }

    #[test]
    fn optional_field_still_type_checked() {
        let schema = sample_schema();
        let input = json!({"name": "a", "count": 1, "limit": "2", "inner": {"label": "x"}});
        assert_eq!(schema.failing_fields(&input), vec!["limit"]);
    }

    #[test]
    fn failing_fields_reported_in_schema_order() {
        let schema = sample_schema();
        let input = json!({"inner": {"label": 3}, "count": "one"});
        assert_eq!(
            schema.failing_fields(&input),
            vec!["name", "count", "inner"]
        );
        assert!(!schema.is_valid(&input));
    }

    #[test]
    fn non_objects_report_root() {
        let schema = sample_schema();
        for input in [json!("s"), json!(1), json!(true), json!([]), json!(null)] {
            assert!(!schema.is_valid(&input));
            assert_eq!(schema.failing_fields(&input), vec![ROOT]);
        }
    }

    #[test]
    fn union_accepts_either_side() {
        let guard = union_guard(is_string, is_number);
        assert!(guard.check(Some(&json!("x"))));
        assert!(guard.check(Some(&json!(1))));
        assert!(!guard.check(Some(&json!(true))));
        assert!(!guard.check(None));
    }

    #[test]
    fn field_names_keep_declaration_order() {
        let names: Vec<_> = sample_schema().field_names().collect();
        assert_eq!(names, vec!["name", "count", "limit", "inner"]);
    }
}
