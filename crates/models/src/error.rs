/// All errors that can be returned while validating or constructing a model.
///
/// Every variant is caller-correctable: fix the input and validate again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The input failed the model's shape check. `fields` lists every
    /// failing field in schema order, or `["root"]` when the input was not
    /// a JSON object at all.
    #[error("Invalid JSON {}", .fields.join(", "))]
    InvalidInput { fields: Vec<String> },

    /// A date string could not be parsed as a timezone-aware ISO-8601 instant.
    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    /// A well-typed number whose magnitude exceeds what token arithmetic can hold.
    #[error("Number out of range for {field}: {value}")]
    NumberOutOfRange { field: String, value: String },

    /// A frequency string is outside the closed set `daily | weekly | monthly`.
    #[error("Invalid frequency: {value}")]
    InvalidFrequency { value: String },
}

impl ModelError {
    pub(crate) fn invalid_input<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModelError::InvalidInput {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The failing field names, when this is an `InvalidInput` error.
    pub fn fields(&self) -> &[String] {
        match self {
            ModelError::InvalidInput { fields } => fields,
            _ => &[],
        }
    }
}
