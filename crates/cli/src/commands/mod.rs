pub(crate) mod reid;
pub(crate) mod tokens;
pub(crate) mod validate;
