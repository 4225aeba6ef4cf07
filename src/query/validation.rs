use super::types::PairParams;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 50;

/// Client-side mistakes in a lookup request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query parameter `{0}` is required")]
    Missing(&'static str),
    #[error(
        "query parameter `{name}` must be between {min} and {max} characters, got {len}",
        min = MIN_NAME_CHARS,
        max = MAX_NAME_CHARS
    )]
    Length { name: &'static str, len: usize },
    #[error("query parameter `{0}` must not be blank")]
    Blank(&'static str),
    #[error("malformed query string: {0}")]
    Malformed(String),
}

/// Checks one drug name parameter. Length is measured on the raw value, before trimming.
pub fn validate_drug_name<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, QueryError> {
    let value = value.ok_or(QueryError::Missing(name))?;

    let len = value.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) {
        return Err(QueryError::Length { name, len });
    }
    if value.trim().is_empty() {
        return Err(QueryError::Blank(name));
    }

    Ok(value)
}

/// Validates both names of a pair query, reporting the first problem found.
pub fn validate_pair(params: &PairParams) -> Result<(&str, &str), QueryError> {
    let drug1 = validate_drug_name("drug1", params.drug1.as_deref())?;
    let drug2 = validate_drug_name("drug2", params.drug2.as_deref())?;
    Ok((drug1, drug2))
}
