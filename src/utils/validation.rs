use crate::utils::error::{QuoteError, Result};
use std::collections::HashSet;

/// Upper bound for any configured price, rate, weight or hour count.
pub const MAX_CONFIG_AMOUNT: f64 = 1_000_000_000.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }

    if value > MAX_CONFIG_AMOUNT {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value cannot exceed {}", MAX_CONFIG_AMOUNT),
        });
    }
    Ok(())
}

pub fn validate_at_least(field_name: &str, value: f64, min_value: f64) -> Result<()> {
    validate_non_negative(field_name, value)?;
    if value < min_value {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Like [`validate_range`] but both bounds are excluded.
pub fn validate_open_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(value > min && value < max) {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be strictly between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        validate_non_empty_string(field_name, id)?;
        if !seen.insert(id) {
            return Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}
