//! Validation rules for gatebook entries and master data

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Validate a transaction quantity (must be strictly positive)
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate a transaction rate (must be strictly positive)
pub fn validate_rate(rate: Decimal) -> Result<(), &'static str> {
    if rate <= Decimal::ZERO {
        return Err("Rate must be greater than zero");
    }
    Ok(())
}

/// Validate a manual stock override quantity (zero is allowed)
pub fn validate_stock_override(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Stock quantity cannot be negative");
    }
    Ok(())
}

/// Validate a transaction date (cannot lie in the future)
pub fn validate_entry_date(date: NaiveDate, today: NaiveDate) -> Result<(), &'static str> {
    if date > today {
        return Err("Transaction date cannot be in the future");
    }
    Ok(())
}

/// Validate a party or item name
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.len() > 200 {
        return Err("Name is too long");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}
