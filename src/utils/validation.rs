use crate::domain::model::DeliveryTime;
use crate::utils::error::{OrderDeskError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OrderDeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OrderDeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderDeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_delivery_time(field_name: &str, value: &str) -> Result<()> {
    DeliveryTime::parse(value)
        .map(|_| ())
        .map_err(|e| OrderDeskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: match e {
                OrderDeskError::ParseError { reason, .. } => reason,
                other => other.to_string(),
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("seed", "orders.csv").is_ok());
        assert!(validate_path("seed", "").is_err());
        assert!(validate_path("seed", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("order_id", "A").is_ok());
        assert!(validate_non_empty_string("order_id", "   ").is_err());
    }

    #[test]
    fn test_validate_delivery_time() {
        assert!(validate_delivery_time("delivery_time", "18:45").is_ok());

        let err = validate_delivery_time("delivery_time", "24:00").unwrap_err();
        match err {
            OrderDeskError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "delivery_time");
                assert_eq!(value, "24:00");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
