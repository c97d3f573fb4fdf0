use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderDeskError {
    #[error("Invalid time '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: String },

    #[error("Partner not found: {partner_id}")]
    PartnerNotFound { partner_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderDeskError {
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        OrderDeskError::ParseError {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrderDeskError::OrderNotFound { .. } | OrderDeskError::PartnerNotFound { .. } => {
                ErrorSeverity::Low
            }
            OrderDeskError::ParseError { .. } | OrderDeskError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            OrderDeskError::ConfigError { .. }
            | OrderDeskError::InvalidConfigValueError { .. }
            | OrderDeskError::SerializationError(_) => ErrorSeverity::High,
            OrderDeskError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderDeskError::ParseError { input, .. } => {
                format!("'{}' is not a valid HH:MM time", input)
            }
            OrderDeskError::OrderNotFound { order_id } => {
                format!("No order with id '{}'", order_id)
            }
            OrderDeskError::PartnerNotFound { partner_id } => {
                format!("No delivery partner with id '{}'", partner_id)
            }
            OrderDeskError::IoError(e) => format!("Could not access a file: {}", e),
            OrderDeskError::CsvError(e) => format!("Could not read the CSV input: {}", e),
            OrderDeskError::SerializationError(e) => {
                format!("Could not serialize a result: {}", e)
            }
            OrderDeskError::ConfigError { message } => format!("Bad configuration: {}", message),
            OrderDeskError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OrderDeskError::ParseError { .. } => {
                "Use a 24-hour wall-clock time such as 09:30 or 18:45"
            }
            OrderDeskError::OrderNotFound { .. } => "Add the order before assigning it",
            OrderDeskError::PartnerNotFound { .. } => {
                "Add the partner before assigning orders to it"
            }
            OrderDeskError::IoError(_) => "Check that the path exists and is readable",
            OrderDeskError::CsvError(_) => {
                "Expected a header of order_id,delivery_time and an optional partner_id column"
            }
            OrderDeskError::SerializationError(_) => "Re-run with --verbose and report the step",
            OrderDeskError::ConfigError { .. } | OrderDeskError::InvalidConfigValueError { .. } => {
                "Fix the scenario file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        let not_found = OrderDeskError::PartnerNotFound {
            partner_id: "P9".to_string(),
        };
        assert_eq!(not_found.severity(), ErrorSeverity::Low);
        assert_eq!(
            OrderDeskError::parse("25:00", "hours out of range").severity(),
            ErrorSeverity::Medium
        );
        let io = OrderDeskError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_messages_mention_input() {
        let err = OrderDeskError::parse("9h30", "missing ':' separator");
        assert!(err.to_string().contains("9h30"));
        assert!(err.user_friendly_message().contains("9h30"));
    }

    #[test]
    fn test_json_failure_maps_to_serialization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = OrderDeskError::from(json_err);

        assert!(matches!(err, OrderDeskError::SerializationError(_)));
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Could not serialize"));
    }
}
