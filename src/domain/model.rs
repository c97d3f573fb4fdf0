use crate::utils::error::{OrderDeskError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock delivery time, stored as minutes since midnight (0..=1439).
///
/// Parsed from and formatted to `HH:MM`. Either part may be one or two digits
/// on input; output is always zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeliveryTime(u16);

impl DeliveryTime {
    pub fn parse(input: &str) -> Result<Self> {
        let (hours, minutes) = input
            .split_once(':')
            .ok_or_else(|| OrderDeskError::parse(input, "missing ':' separator"))?;

        let hours = parse_component(input, hours, "hours")?;
        let minutes = parse_component(input, minutes, "minutes")?;

        if hours > 23 {
            return Err(OrderDeskError::parse(input, "hours must be between 0 and 23"));
        }
        if minutes > 59 {
            return Err(OrderDeskError::parse(input, "minutes must be between 0 and 59"));
        }

        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

fn parse_component(input: &str, part: &str, name: &str) -> Result<u16> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrderDeskError::parse(
            input,
            format!("{} must be one or two digits", name),
        ));
    }
    part.parse::<u16>()
        .map_err(|e| OrderDeskError::parse(input, e.to_string()))
}

impl fmt::Display for DeliveryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for DeliveryTime {
    type Err = OrderDeskError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DeliveryTime {
    type Error = OrderDeskError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DeliveryTime> for String {
    fn from(time: DeliveryTime) -> Self {
        time.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    delivery_time: DeliveryTime,
}

impl Order {
    /// Builds an order from an `HH:MM` delivery time. Fails before anything
    /// reaches a store when the time is malformed.
    pub fn new(id: impl Into<String>, delivery_time: &str) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            delivery_time: DeliveryTime::parse(delivery_time)?,
        })
    }

    pub fn with_time(id: impl Into<String>, delivery_time: DeliveryTime) -> Self {
        Self {
            id: id.into(),
            delivery_time,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn delivery_time(&self) -> DeliveryTime {
        self.delivery_time
    }

    pub fn delivery_time_minutes(&self) -> u16 {
        self.delivery_time.minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    id: String,
    order_count: usize,
}

impl Partner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_count: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn order_count(&self) -> usize {
        self.order_count
    }

    pub(crate) fn increment_orders(&mut self) {
        self.order_count += 1;
    }

    pub(crate) fn decrement_orders(&mut self) {
        self.order_count = self.order_count.saturating_sub(1);
    }
}
