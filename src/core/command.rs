use crate::domain::model::{Order, Partner};
use crate::utils::error::Result;
use crate::utils::validation::{validate_delivery_time, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// One request against the order store, as read from a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddOrder { id: String, delivery_time: String },
    AddPartner { partner_id: String },
    AssignOrder { order_id: String, partner_id: String },
    GetOrder { order_id: String },
    GetPartner { partner_id: String },
    CountOrdersForPartner { partner_id: String },
    ListOrdersForPartner { partner_id: String },
    ListAllOrders,
    RemovePartner { partner_id: String },
    RemoveOrder { order_id: String },
    CountUnassignedOrders,
    CountOrdersAfterTime { partner_id: String, time: String },
    LastDeliveryTime { partner_id: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddOrder { .. } => "add_order",
            Command::AddPartner { .. } => "add_partner",
            Command::AssignOrder { .. } => "assign_order",
            Command::GetOrder { .. } => "get_order",
            Command::GetPartner { .. } => "get_partner",
            Command::CountOrdersForPartner { .. } => "count_orders_for_partner",
            Command::ListOrdersForPartner { .. } => "list_orders_for_partner",
            Command::ListAllOrders => "list_all_orders",
            Command::RemovePartner { .. } => "remove_partner",
            Command::RemoveOrder { .. } => "remove_order",
            Command::CountUnassignedOrders => "count_unassigned_orders",
            Command::CountOrdersAfterTime { .. } => "count_orders_after_time",
            Command::LastDeliveryTime { .. } => "last_delivery_time",
        }
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::AddOrder { id, delivery_time } => {
                validate_non_empty_string("id", id)?;
                validate_delivery_time("delivery_time", delivery_time)
            }
            Command::AssignOrder {
                order_id,
                partner_id,
            } => {
                validate_non_empty_string("order_id", order_id)?;
                validate_non_empty_string("partner_id", partner_id)
            }
            Command::CountOrdersAfterTime { partner_id, time } => {
                validate_non_empty_string("partner_id", partner_id)?;
                validate_delivery_time("time", time)
            }
            Command::AddPartner { partner_id } => {
                validate_non_empty_string("partner_id", partner_id)
            }
            _ => Ok(()),
        }
    }
}

/// Result of a [`Command`], serialized as one JSON object per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Response {
    Ack,
    Assigned { assigned: bool },
    Order { order: Option<Order> },
    Partner { partner: Option<Partner> },
    Count { count: usize },
    OrderIds { order_ids: Vec<String> },
    Time { time: Option<String> },
}

impl Response {
    /// Renders the response as one JSON document for stdout.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tagging() {
        let cmd: Command =
            serde_json::from_str(r#"{"op":"assign_order","order_id":"A","partner_id":"P1"}"#)
                .unwrap();
        assert_eq!(
            cmd,
            Command::AssignOrder {
                order_id: "A".to_string(),
                partner_id: "P1".to_string()
            }
        );
        assert_eq!(cmd.name(), "assign_order");

        let unit: Command = serde_json::from_str(r#"{"op":"list_all_orders"}"#).unwrap();
        assert_eq!(unit, Command::ListAllOrders);
    }

    #[test]
    fn test_validate_rejects_bad_time_and_blank_ids() {
        let bad_time = Command::AddOrder {
            id: "A".to_string(),
            delivery_time: "7pm".to_string(),
        };
        assert!(bad_time.validate().is_err());

        let blank = Command::AddPartner {
            partner_id: " ".to_string(),
        };
        assert!(blank.validate().is_err());

        assert!(Command::CountUnassignedOrders.validate().is_ok());
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(Response::Time {
            time: Some("19:00".to_string()),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"result": "time", "time": "19:00"}));

        let ack = serde_json::to_value(Response::Ack).unwrap();
        assert_eq!(ack, serde_json::json!({"result": "ack"}));
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let response = Response::Count { count: 3 };
        assert_eq!(
            response.to_json(false).unwrap(),
            r#"{"result":"count","count":3}"#
        );

        let pretty = response.to_json(true).unwrap();
        assert!(pretty.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed["count"], 3);
    }
}
