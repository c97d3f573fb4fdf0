use crate::core::command::{Command, Response};
use crate::domain::model::Order;
use crate::domain::ports::OrderRepository;
use crate::utils::error::Result;

/// Maps [`Command`]s onto an [`OrderRepository`] and logs what happened.
pub struct OrderService<R: OrderRepository> {
    repository: R,
    strict_assignment: bool,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            strict_assignment: false,
        }
    }

    /// With strict assignment, unknown ids fail instead of being ignored.
    pub fn with_strict_assignment(mut self, strict: bool) -> Self {
        self.strict_assignment = strict;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::debug!(op = command.name(), "Executing command");

        let response = match command {
            Command::AddOrder { id, delivery_time } => {
                let order = Order::new(id, &delivery_time)?;
                tracing::info!(
                    order_id = order.id(),
                    delivery_time = %order.delivery_time(),
                    "Order added"
                );
                self.repository.add_order(order);
                Response::Ack
            }
            Command::AddPartner { partner_id } => {
                self.repository.add_partner(&partner_id);
                tracing::info!(partner_id = %partner_id, "Partner added");
                Response::Ack
            }
            Command::AssignOrder {
                order_id,
                partner_id,
            } => {
                let assigned = if self.strict_assignment {
                    self.repository
                        .try_assign_order_to_partner(&order_id, &partner_id)?;
                    true
                } else {
                    self.repository
                        .assign_order_to_partner(&order_id, &partner_id)
                };
                if assigned {
                    tracing::info!(
                        order_id = %order_id,
                        partner_id = %partner_id,
                        "Order assigned"
                    );
                } else {
                    tracing::warn!(
                        order_id = %order_id,
                        partner_id = %partner_id,
                        "Assignment ignored: order or partner does not exist"
                    );
                }
                Response::Assigned { assigned }
            }
            Command::GetOrder { order_id } => Response::Order {
                order: self.repository.order_by_id(&order_id),
            },
            Command::GetPartner { partner_id } => Response::Partner {
                partner: self.repository.partner_by_id(&partner_id),
            },
            Command::CountOrdersForPartner { partner_id } => Response::Count {
                count: self.repository.count_orders_for_partner(&partner_id),
            },
            Command::ListOrdersForPartner { partner_id } => {
                Response::OrderIds {
                    order_ids: sorted(self.repository.order_ids_for_partner(&partner_id)),
                }
            }
            Command::ListAllOrders => Response::OrderIds {
                order_ids: sorted(self.repository.all_order_ids()),
            },
            Command::RemovePartner { partner_id } => {
                self.repository.remove_partner(&partner_id);
                tracing::info!(partner_id = %partner_id, "Partner removed");
                Response::Ack
            }
            Command::RemoveOrder { order_id } => {
                self.repository.remove_order(&order_id);
                tracing::info!(order_id = %order_id, "Order removed");
                Response::Ack
            }
            Command::CountUnassignedOrders => Response::Count {
                count: self.repository.count_unassigned_orders(),
            },
            Command::CountOrdersAfterTime { partner_id, time } => Response::Count {
                count: self.repository.count_orders_after_time(&partner_id, &time)?,
            },
            Command::LastDeliveryTime { partner_id } => Response::Time {
                time: self
                    .repository
                    .last_delivery_time_for_partner(&partner_id)
                    .map(|t| t.to_string()),
            },
        };

        Ok(response)
    }
}

// Set order is unspecified; sort so output is stable between runs.
fn sorted(ids: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::OrderStore;
    use crate::utils::error::OrderDeskError;

    fn add_order(id: &str, time: &str) -> Command {
        Command::AddOrder {
            id: id.to_string(),
            delivery_time: time.to_string(),
        }
    }

    fn assign(order_id: &str, partner_id: &str) -> Command {
        Command::AssignOrder {
            order_id: order_id.to_string(),
            partner_id: partner_id.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_commands() {
        let mut service = OrderService::new(OrderStore::new());
        service.execute(add_order("A", "09:00")).unwrap();
        service.execute(add_order("B", "19:00")).unwrap();
        service
            .execute(Command::AddPartner {
                partner_id: "P1".to_string(),
            })
            .unwrap();
        service.execute(assign("A", "P1")).unwrap();
        service.execute(assign("B", "P1")).unwrap();

        let count = service
            .execute(Command::CountOrdersForPartner {
                partner_id: "P1".to_string(),
            })
            .unwrap();
        assert_eq!(count, Response::Count { count: 2 });

        let last = service
            .execute(Command::LastDeliveryTime {
                partner_id: "P1".to_string(),
            })
            .unwrap();
        assert_eq!(
            last,
            Response::Time {
                time: Some("19:00".to_string())
            }
        );

        let after = service
            .execute(Command::CountOrdersAfterTime {
                partner_id: "P1".to_string(),
                time: "12:00".to_string(),
            })
            .unwrap();
        assert_eq!(after, Response::Count { count: 1 });

        let listed = service
            .execute(Command::ListOrdersForPartner {
                partner_id: "P1".to_string(),
            })
            .unwrap();
        assert_eq!(
            listed,
            Response::OrderIds {
                order_ids: vec!["A".to_string(), "B".to_string()]
            }
        );
    }

    #[test]
    fn test_permissive_assignment_reports_noop() {
        let mut service = OrderService::new(OrderStore::new());
        service.execute(add_order("A", "09:00")).unwrap();

        let response = service.execute(assign("A", "ghost")).unwrap();
        assert_eq!(response, Response::Assigned { assigned: false });
        assert_eq!(service.repository().count_orders_for_partner("ghost"), 0);
    }

    #[test]
    fn test_strict_assignment_fails_on_unknown_partner() {
        let mut service = OrderService::new(OrderStore::new()).with_strict_assignment(true);
        service.execute(add_order("A", "09:00")).unwrap();

        let err = service.execute(assign("A", "ghost")).unwrap_err();
        assert!(matches!(err, OrderDeskError::PartnerNotFound { .. }));
    }

    #[test]
    fn test_bad_time_is_parse_error() {
        let mut service = OrderService::new(OrderStore::new());

        let err = service.execute(add_order("A", "noon")).unwrap_err();
        assert!(matches!(err, OrderDeskError::ParseError { .. }));
        assert_eq!(service.repository().order_count(), 0);

        let err = service
            .execute(Command::CountOrdersAfterTime {
                partner_id: "P1".to_string(),
                time: "12.00".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, OrderDeskError::ParseError { .. }));
    }

    #[test]
    fn test_missing_lookups_return_empty_results() {
        let mut service = OrderService::new(OrderStore::new());

        assert_eq!(
            service
                .execute(Command::GetOrder {
                    order_id: "nope".to_string()
                })
                .unwrap(),
            Response::Order { order: None }
        );
        assert_eq!(
            service
                .execute(Command::LastDeliveryTime {
                    partner_id: "nope".to_string()
                })
                .unwrap(),
            Response::Time { time: None }
        );
        assert_eq!(
            service.execute(Command::ListAllOrders).unwrap(),
            Response::OrderIds { order_ids: vec![] }
        );
    }
}
