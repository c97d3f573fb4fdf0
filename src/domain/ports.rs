use crate::domain::model::{DeliveryTime, Order, Partner};
use crate::utils::error::Result;
use std::collections::HashSet;

/// Order/partner repository as seen by callers that only hold owned results.
///
/// Implemented by the plain [`OrderStore`](crate::core::store::OrderStore) and
/// by the lock-guarded [`SharedOrderStore`](crate::core::shared::SharedOrderStore).
pub trait OrderRepository {
    fn add_order(&mut self, order: Order);
    fn add_partner(&mut self, partner_id: &str);

    /// Returns whether the assignment was recorded. Unknown ids are a no-op.
    fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> bool;

    /// Like `assign_order_to_partner`, but unknown ids are reported as errors.
    fn try_assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()>;

    fn order_by_id(&self, order_id: &str) -> Option<Order>;
    fn partner_by_id(&self, partner_id: &str) -> Option<Partner>;
    fn count_orders_for_partner(&self, partner_id: &str) -> usize;
    fn order_ids_for_partner(&self, partner_id: &str) -> HashSet<String>;
    fn all_order_ids(&self) -> HashSet<String>;
    fn remove_partner(&mut self, partner_id: &str);
    fn remove_order(&mut self, order_id: &str);
    fn count_unassigned_orders(&self) -> usize;
    fn count_orders_after_time(&self, partner_id: &str, time: &str) -> Result<usize>;
    fn last_delivery_time_for_partner(&self, partner_id: &str) -> Option<DeliveryTime>;
}
