use crate::domain::model::{DeliveryTime, Order, Partner};
use crate::domain::ports::OrderRepository;
use crate::utils::error::{OrderDeskError, Result};
use std::collections::{HashMap, HashSet};

/// In-memory owner of every order, partner and assignment.
///
/// Four indexes are kept: the order table, the partner table, partner → order
/// set and order → partner. Every live order has an `order_partner` entry;
/// `None` marks it unassigned. All assignment changes go through
/// [`assign`](Self::assign_order_to_partner) / `unassign` so the two relation
/// views and each partner's `order_count` never drift apart.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<String, Order>,
    partners: HashMap<String, Partner>,
    partner_orders: HashMap<String, HashSet<String>>,
    order_partner: HashMap<String, Option<String>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an order. Overwriting keeps its current partner.
    pub fn add_order(&mut self, order: Order) {
        let id = order.id().to_string();
        self.order_partner.entry(id.clone()).or_insert(None);
        if self.orders.insert(id, order).is_some() {
            tracing::debug!("Replaced existing order");
        }
    }

    pub fn add_partner(&mut self, partner_id: &str) {
        self.partners
            .entry(partner_id.to_string())
            .or_insert_with(|| Partner::new(partner_id));
    }

    /// Records `order_id` as delivered by `partner_id`.
    ///
    /// Returns `false` without touching any state when either id is unknown.
    /// An order already held by another partner moves to the new one.
    pub fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> bool {
        if !self.orders.contains_key(order_id) || !self.partners.contains_key(partner_id) {
            tracing::debug!(order_id, partner_id, "Ignoring assignment with unknown id");
            return false;
        }

        match self.partner_of(order_id).map(|current| current == partner_id) {
            Some(true) => return true,
            Some(false) => {
                self.unassign(order_id);
            }
            None => {}
        }

        if self
            .partner_orders
            .entry(partner_id.to_string())
            .or_default()
            .insert(order_id.to_string())
        {
            if let Some(partner) = self.partners.get_mut(partner_id) {
                partner.increment_orders();
            }
        }
        self.order_partner
            .insert(order_id.to_string(), Some(partner_id.to_string()));
        true
    }

    pub fn try_assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()> {
        if !self.orders.contains_key(order_id) {
            return Err(OrderDeskError::OrderNotFound {
                order_id: order_id.to_string(),
            });
        }
        if !self.partners.contains_key(partner_id) {
            return Err(OrderDeskError::PartnerNotFound {
                partner_id: partner_id.to_string(),
            });
        }
        self.assign_order_to_partner(order_id, partner_id);
        Ok(())
    }

    /// Clears the order's partner, keeping the partner's set and count in step.
    fn unassign(&mut self, order_id: &str) -> Option<String> {
        let partner_id = self.order_partner.get_mut(order_id)?.take()?;
        if let Some(set) = self.partner_orders.get_mut(&partner_id) {
            if set.remove(order_id) {
                if let Some(partner) = self.partners.get_mut(&partner_id) {
                    partner.decrement_orders();
                }
            }
        }
        Some(partner_id)
    }

    pub fn order_by_id(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn partner_by_id(&self, partner_id: &str) -> Option<&Partner> {
        self.partners.get(partner_id)
    }

    pub fn partner_of(&self, order_id: &str) -> Option<&str> {
        self.order_partner.get(order_id)?.as_deref()
    }

    pub fn count_orders_for_partner(&self, partner_id: &str) -> usize {
        self.partner_orders.get(partner_id).map_or(0, HashSet::len)
    }

    pub fn order_ids_for_partner(&self, partner_id: &str) -> HashSet<String> {
        self.partner_orders
            .get(partner_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn all_order_ids(&self) -> HashSet<String> {
        self.orders.keys().cloned().collect()
    }

    /// Deletes the partner. Its orders stay in the store, unassigned.
    pub fn remove_partner(&mut self, partner_id: &str) {
        self.partners.remove(partner_id);
        let Some(order_ids) = self.partner_orders.remove(partner_id) else {
            return;
        };
        for order_id in &order_ids {
            if let Some(slot) = self.order_partner.get_mut(order_id) {
                if slot.as_deref() == Some(partner_id) {
                    *slot = None;
                }
            }
        }
        tracing::debug!(
            partner_id,
            released = order_ids.len(),
            "Released orders of removed partner"
        );
    }

    pub fn remove_order(&mut self, order_id: &str) {
        self.orders.remove(order_id);
        self.unassign(order_id);
        self.order_partner.remove(order_id);
    }

    pub fn count_unassigned_orders(&self) -> usize {
        self.order_partner
            .values()
            .filter(|partner| partner.is_none())
            .count()
    }

    /// Counts the partner's orders due strictly after `time` (`HH:MM`).
    pub fn count_orders_after_time(&self, partner_id: &str, time: &str) -> Result<usize> {
        let cutoff = DeliveryTime::parse(time)?;
        Ok(self
            .partner_delivery_times(partner_id)
            .filter(|t| *t > cutoff)
            .count())
    }

    pub fn last_delivery_time_for_partner(&self, partner_id: &str) -> Option<DeliveryTime> {
        self.partner_delivery_times(partner_id).max()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn partner_count(&self) -> usize {
        self.partners.len()
    }

    // Set members without a live order are skipped.
    fn partner_delivery_times<'a>(
        &'a self,
        partner_id: &str,
    ) -> impl Iterator<Item = DeliveryTime> + 'a {
        let orders = &self.orders;
        self.partner_orders
            .get(partner_id)
            .into_iter()
            .flatten()
            .filter_map(move |id| orders.get(id))
            .map(Order::delivery_time)
    }
}

impl OrderRepository for OrderStore {
    fn add_order(&mut self, order: Order) {
        OrderStore::add_order(self, order)
    }

    fn add_partner(&mut self, partner_id: &str) {
        OrderStore::add_partner(self, partner_id)
    }

    fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> bool {
        OrderStore::assign_order_to_partner(self, order_id, partner_id)
    }

    fn try_assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()> {
        OrderStore::try_assign_order_to_partner(self, order_id, partner_id)
    }

    fn order_by_id(&self, order_id: &str) -> Option<Order> {
        OrderStore::order_by_id(self, order_id).cloned()
    }

    fn partner_by_id(&self, partner_id: &str) -> Option<Partner> {
        OrderStore::partner_by_id(self, partner_id).cloned()
    }

    fn count_orders_for_partner(&self, partner_id: &str) -> usize {
        OrderStore::count_orders_for_partner(self, partner_id)
    }

    fn order_ids_for_partner(&self, partner_id: &str) -> HashSet<String> {
        OrderStore::order_ids_for_partner(self, partner_id)
    }

    fn all_order_ids(&self) -> HashSet<String> {
        OrderStore::all_order_ids(self)
    }

    fn remove_partner(&mut self, partner_id: &str) {
        OrderStore::remove_partner(self, partner_id)
    }

    fn remove_order(&mut self, order_id: &str) {
        OrderStore::remove_order(self, order_id)
    }

    fn count_unassigned_orders(&self) -> usize {
        OrderStore::count_unassigned_orders(self)
    }

    fn count_orders_after_time(&self, partner_id: &str, time: &str) -> Result<usize> {
        OrderStore::count_orders_after_time(self, partner_id, time)
    }

    fn last_delivery_time_for_partner(&self, partner_id: &str) -> Option<DeliveryTime> {
        OrderStore::last_delivery_time_for_partner(self, partner_id)
    }
}
