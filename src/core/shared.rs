use crate::core::store::OrderStore;
use crate::domain::model::{DeliveryTime, Order, Partner};
use crate::domain::ports::OrderRepository;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one [`OrderStore`] behind a single mutex.
///
/// Every call takes the lock once, so operations that touch several indexes
/// are atomic to other holders of the handle.
#[derive(Debug, Clone, Default)]
pub struct SharedOrderStore {
    inner: Arc<Mutex<OrderStore>>,
}

impl SharedOrderStore {
    pub fn new(store: OrderStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs `f` with the lock held, for reads that must see one consistent state.
    pub fn with<T>(&self, f: impl FnOnce(&OrderStore) -> T) -> T {
        f(&self.lock())
    }

    pub fn with_mut<T>(&self, f: impl FnOnce(&mut OrderStore) -> T) -> T {
        f(&mut self.lock())
    }

    // Store methods never leave a half-applied mutation, so a poisoned lock is
    // still safe to reuse.
    fn lock(&self) -> MutexGuard<'_, OrderStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrderRepository for SharedOrderStore {
    fn add_order(&mut self, order: Order) {
        self.lock().add_order(order)
    }

    fn add_partner(&mut self, partner_id: &str) {
        self.lock().add_partner(partner_id)
    }

    fn assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> bool {
        self.lock().assign_order_to_partner(order_id, partner_id)
    }

    fn try_assign_order_to_partner(&mut self, order_id: &str, partner_id: &str) -> Result<()> {
        self.lock().try_assign_order_to_partner(order_id, partner_id)
    }

    fn order_by_id(&self, order_id: &str) -> Option<Order> {
        self.lock().order_by_id(order_id).cloned()
    }

    fn partner_by_id(&self, partner_id: &str) -> Option<Partner> {
        self.lock().partner_by_id(partner_id).cloned()
    }

    fn count_orders_for_partner(&self, partner_id: &str) -> usize {
        self.lock().count_orders_for_partner(partner_id)
    }

    fn order_ids_for_partner(&self, partner_id: &str) -> HashSet<String> {
        self.lock().order_ids_for_partner(partner_id)
    }

    fn all_order_ids(&self) -> HashSet<String> {
        self.lock().all_order_ids()
    }

    fn remove_partner(&mut self, partner_id: &str) {
        self.lock().remove_partner(partner_id)
    }

    fn remove_order(&mut self, order_id: &str) {
        self.lock().remove_order(order_id)
    }

    fn count_unassigned_orders(&self) -> usize {
        self.lock().count_unassigned_orders()
    }

    fn count_orders_after_time(&self, partner_id: &str, time: &str) -> Result<usize> {
        self.lock().count_orders_after_time(partner_id, time)
    }

    fn last_delivery_time_for_partner(&self, partner_id: &str) -> Option<DeliveryTime> {
        self.lock().last_delivery_time_for_partner(partner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_handles_share_state() {
        let mut writer = SharedOrderStore::default();
        let reader = writer.clone();

        writer.add_order(Order::new("A", "10:30").unwrap());
        writer.add_partner("P1");
        assert!(writer.assign_order_to_partner("A", "P1"));

        assert_eq!(reader.count_orders_for_partner("P1"), 1);
        assert_eq!(
            reader.last_delivery_time_for_partner("P1").map(|t| t.to_string()),
            Some("10:30".to_string())
        );
    }

    #[test]
    fn test_concurrent_assignments_stay_consistent() {
        let shared = SharedOrderStore::default();
        shared.with_mut(|store| {
            store.add_partner("P1");
            store.add_partner("P2");
        });

        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let mut handle = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let id = format!("w{worker}-{i}");
                        handle.add_order(Order::new(id.as_str(), "12:00").unwrap());
                        let partner = if i % 2 == 0 { "P1" } else { "P2" };
                        handle.assign_order_to_partner(&id, partner);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        shared.with(|store| {
            assert_eq!(store.order_count(), 200);
            assert_eq!(store.count_orders_for_partner("P1"), 100);
            assert_eq!(store.partner_by_id("P2").unwrap().order_count(), 100);
            assert_eq!(store.count_unassigned_orders(), 0);
        });
    }
}
