//! In-memory order store keyed by time-ordered identifiers.
//!
//! Shows how record-owning layers should use identifiers: `create` asks the
//! `IdGenerator` for a key exactly once, the key is never rewritten, and all
//! ordered access (listing, keyset pagination, time ranges) goes through the
//! identifier ordering via `BTreeMap`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use thiserror::Error;
use tracing::debug;

use crate::context::ServiceContext;
use crate::error::IdError;
use crate::id::Identifier;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Placed, not yet confirmed.
    Pending,
    /// Confirmed by the seller.
    Confirmed,
    /// Handed to the carrier.
    Shipped,
    /// Delivered.
    Completed,
    /// Cancelled before completion.
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

/// A stored order. The key is assigned by the store and read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: Identifier,
    /// Customer display name.
    pub customer_name: String,
    /// Order total in minor currency units.
    pub total_cents: u64,
    /// Current status.
    pub status: OrderStatus,
}

impl Order {
    /// The order's primary key.
    #[must_use]
    pub fn id(&self) -> Identifier {
        self.id
    }
}

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No order has the given key.
    #[error("order {0} not found")]
    NotFound(Identifier),

    /// The generator produced a key that is already stored.
    #[error("generated key {0} already in use")]
    DuplicateKey(Identifier),

    /// Key generation failed.
    #[error(transparent)]
    Generate(#[from] IdError),
}

/// In-memory orders keyed by time-ordered identifiers.
pub struct OrderStore<'a> {
    ctx: &'a ServiceContext,
    orders: BTreeMap<Identifier, Order>,
}

impl<'a> OrderStore<'a> {
    /// Creates an empty store drawing keys from `ctx.id_gen`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx, orders: BTreeMap::new() }
    }

    /// Creates a pending order under a freshly generated key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Generate`] if no key can be generated and
    /// [`StoreError::DuplicateKey`] if the key collides with a stored order.
    pub fn create(
        &mut self,
        customer_name: impl Into<String>,
        total_cents: u64,
    ) -> Result<&Order, StoreError> {
        let id = self.ctx.id_gen.generate()?;
        let entry = match self.orders.entry(id) {
            Entry::Occupied(_) => {
                return Err(StoreError::DuplicateKey(id));
            }
            Entry::Vacant(v) => v,
        };
        debug!(%id, "order created");
        Ok(entry.insert(Order {
            id,
            customer_name: customer_name.into(),
            total_cents,
            status: OrderStatus::Pending,
        }))
    }

    /// Looks up an order by key.
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&Order> {
        self.orders.get(id)
    }

    /// All orders in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<&Order> {
        self.orders.values().collect()
    }

    /// Up to `limit` orders strictly after `cursor` (from the start if `None`).
    #[must_use]
    pub fn page_after(&self, cursor: Option<&Identifier>, limit: usize) -> Vec<&Order> {
        let start = cursor.map_or(Bound::Unbounded, Bound::Excluded);
        self.orders.range((start, Bound::Unbounded)).take(limit).map(|(_, o)| o).collect()
    }

    /// Orders created between `from_ms` and `to_ms` inclusive.
    #[must_use]
    pub fn created_between(&self, from_ms: u64, to_ms: u64) -> Vec<&Order> {
        if from_ms > to_ms {
            return Vec::new();
        }
        let low = Identifier::min_for_millis(from_ms);
        let high = Identifier::max_for_millis(to_ms);
        self.orders.range(low..=high).map(|(_, o)| o).collect()
    }

    /// Orders with the given status, in creation order.
    #[must_use]
    pub fn by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.values().filter(|o| o.status == status).collect()
    }

    /// Orders whose customer name contains `needle`, in creation order.
    #[must_use]
    pub fn by_customer(&self, needle: &str) -> Vec<&Order> {
        self.orders.values().filter(|o| o.customer_name.contains(needle)).collect()
    }

    /// Changes an order's status. The key is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown key.
    pub fn update_status(
        &mut self,
        id: &Identifier,
        status: OrderStatus,
    ) -> Result<&Order, StoreError> {
        let order = self.orders.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        order.status = status;
        Ok(order)
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Removes every order.
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::adapters::live::entropy::OsEntropy;
    use crate::id::is_sorted;
    use crate::ports::{Clock, EntropySource};

    /// Advances one millisecond per read, starting near the top-bit boundary.
    struct SteppingClock(AtomicI64);

    impl Clock for SteppingClock {
        fn now(&self) -> Result<DateTime<Utc>, IdError> {
            let ms = self.0.fetch_add(1, Ordering::SeqCst);
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| IdError::ClockUnavailable("out of range".into()))
        }
    }

    /// Always reports the same millisecond.
    struct StuckClock;

    impl Clock for StuckClock {
        fn now(&self) -> Result<DateTime<Utc>, IdError> {
            Ok(DateTime::<Utc>::UNIX_EPOCH)
        }
    }

    struct ZeroEntropy;

    impl EntropySource for ZeroEntropy {
        fn fill(&self, dest: &mut [u8]) -> Result<(), IdError> {
            dest.fill(0);
            Ok(())
        }
    }

    struct NoEntropy;

    impl EntropySource for NoEntropy {
        fn fill(&self, _dest: &mut [u8]) -> Result<(), IdError> {
            Err(IdError::EntropyUnavailable("closed".into()))
        }
    }

    fn stepping_ctx(start_ms: i64) -> ServiceContext {
        ServiceContext::from_ports(
            Box::new(SteppingClock(AtomicI64::new(start_ms))),
            Box::new(OsEntropy),
        )
    }

    #[test]
    fn create_assigns_key_once_and_starts_pending() {
        let ctx = stepping_ctx(1_700_000_000_000);
        let mut store = OrderStore::new(&ctx);
        let id = store.create("Alice", 1_250).unwrap().id();

        let order = store.get(&id).unwrap();
        assert_eq!(order.customer_name, "Alice");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(id.timestamp_ms(), 1_700_000_000_000);

        let updated = store.update_status(&id, OrderStatus::Shipped).unwrap();
        assert_eq!(updated.id(), id);
        assert_eq!(updated.status, OrderStatus::Shipped);
    }

    #[test]
    fn list_follows_creation_order_across_top_bit() {
        // 0x7FFF_FFFF_FFFF is the last timestamp with the top stored bit clear.
        let ctx = stepping_ctx(0x7FFF_FFFF_FFFE);
        let mut store = OrderStore::new(&ctx);
        let ids: Vec<_> = (0..4).map(|i| store.create(format!("c{i}"), 1).unwrap().id()).collect();

        let listed: Vec<_> = store.list().iter().map(|o| o.id()).collect();
        assert_eq!(listed, ids);
        assert!(is_sorted(&listed));
        assert_eq!(listed[2].as_bytes()[0], 0x80);
    }

    #[test]
    fn page_after_walks_every_order_once() {
        let ctx = stepping_ctx(1_000);
        let mut store = OrderStore::new(&ctx);
        for i in 0..7 {
            store.create(format!("c{i}"), i).unwrap();
        }

        let mut seen = Vec::new();
        let mut cursor = None;
        loop {
            let page = store.page_after(cursor.as_ref(), 3);
            if page.is_empty() {
                break;
            }
            seen.extend(page.iter().map(|o| o.id()));
            cursor = page.last().map(|o| o.id());
        }
        assert_eq!(seen.len(), 7);
        assert!(is_sorted(&seen));
    }

    #[test]
    fn created_between_is_inclusive_by_millisecond() {
        let ctx = stepping_ctx(5_000);
        let mut store = OrderStore::new(&ctx);
        for i in 0..5 {
            store.create(format!("c{i}"), 0).unwrap();
        }
        let hits: Vec<_> =
            store.created_between(5_001, 5_003).iter().map(|o| o.id().timestamp_ms()).collect();
        assert_eq!(hits, vec![5_001, 5_002, 5_003]);
        assert!(store.created_between(5_003, 5_001).is_empty());
    }

    #[test]
    fn filters_by_status_and_customer() {
        let ctx = stepping_ctx(0);
        let mut store = OrderStore::new(&ctx);
        let a = store.create("Alice Smith", 10).unwrap().id();
        store.create("Bob Jones", 20).unwrap();
        store.create("Carol Smith", 30).unwrap();
        store.update_status(&a, OrderStatus::Cancelled).unwrap();

        assert_eq!(store.by_status(OrderStatus::Pending).len(), 2);
        assert_eq!(store.by_status(OrderStatus::Cancelled)[0].id(), a);
        let smiths: Vec<_> = store.by_customer("Smith").iter().map(|o| o.total_cents).collect();
        assert_eq!(smiths, vec![10, 30]);
    }

    #[test]
    fn duplicate_key_is_rejected_not_overwritten() {
        let ctx = ServiceContext::from_ports(Box::new(StuckClock), Box::new(ZeroEntropy));
        let mut store = OrderStore::new(&ctx);
        let first = store.create("first", 1).unwrap().id();

        let err = store.create("second", 2).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(id) if id == first));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&first).unwrap().customer_name, "first");
    }

    #[test]
    fn generation_failure_surfaces_and_stores_nothing() {
        let ctx = ServiceContext::from_ports(
            Box::new(SteppingClock(AtomicI64::new(0))),
            Box::new(NoEntropy),
        );
        let mut store = OrderStore::new(&ctx);
        let err = store.create("x", 1).unwrap_err();
        assert!(matches!(err, StoreError::Generate(IdError::EntropyUnavailable(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn update_unknown_order_is_not_found() {
        let ctx = stepping_ctx(0);
        let mut store = OrderStore::new(&ctx);
        let missing = Identifier::min_for_millis(1);
        assert!(matches!(
            store.update_status(&missing, OrderStatus::Confirmed),
            Err(StoreError::NotFound(id)) if id == missing
        ));
    }

    #[test]
    fn clear_removes_everything() {
        let ctx = stepping_ctx(0);
        let mut store = OrderStore::new(&ctx);
        store.create("a", 1).unwrap();
        store.create("b", 2).unwrap();
        assert_eq!(store.len(), 2);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn status_display_matches_wire_names() {
        assert_eq!(OrderStatus::Pending.to_string(), "PENDING");
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }
}
