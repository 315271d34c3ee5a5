//! In-memory application state container.
//!
//! [`AppStore`] holds the signed-in user, the occasion-asset catalog, and the
//! marketplace listing. It is explicitly constructed at application start and
//! shared as `Arc<AppStore>`; tests build as many independent instances as
//! they need. Nothing here is durable — state is lost on restart by design.
//!
//! Mutations are synchronous and take one short write-lock each. Observers
//! subscribe to a `tokio::sync::broadcast` feed of [`StoreEvent`]s published
//! after every successful mutation.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::assets::{MarketplaceAsset, OccasionAsset};
use crate::user::{Credits, GeneratedAsset, GeneratedKind, User, HISTORY_CAP};

/// Buffer capacity of the store event feed.
const EVENT_CAPACITY: usize = 256;

/// Notification published after each store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum StoreEvent {
    UserReplaced,
    CatalogReplaced,
    MarketplaceReplaced,
    CreditsChanged { kind: GeneratedKind },
    HistoryAppended,
}

#[derive(Debug, Default)]
struct StoreInner {
    user: Option<User>,
    assets: Vec<OccasionAsset>,
    marketplace: Vec<MarketplaceAsset>,
}

/// Process-wide mutable application state.
#[derive(Debug)]
pub struct AppStore {
    inner: RwLock<StoreInner>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: RwLock::new(StoreInner::default()),
            events,
        }
    }

    /// Subscribe to mutation notifications.
    ///
    /// Each subscriber independently receives every event published after
    /// the call. Lagging subscribers miss events rather than blocking
    /// mutators.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        // Send fails only when there are no subscribers, which is fine.
        let _ = self.events.send(event);
    }

    // -- read accessors (snapshot semantics) --

    /// Clone of the signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// Clone of the occasion-asset catalog.
    pub fn assets(&self) -> Vec<OccasionAsset> {
        self.read().assets.clone()
    }

    /// Find one occasion asset by id.
    pub fn asset(&self, id: &str) -> Option<OccasionAsset> {
        self.read().assets.iter().find(|a| a.id == id).cloned()
    }

    /// Clone of the marketplace listing.
    pub fn marketplace(&self) -> Vec<MarketplaceAsset> {
        self.read().marketplace.clone()
    }

    /// Current credit counters, if a user is signed in.
    pub fn credits(&self) -> Option<Credits> {
        self.read().user.as_ref().map(|u| u.credits)
    }

    // -- mutations --

    /// Replace the signed-in user (or sign out with `None`).
    pub fn set_user(&self, user: Option<User>) {
        self.write().user = user;
        self.publish(StoreEvent::UserReplaced);
    }

    /// Replace the occasion-asset catalog wholesale. No merging.
    pub fn set_assets(&self, assets: Vec<OccasionAsset>) {
        self.write().assets = assets;
        self.publish(StoreEvent::CatalogReplaced);
    }

    /// Replace the marketplace listing wholesale. No merging.
    pub fn set_marketplace(&self, marketplace: Vec<MarketplaceAsset>) {
        self.write().marketplace = marketplace;
        self.publish(StoreEvent::MarketplaceReplaced);
    }

    /// Append a listing to the marketplace.
    pub fn push_listing(&self, listing: MarketplaceAsset) {
        self.write().marketplace.push(listing);
        self.publish(StoreEvent::MarketplaceReplaced);
    }

    /// Add `delta` to the signed-in user's credit counter for `kind`.
    ///
    /// A no-op when no user is signed in. The stored counter saturates at
    /// zero; sufficiency checks belong to
    /// [`try_reserve_credit`](Self::try_reserve_credit), not here.
    pub fn update_credits(&self, kind: GeneratedKind, delta: i64) {
        let mut inner = self.write();
        let Some(user) = inner.user.as_mut() else {
            return;
        };
        user.credits.apply(kind, delta);
        drop(inner);
        self.publish(StoreEvent::CreditsChanged { kind });
    }

    /// Atomically check and decrement one credit of `kind`.
    ///
    /// Returns `false` (leaving the counter untouched) when no user is
    /// signed in or the counter is already zero. Holding the write lock for
    /// the check and the decrement closes the double-spend window between
    /// two concurrent generation flows.
    pub fn try_reserve_credit(&self, kind: GeneratedKind) -> bool {
        let mut inner = self.write();
        let Some(user) = inner.user.as_mut() else {
            return false;
        };
        let taken = user.credits.try_take(kind);
        drop(inner);

        if taken {
            self.publish(StoreEvent::CreditsChanged { kind });
        }
        taken
    }

    /// Refund one previously reserved credit of `kind`.
    pub fn refund_credit(&self, kind: GeneratedKind) {
        self.update_credits(kind, 1);
    }

    /// Prepend a generation record to the signed-in user's history,
    /// truncating to the most recent [`HISTORY_CAP`] entries.
    ///
    /// A no-op when no user is signed in.
    pub fn add_to_history(&self, asset: GeneratedAsset) {
        let mut inner = self.write();
        let Some(user) = inner.user.as_mut() else {
            return;
        };
        user.generation_history.insert(0, asset);
        user.generation_history.truncate(HISTORY_CAP);
        drop(inner);
        self.publish(StoreEvent::HistoryAppended);
    }

    // -- lock helpers --

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
