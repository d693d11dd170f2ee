//! Read-through cache layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  get(key)  ┌─────────────┐  miss   ┌─────────────┐
//! │   Facade    │───────────▶│    Memo     │────────▶│   Loader    │
//! │ (service)   │            │ (per query) │         │(client+map) │
//! └─────────────┘            └─────────────┘         └─────────────┘
//!        │                          ▲
//!        ▼                          │ clear_all
//! ┌─────────────┐            ┌─────────────┐
//! │  Registry   │◀───────────│ Invalidation│
//! │   status    │  watermark │ Controller  │
//! └─────────────┘            └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`id`]: closed enumeration of caches
//! - [`memo`]: single-flight key/value memo bound to one loader
//! - [`invalidation`]: watermark-driven clearing of every cache

pub mod id;
pub mod invalidation;
pub mod memo;

pub use id::CacheId;
pub use invalidation::InvalidationController;
pub use memo::{Clearable, Loader, Memo};

/// A fixed set of caches addressable by [`CacheId`]
pub trait CacheTable: Send + Sync {
    fn cache(&self, id: CacheId) -> &dyn Clearable;

    fn clear(&self, id: CacheId) {
        self.cache(id).clear();
    }

    /// Clear every cache in [`CacheId::ALL`] order
    fn clear_all(&self) {
        for id in CacheId::ALL {
            self.clear(id);
        }
    }
}
