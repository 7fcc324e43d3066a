//! Premium purchase state.
//!
//! Purchases happen in the app store front; the backend only holds whether
//! premium content is unlocked so the catalog can be gated on it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Cloneable handle to the premium entitlement; clones share one flag
#[derive(Debug, Clone, Default)]
pub struct Entitlements {
    premium_unlocked: Arc<AtomicBool>,
}

impl Entitlements {
    pub fn new(premium_unlocked: bool) -> Self {
        Self {
            premium_unlocked: Arc::new(AtomicBool::new(premium_unlocked)),
        }
    }

    pub fn is_premium_unlocked(&self) -> bool {
        self.premium_unlocked.load(Ordering::SeqCst)
    }

    pub fn set_premium_unlocked(&self, unlocked: bool) {
        let previous = self.premium_unlocked.swap(unlocked, Ordering::SeqCst);
        if previous != unlocked {
            info!("Premium content {}", if unlocked { "unlocked" } else { "locked" });
        }
    }
}
