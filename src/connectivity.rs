//! Connectivity monitor
//!
//! Tracks the online/offline status reported by the browser and gates which
//! resolution path the next submitted utterance takes. The platform signal
//! is trusted at face value: no debouncing, no probing, no retroactive
//! effect on in-flight remote calls.

use tokio::sync::watch;

/// Shared connectivity status with change notification.
#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    tx: std::sync::Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        let (tx, _rx) = watch::channel(online);
        Self {
            tx: std::sync::Arc::new(tx),
        }
    }

    /// Current status as of this instant. Callers snapshot this once per
    /// utterance and pass it explicitly into the resolver.
    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Record a network-restored or network-lost signal. Subscribers are
    /// only notified on actual transitions.
    pub fn set_online(&self, online: bool) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        });
        if changed {
            tracing::info!(online, "connectivity changed");
        }
    }

    /// Watch for status transitions.
    #[allow(dead_code)] // Used in tests
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flips_on_signal() {
        let monitor = ConnectivityMonitor::new(true);
        assert!(monitor.is_online());

        monitor.set_online(false);
        assert!(!monitor.is_online());

        monitor.set_online(true);
        assert!(monitor.is_online());
    }

    #[test]
    fn test_clones_share_status() {
        let monitor = ConnectivityMonitor::new(true);
        let other = monitor.clone();

        monitor.set_online(false);
        assert!(!other.is_online());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions_only() {
        let monitor = ConnectivityMonitor::new(true);
        let mut rx = monitor.subscribe();

        // Same-value signal is not a transition.
        monitor.set_online(true);
        assert!(!rx.has_changed().unwrap());

        monitor.set_online(false);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
    }
}
