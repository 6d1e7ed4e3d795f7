//! Window resize registration

use parking_lot::Mutex;
use std::sync::Arc;

type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Token returned by [`ResizeNotifier::subscribe`]; pass it back to
/// unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of window-resize listeners owned by the rendering environment.
#[derive(Default)]
pub struct ResizeNotifier {
    listeners: Arc<Mutex<Listeners>>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != subscription.0);
        listeners.entries.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    /// Deliver a resize to every listener registered at the time of the call.
    ///
    /// Listeners run without the registry locked, so they may subscribe or
    /// unsubscribe.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(listeners = snapshot.len(), "Window resized");

        for listener in &snapshot {
            listener();
        }
        snapshot.len()
    }
}

impl Clone for ResizeNotifier {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl std::fmt::Debug for ResizeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
