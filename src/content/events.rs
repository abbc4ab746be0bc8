use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

type Listener = Arc<dyn Fn() + Send + Sync>;
type Listeners = Mutex<Vec<(u64, Listener)>>;

/// In-process "content updated" notification.
///
/// Delivery is synchronous: [`ContentEvents::emit`] returns after every
/// listener has run. Listeners are called outside the internal lock, so a
/// listener may subscribe or unsubscribe while being notified.
#[derive(Default)]
pub struct ContentEvents {
    listeners: Arc<Listeners>,
    next_id: AtomicU64,
}

impl ContentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, Arc::new(listener)));
        }

        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn emit(&self) {
        let snapshot: Vec<Listener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return,
        };

        debug!("Notifying {} content listeners", snapshot.len());
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for ContentEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Disposer for a content listener
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.lock() {
                listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn every_subscriber_is_notified() {
        let events = ContentEvents::new();
        let (a, on_a) = counter();
        let (b, on_b) = counter();
        let _sa = events.subscribe(on_a);
        let _sb = events.subscribe(on_b);

        events.emit();
        events.emit();

        assert_eq!(a.load(Ordering::SeqCst), 2);
        assert_eq!(b.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let events = ContentEvents::new();
        let (count, on_change) = counter();
        let subscription = events.subscribe(on_change);

        events.emit();
        subscription.unsubscribe();
        events.emit();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_emitter_is_harmless() {
        let events = ContentEvents::new();
        let subscription = events.subscribe(|| {});
        drop(events);
        drop(subscription);
    }
}
