//! In-process publish/subscribe broker.
//!
//! # Architecture
//!
//! - [`EventBroker`] is an explicitly constructed handle, cloned into every
//!   component that emits or listens. There is no global instance.
//! - Dispatch is synchronous: [`EventBroker::emit`] runs every matching
//!   handler, in subscription order, before it returns.
//! - Handlers may emit further events or change subscriptions while an
//!   emission is running. Subscription changes apply from the next emission.
//! - A panicking handler is not caught; the panic reaches the emitter.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use larek_storefront::events::{AppEvent, EventBroker};
//!
//! let broker = EventBroker::new();
//! let opened = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&opened);
//! broker.on("basket:open", move |_| counter.set(counter.get() + 1));
//!
//! let open_basket = broker.trigger(AppEvent::BasketOpen);
//! open_basket();
//! broker.emit(AppEvent::BasketOpen);
//!
//! assert_eq!(opened.get(), 2);
//! ```

mod event;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub use event::{AppEvent, names};

/// A subscribed event handler.
pub type Handler = Rc<dyn Fn(&AppEvent)>;

/// Which event names a subscription receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPattern {
    /// Every event (`"*"`).
    Any,
    /// One event name.
    Exact(String),
    /// Every name starting with the prefix (`"basket:*"`).
    Prefix(String),
}

impl EventPattern {
    /// Parse a subscription pattern.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            Self::Any
        } else if let Some(prefix) = pattern.strip_suffix('*') {
            Self::Prefix(prefix.to_string())
        } else {
            Self::Exact(pattern.to_string())
        }
    }

    /// Returns `true` if an event called `name` matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(exact) => exact == name,
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

impl From<&str> for EventPattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

/// Handle returned by [`EventBroker::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    pattern: EventPattern,
    handler: Handler,
}

#[derive(Default)]
struct BrokerInner {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

/// Synchronous event hub shared by the model, views and presenter.
///
/// Cloning is cheap and yields a handle to the same subscriber list.
#[derive(Clone, Default)]
pub struct EventBroker {
    inner: Rc<BrokerInner>,
}

impl EventBroker {
    /// Create a broker with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to every event matching `pattern`.
    pub fn on(
        &self,
        pattern: impl Into<EventPattern>,
        handler: impl Fn(&AppEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        self.inner.subscribers.borrow_mut().push(Subscriber {
            id,
            pattern: pattern.into(),
            handler: Rc::new(handler),
        });
        id
    }

    /// Remove one subscription. Returns `false` if it was already gone.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Remove every subscription.
    pub fn off_all(&self) {
        self.inner.subscribers.borrow_mut().clear();
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Deliver `event` to every matching handler, in subscription order.
    pub fn emit(&self, event: AppEvent) {
        let name = event.name();

        // Snapshot so handlers can subscribe, unsubscribe or emit re-entrantly
        let handlers: Vec<Handler> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.pattern.matches(name))
            .map(|s| Rc::clone(&s.handler))
            .collect();

        tracing::debug!(event = name, handlers = handlers.len(), "emit");

        for handler in handlers {
            handler(&event);
        }
    }

    /// A callback that emits a fixed event each time it is called.
    ///
    /// Used to bridge DOM listeners to broker events.
    pub fn trigger(&self, event: AppEvent) -> impl Fn() + 'static {
        let broker = self.clone();
        move || broker.emit(event.clone())
    }

    /// A callback that builds its event from the callback argument.
    pub fn trigger_with<T>(&self, build: impl Fn(T) -> AppEvent + 'static) -> impl Fn(T) + 'static {
        let broker = self.clone();
        move |value| broker.emit(build(value))
    }
}

impl fmt::Debug for EventBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBroker")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
