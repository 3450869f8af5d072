use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// In-process event bus shared by the dashboard sessions
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Events published by the sessions and the section navigator
pub mod events {
    use super::Event;
    use crate::navigation::Section;
    use crate::notify::NotificationKind;

    /// A session's collection was (re)loaded
    #[derive(Debug, Clone)]
    pub struct RecordsLoaded {
        pub session: String,
        pub count: usize,
    }

    /// A session's query term or filters changed
    #[derive(Debug, Clone)]
    pub struct QueryChanged {
        pub session: String,
        pub term: String,
        pub filter_count: usize,
    }

    /// A record was selected for detail display
    #[derive(Debug, Clone)]
    pub struct SelectionChanged {
        pub session: String,
        pub id: String,
    }

    /// The selection was reset to none
    #[derive(Debug, Clone)]
    pub struct SelectionCleared {
        pub session: String,
    }

    /// The active dashboard section changed
    #[derive(Debug, Clone)]
    pub struct SectionChanged {
        pub from: Section,
        pub to: Section,
    }

    /// A notification was handed to the notification collaborator
    #[derive(Debug, Clone)]
    pub struct NotificationRaised {
        pub title: String,
        pub kind: NotificationKind,
    }

    // Implement Event trait for all event types
    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        RecordsLoaded,
        QueryChanged,
        SelectionChanged,
        SelectionCleared,
        SectionChanged,
        NotificationRaised
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}
