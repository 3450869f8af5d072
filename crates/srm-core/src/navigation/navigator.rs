//! Section navigator implementation

use super::{Section, SectionContext, SectionSubscriber};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::events::{events, EventBus};

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct SectionState {
    current: Section,
    previous: Option<Section>,
}

/// Tracks the active dashboard section and notifies subscribers of changes
pub struct SectionNavigator {
    state: Arc<RwLock<SectionState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn SectionSubscriber>>>>,
    events: Arc<EventBus>,
}

impl SectionNavigator {
    /// Create a navigator starting on the overview
    pub fn new() -> Self {
        Self::with_events(Arc::new(EventBus::new()))
    }

    /// Create a navigator publishing to a shared event bus
    pub fn with_events(events: Arc<EventBus>) -> Self {
        let state = SectionState {
            current: Section::Overview,
            previous: None,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            events,
        }
    }

    /// Switch to `section`
    ///
    /// A no-op when already there; subscribers and the event bus only see
    /// actual changes.
    pub fn seek_to(&self, section: Section) {
        let previous = {
            let mut state = self.state.write();
            if state.current == section {
                return;
            }
            let previous = state.current;
            state.previous = Some(previous);
            state.current = section;
            previous
        };
        debug!("navigated to section {:?}", section);
        self.events.publish(events::SectionChanged {
            from: previous,
            to: section,
        });
        self.notify_subscribers();
    }

    /// The currently active section
    pub fn current(&self) -> Section {
        self.state.read().current
    }

    /// Get the current navigation context
    pub fn context(&self) -> SectionContext {
        let state = self.state.read();
        SectionContext {
            section: state.current,
            previous: state.previous,
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn SectionSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of a section change
    fn notify_subscribers(&self) {
        let context = self.context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_section_change(&context);
            }
        }
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recorder {
        seen: Mutex<Vec<Section>>,
    }

    impl SectionSubscriber for Recorder {
        fn on_section_change(&self, context: &SectionContext) {
            self.seen.lock().push(context.section);
        }
    }

    #[test]
    fn test_seek_notifies_subscribers() {
        let navigator = SectionNavigator::new();
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        navigator.add_subscriber(recorder.clone());

        navigator.seek_to(Section::Students);
        navigator.seek_to(Section::Analytics);

        assert_eq!(navigator.current(), Section::Analytics);
        assert_eq!(
            *recorder.seen.lock(),
            vec![Section::Students, Section::Analytics]
        );
        assert_eq!(navigator.context().previous, Some(Section::Students));
    }

    #[test]
    fn test_seek_publishes_section_changed() {
        use crate::events::{handler_from_fn, Event};
        use parking_lot::Mutex;

        let bus = Arc::new(EventBus::new());
        let navigator = SectionNavigator::with_events(bus.clone());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe::<events::SectionChanged>(handler_from_fn(move |event| {
            if let Some(changed) = event.as_any().downcast_ref::<events::SectionChanged>() {
                sink.lock().push((changed.from, changed.to));
            }
        }));

        navigator.seek_to(Section::Courses);
        assert_eq!(*seen.lock(), vec![(Section::Overview, Section::Courses)]);
    }

    #[test]
    fn test_seek_to_current_section_is_silent() {
        let navigator = SectionNavigator::new();
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        navigator.add_subscriber(recorder.clone());

        navigator.seek_to(Section::Overview);
        assert!(recorder.seen.lock().is_empty());
    }
}
