//! Section subscriber trait

use super::SectionContext;

/// Trait for components that need to respond to section changes
pub trait SectionSubscriber: Send + Sync {
    /// Called when the active section changes
    fn on_section_change(&self, context: &SectionContext);
}
