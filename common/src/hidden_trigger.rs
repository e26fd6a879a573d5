//! Temporary hiding of an element through its inline `display` property.

use tracing::error;

/// Inline `display` access on an element.
pub trait InlineDisplay {
    /// Inline value, empty when none is set.
    fn inline_display(&self) -> String;
    fn set_inline_display(&self, value: &str) -> Result<(), String>;
    fn remove_inline_display(&self) -> Result<(), String>;
}

/// Keeps its target hidden while alive.
///
/// On drop the previous inline value is put back, or the property is removed
/// when there was none.
pub struct HiddenTrigger<T: InlineDisplay> {
    target: Option<T>,
    previous_display: String,
}

impl<T: InlineDisplay> HiddenTrigger<T> {
    /// A missing target gives a guard that does nothing.
    pub fn hide(target: Option<T>) -> Self {
        let mut previous_display = String::new();
        if let Some(target) = &target {
            previous_display = target.inline_display();
            if let Err(e) = target.set_inline_display("none") {
                error!("Failed to hide export button: {}", e);
            }
        }
        Self { target, previous_display }
    }
}

impl<T: InlineDisplay> Drop for HiddenTrigger<T> {
    fn drop(&mut self) {
        let Some(target) = &self.target else { return };
        let restored = if self.previous_display.is_empty() {
            target.remove_inline_display()
        } else {
            target.set_inline_display(&self.previous_display)
        };
        if let Err(e) = restored {
            error!("Failed to restore export button: {}", e);
        }
    }
}
