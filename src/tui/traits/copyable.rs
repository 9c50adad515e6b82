//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// When the user presses `y`, the focused component's `Copyable`
/// implementation decides what gets copied.
pub trait Copyable: Component {
    /// Human-readable text for the clipboard
    ///
    /// Returns `None` if there's nothing to copy (e.g., empty panel).
    fn copy_text(&self) -> Option<String>;

    /// What will be copied, for the toast message
    fn copy_description(&self) -> String {
        format!("{:?}", self.id()).to_lowercase()
    }
}
