use std::{cell::RefCell, sync::Arc};

use uniffi::export;

/// Title used when a view has no menu title configured.
pub const DEFAULT_MENU_TITLE: &str = "Highlight";

/// A custom action exposed in the text selection menu.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MenuItem {
    /// Stable identifier of the action the item triggers.
    pub action: String,
    /// Title shown to the user.
    pub title: String,
}

/// Process-wide registry of custom menu items, shared by every highlightable
/// view in the app.
///
/// Registration is idempotent per action: the first title registered for an
/// action wins and later registrations are ignored, so re-running view setup
/// never duplicates an entry. Wiring the items into the platform menu is the
/// host's job.
#[derive(Debug, Default, uniffi::Object)]
pub struct MenuRegistry {
    items: RefCell<Vec<MenuItem>>,
}

unsafe impl Send for MenuRegistry {}
unsafe impl Sync for MenuRegistry {}

#[export]
impl MenuRegistry {
    #[must_use]
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            items: RefCell::new(Vec::new()),
        })
    }

    /// Register a menu item unless one with the same action already exists.
    /// Returns whether the item was added.
    #[uniffi::method]
    pub fn register_if_absent(self: Arc<Self>, action: &str, title: String) -> bool {
        let mut items = self.items.borrow_mut();
        if items.iter().any(|item| item.action == action) {
            return false;
        }
        items.push(MenuItem {
            action: action.to_string(),
            title,
        });
        true
    }

    #[must_use]
    #[uniffi::method]
    pub fn items(self: Arc<Self>) -> Vec<MenuItem> {
        self.items.borrow().clone()
    }
}
