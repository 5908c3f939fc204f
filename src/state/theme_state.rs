use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Theme;
use crate::state::Subscribers;
use crate::utils::{KeyValueStore, THEME_KEY};

/// Selected theme, persisted under `theme`
#[derive(Clone)]
pub struct ThemeState {
    theme: Rc<RefCell<Theme>>,
    storage: Rc<dyn KeyValueStore>,
    subscribers: Subscribers<Theme>,
}

impl ThemeState {
    /// Restore the stored theme, or fall back to `default`
    pub fn load(storage: Rc<dyn KeyValueStore>, default: Theme) -> Self {
        let theme = storage
            .get_item(THEME_KEY)
            .and_then(|key| Theme::from_key(&key))
            .unwrap_or(default);
        Self {
            theme: Rc::new(RefCell::new(theme)),
            storage,
            subscribers: Subscribers::new(),
        }
    }

    pub fn get(&self) -> Theme {
        *self.theme.borrow()
    }

    pub fn set(&self, theme: Theme) {
        *self.theme.borrow_mut() = theme;
        if let Err(e) = self.storage.set_item(THEME_KEY, theme.key()) {
            log::warn!("⚠️ [THEME] Could not persist theme: {}", e);
        }
        log::debug!("🎨 [THEME] {}", theme.key());
        self.subscribers.notify(&theme);
    }

    pub fn toggle(&self) -> Theme {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Theme) + 'static,
    {
        self.subscribers.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;
    use std::cell::Cell;

    #[test]
    fn test_restores_stored_theme() {
        let state = ThemeState::load(Rc::new(MemoryStorage::with_item("theme", "dark")), Theme::System);
        assert_eq!(state.get(), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_uses_default() {
        let state = ThemeState::load(Rc::new(MemoryStorage::with_item("theme", "purple")), Theme::Light);
        assert_eq!(state.get(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_and_notifies() {
        let storage = Rc::new(MemoryStorage::new());
        let state = ThemeState::load(storage.clone(), Theme::System);
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        state.subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.toggle(), Theme::Dark);

        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(notified.get(), 2);
    }
}
