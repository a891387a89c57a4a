//! Active-theme context
//!
//! An explicitly-owned context object - constructed once at application
//! start and handed (usually as an `Arc`) to every consumer. Single writer,
//! many readers: the resolved theme snapshot is swapped whole under one
//! lock, so a reader always sees the last fully-applied variant and never a
//! partially-updated tree. Switching notifies subscribers synchronously, on
//! the caller's thread, before `set_active` returns.

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::theme::{Theme, ThemeName};
use slotmap::{new_key_type, SlotMap};
use std::str::FromStr;
use std::sync::{Arc, RwLock};

new_key_type! {
    /// Handle for one registered theme-change listener.
    pub struct SubscriptionId;
}

type Listener = Arc<dyn Fn(&Theme) + Send + Sync>;

struct ActiveTheme {
    name: ThemeName,
    theme: Arc<Theme>,
}

/// Process-wide active-theme state, injected rather than global.
pub struct ThemeContext {
    registry: ThemeRegistry,
    active: RwLock<ActiveTheme>,
    listeners: RwLock<SlotMap<SubscriptionId, Listener>>,
}

impl ThemeContext {
    /// Context over a registry, starting on the light variant.
    pub fn new(registry: ThemeRegistry) -> Self {
        let theme = Arc::clone(registry.theme(ThemeName::Light));
        Self {
            registry,
            active: RwLock::new(ActiveTheme {
                name: ThemeName::Light,
                theme,
            }),
            listeners: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Context over the built-in themes.
    pub fn with_builtin() -> Result<Self, ThemeError> {
        Ok(Self::new(ThemeRegistry::new()?))
    }

    /// The registry backing this context.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Currently selected variant name.
    pub fn active(&self) -> ThemeName {
        self.active.read().unwrap().name
    }

    /// Snapshot of the active resolved theme.
    pub fn theme(&self) -> Arc<Theme> {
        Arc::clone(&self.active.read().unwrap().theme)
    }

    /// Switch the active variant. Setting the already-active name is a
    /// no-op and does not notify.
    pub fn set_active(&self, name: ThemeName) {
        {
            let mut active = self.active.write().unwrap();
            if active.name == name {
                return;
            }
            tracing::debug!(from = %active.name, to = %name, "switching active theme");
            active.name = name;
            active.theme = Arc::clone(self.registry.theme(name));
        }
        self.notify();
    }

    /// Switch by name, rejecting anything that is not a registered variant
    /// before any state changes.
    pub fn set_active_by_name(&self, name: &str) -> Result<(), ThemeError> {
        let name = ThemeName::from_str(name)?;
        self.set_active(name);
        Ok(())
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.set_active(self.active().toggle());
    }

    /// Register a listener invoked synchronously after every switch.
    pub fn subscribe(&self, listener: impl Fn(&Theme) + Send + Sync + 'static) -> SubscriptionId {
        self.listeners
            .write()
            .unwrap()
            .insert(Arc::new(listener))
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.write().unwrap().remove(id);
    }

    fn notify(&self) {
        let theme = self.theme();
        // Snapshot the listeners so none of them holds the registry lock
        // while running; a listener may itself subscribe or unsubscribe.
        // Listeners added during notification first fire on the next switch.
        let listeners: Vec<Listener> = self.listeners.read().unwrap().values().cloned().collect();
        for listener in listeners {
            listener(&theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn context() -> ThemeContext {
        ThemeContext::with_builtin().unwrap()
    }

    #[test]
    fn starts_on_light() {
        let ctx = context();
        assert_eq!(ctx.active(), ThemeName::Light);
        assert_eq!(ctx.theme().name, ThemeName::Light);
    }

    #[test]
    fn switch_swaps_the_whole_snapshot() {
        let ctx = context();
        ctx.set_active(ThemeName::Dark);
        let theme = ctx.theme();
        assert_eq!(theme.name, ThemeName::Dark);
        // The snapshot is the registry's resolved object, not a rebuild.
        assert!(Arc::ptr_eq(&theme, ctx.registry().theme(ThemeName::Dark)));
    }

    #[test]
    fn unknown_name_is_rejected_without_mutation() {
        let ctx = context();
        let err = ctx.set_active_by_name("solarized").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(_)));
        assert_eq!(ctx.active(), ThemeName::Light);
    }

    #[test]
    fn listeners_run_synchronously_with_the_new_theme() {
        let ctx = context();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        ctx.subscribe(move |theme| seen_clone.lock().unwrap().push(theme.name));

        ctx.set_active(ThemeName::Dark);
        ctx.set_active(ThemeName::Light);
        assert_eq!(*seen.lock().unwrap(), vec![ThemeName::Dark, ThemeName::Light]);
    }

    #[test]
    fn redundant_set_does_not_notify() {
        let ctx = context();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        ctx.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        ctx.set_active(ThemeName::Light);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        ctx.set_active(ThemeName::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let ctx = context();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let id = ctx.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        ctx.unsubscribe(id);
        ctx.toggle();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn listener_may_change_subscriptions_during_notification() {
        let ctx = Arc::new(context());
        let ran = Arc::new(AtomicUsize::new(0));

        let ctx_clone = Arc::clone(&ctx);
        let ran_clone = Arc::clone(&ran);
        ctx.subscribe(move |_| {
            ran_clone.fetch_add(1, Ordering::SeqCst);
            // Touching the registry from inside a callback must not block
            // on the notification pass.
            let id = ctx_clone.subscribe(|_| {});
            ctx_clone.unsubscribe(id);
        });

        ctx.set_active(ThemeName::Dark);
        ctx.set_active(ThemeName::Light);
        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_subscribed_mid_notification_fires_on_the_next_switch() {
        let ctx = Arc::new(context());
        let late_runs = Arc::new(AtomicUsize::new(0));

        let ctx_clone = Arc::clone(&ctx);
        let late_clone = Arc::clone(&late_runs);
        ctx.subscribe(move |_| {
            let late = Arc::clone(&late_clone);
            ctx_clone.subscribe(move |_| {
                late.fetch_add(1, Ordering::SeqCst);
            });
        });

        ctx.set_active(ThemeName::Dark);
        assert_eq!(late_runs.load(Ordering::SeqCst), 0);
        ctx.set_active(ThemeName::Light);
        assert_eq!(late_runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn round_trip_restores_the_original_snapshot() {
        let ctx = context();
        let before = ctx.theme();
        ctx.set_active(ThemeName::Dark);
        ctx.set_active(ThemeName::Light);
        assert!(Arc::ptr_eq(&before, &ctx.theme()));
    }
}
