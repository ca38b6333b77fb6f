//! Theme context
//!
//! Holds the shared theme and the current appearance for one provider scope.
//! The context is passed explicitly to whatever needs it; there is no global
//! instance.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::resolve::{self, SurfaceColors, Variant, VariantColors};
use crate::theme::{Theme, ThemeMode};
use crate::tokens::ColorName;

type ModeListener = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// Theme plus light/dark state
pub struct ThemeContext {
    theme: Arc<Theme>,
    mode: ThemeMode,
    /// Mode requested by the app at construction; `None` follows the device
    initial_mode: Option<ThemeMode>,
    /// Mode that overrides both the device and [`set_mode`](Self::set_mode)
    forced_mode: Option<ThemeMode>,
    listeners: Vec<ModeListener>,
}

impl ThemeContext {
    /// `initial_mode` wins over `device_scheme`; without one the context
    /// tracks the device
    pub fn new(theme: Arc<Theme>, initial_mode: Option<ThemeMode>, device_scheme: ThemeMode) -> Self {
        Self {
            theme,
            mode: initial_mode.unwrap_or(device_scheme),
            initial_mode,
            forced_mode: None,
            listeners: Vec::new(),
        }
    }

    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn forced_mode(&self) -> Option<ThemeMode> {
        self.forced_mode
    }

    /// Register a callback run when [`set_mode`](Self::set_mode) or
    /// [`toggle_mode`](Self::toggle_mode) changes the mode. Device and forced
    /// mode updates do not call it.
    pub fn on_mode_change(&mut self, listener: impl Fn(ThemeMode) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switch mode. Ignored while a mode is forced.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.forced_mode.is_some() {
            tracing::debug!(?mode, "mode change ignored, mode is forced");
            return;
        }
        if self.switch_to(mode) {
            for listener in &self.listeners {
                listener(mode);
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Pin the mode regardless of device and app changes; `None` releases it
    pub fn force_mode(&mut self, mode: Option<ThemeMode>) {
        self.forced_mode = mode;
        if let Some(mode) = mode {
            self.switch_to(mode);
        }
    }

    /// Device color scheme changed
    pub fn sync_device_scheme(&mut self, device_scheme: ThemeMode) {
        if let Some(forced) = self.forced_mode {
            self.switch_to(forced);
        } else if self.initial_mode.is_none() {
            self.switch_to(device_scheme);
        }
    }

    /// Returns false when already in `mode`
    fn switch_to(&mut self, mode: ThemeMode) -> bool {
        if mode == self.mode {
            return false;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "theme mode changed");
        self.mode = mode;
        true
    }

    /// Resolve variant paints in the current mode
    pub fn variant_colors(
        &self,
        color: ColorName,
        variant: Variant,
        high_contrast: bool,
    ) -> Result<VariantColors> {
        resolve::variant_colors(&self.theme, color, self.mode, variant, high_contrast)
    }

    pub fn surface_colors(&self) -> Result<SurfaceColors> {
        resolve::surface_colors(&self.theme, self.mode)
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("accent_color", &self.theme.accent_color())
            .field("mode", &self.mode)
            .field("initial_mode", &self.initial_mode)
            .field("forced_mode", &self.forced_mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn context(initial: Option<ThemeMode>, device: ThemeMode) -> ThemeContext {
        ThemeContext::new(Arc::new(Theme::default()), initial, device)
    }

    #[test]
    fn test_follows_device_without_initial_mode() {
        let mut ctx = context(None, ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        ctx.sync_device_scheme(ThemeMode::Light);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_initial_mode_ignores_device() {
        let mut ctx = context(Some(ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Light);
        ctx.sync_device_scheme(ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_forced_mode_wins() {
        let mut ctx = context(None, ThemeMode::Light);
        ctx.force_mode(Some(ThemeMode::Dark));
        assert_eq!(ctx.mode(), ThemeMode::Dark);

        ctx.set_mode(ThemeMode::Light);
        ctx.sync_device_scheme(ThemeMode::Light);
        assert_eq!(ctx.mode(), ThemeMode::Dark);

        ctx.force_mode(None);
        ctx.toggle_mode();
        assert_eq!(ctx.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_listeners_notified_on_change_only() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut ctx = context(Some(ThemeMode::Light), ThemeMode::Light);
        let seen = Arc::clone(&calls);
        ctx.on_mode_change(move |mode| {
            assert_eq!(mode, ThemeMode::Dark);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        ctx.set_mode(ThemeMode::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        ctx.toggle_mode();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_device_and_forced_changes_do_not_notify() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut ctx = context(None, ThemeMode::Light);
        let seen = Arc::clone(&calls);
        ctx.on_mode_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        ctx.sync_device_scheme(ThemeMode::Dark);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        ctx.force_mode(Some(ThemeMode::Light));
        assert_eq!(ctx.mode(), ThemeMode::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        ctx.force_mode(None);
        ctx.set_mode(ThemeMode::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolves_in_current_mode() {
        let mut ctx = context(Some(ThemeMode::Light), ThemeMode::Light);
        let light = ctx.variant_colors(ColorName::Blue, Variant::Soft, true).unwrap();
        ctx.set_mode(ThemeMode::Dark);
        let dark = ctx.variant_colors(ColorName::Blue, Variant::Soft, true).unwrap();
        assert_ne!(light.text, dark.text);
        let gray = crate::themes::radix::GRAY;
        assert_eq!(ctx.surface_colors().unwrap().panel, gray.dark.at(2));
    }
}
