//! Top-level view state machine.
//!
//! ```text
//! Loading ──(delay elapsed, hero eligible)──▶ Hero ──(enter)──▶ Entered
//!    │                                                            ▲
//!    └──────────(delay elapsed, hero not eligible)────────────────┘
//! ```
//!
//! The controller does not own a timer. The host schedules one for
//! [`ViewController::loading_delay`] and reports it with
//! [`ViewController::on_loading_elapsed`]. After
//! [`ViewController::teardown`] every event is ignored.

use std::time::Duration;

use crate::content::ContentRegistry;
use crate::visibility::should_render;

/// Which top-level screen is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// Loading screen, shown from start-up until the delay elapses.
    #[default]
    Loading,
    /// Hero landing screen, waiting for the visitor to enter.
    Hero,
    /// Main portfolio body. Terminal for the session.
    Entered,
}

impl ViewState {
    pub fn is_entered(self) -> bool {
        self == Self::Entered
    }
}

/// Drives [`ViewState`] transitions for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    state: ViewState,
    hero_eligible: bool,
    loading_delay: Duration,
    torn_down: bool,
}

impl ViewController {
    /// Creates a controller in [`ViewState::Loading`].
    pub fn new(hero_eligible: bool, loading_delay: Duration) -> Self {
        Self {
            state: ViewState::Loading,
            hero_eligible,
            loading_delay,
            torn_down: false,
        }
    }

    /// Controller configured from the content registry.
    pub fn from_registry(registry: &ContentRegistry) -> Self {
        Self::new(
            should_render(registry.hero.as_ref()),
            registry.site.loading_delay(),
        )
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    #[cfg(test)]
    fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The loading timer fired.
    ///
    /// Moves to `Hero`, or straight to `Entered` when the hero is not
    /// eligible. Returns the new state, or `None` when nothing changed
    /// (already past loading, or torn down).
    pub fn on_loading_elapsed(&mut self) -> Option<ViewState> {
        if self.torn_down || self.state != ViewState::Loading {
            return None;
        }

        self.state = if self.hero_eligible {
            ViewState::Hero
        } else {
            ViewState::Entered
        };
        tracing::debug!(state = ?self.state, "loading finished");
        Some(self.state)
    }

    /// Poll with the time since the controller was created.
    #[cfg(test)]
    fn advance(&mut self, elapsed: Duration) -> Option<ViewState> {
        if elapsed < self.loading_delay {
            return None;
        }
        self.on_loading_elapsed()
    }

    /// The visitor activated the enter button.
    ///
    /// Only valid from `Hero`; returns `None` otherwise.
    pub fn enter(&mut self) -> Option<ViewState> {
        if self.torn_down || self.state != ViewState::Hero {
            tracing::warn!(state = ?self.state, "enter ignored");
            return None;
        }

        self.state = ViewState::Entered;
        tracing::debug!("portfolio entered");
        Some(self.state)
    }

    /// The owning view is going away; pending and future events are dropped.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2500);

    #[test]
    fn test_starts_loading() {
        let controller = ViewController::new(true, DELAY);
        assert_eq!(controller.state(), ViewState::Loading);
        assert_eq!(controller.loading_delay(), DELAY);
        assert_eq!(ViewState::default(), ViewState::Loading);
    }

    #[test]
    fn test_loading_to_hero_after_delay() {
        let mut controller = ViewController::new(true, DELAY);

        assert_eq!(controller.advance(Duration::from_millis(0)), None);
        assert_eq!(controller.advance(Duration::from_millis(2499)), None);
        assert_eq!(controller.state(), ViewState::Loading);

        assert_eq!(controller.advance(DELAY), Some(ViewState::Hero));
        assert_eq!(controller.state(), ViewState::Hero);
    }

    #[test]
    fn test_loading_transition_fires_once() {
        let mut controller = ViewController::new(true, DELAY);
        assert_eq!(controller.on_loading_elapsed(), Some(ViewState::Hero));
        assert_eq!(controller.on_loading_elapsed(), None);
        assert_eq!(controller.advance(Duration::from_secs(60)), None);
        assert_eq!(controller.state(), ViewState::Hero);
    }

    #[test]
    fn test_teardown_cancels_pending_transition() {
        let mut controller = ViewController::new(true, DELAY);
        controller.teardown();
        assert!(controller.is_torn_down());
        assert_eq!(controller.on_loading_elapsed(), None);
        assert_eq!(controller.advance(DELAY), None);
        assert_eq!(controller.state(), ViewState::Loading);
    }

    #[test]
    fn test_enter_requires_hero() {
        let mut controller = ViewController::new(true, DELAY);
        assert_eq!(controller.enter(), None);
        assert_eq!(controller.state(), ViewState::Loading);

        controller.on_loading_elapsed();
        assert_eq!(controller.enter(), Some(ViewState::Entered));
        assert!(controller.state().is_entered());
    }

    #[test]
    fn test_hero_waits_for_enter() {
        let mut controller = ViewController::new(true, DELAY);
        controller.on_loading_elapsed();
        assert_eq!(controller.advance(Duration::from_secs(3600)), None);
        assert_eq!(controller.state(), ViewState::Hero);
    }

    #[test]
    fn test_entered_is_terminal() {
        let mut controller = ViewController::new(true, DELAY);
        controller.on_loading_elapsed();
        controller.enter();

        assert_eq!(controller.enter(), None);
        assert_eq!(controller.on_loading_elapsed(), None);
        controller.teardown();
        assert_eq!(controller.state(), ViewState::Entered);
    }

    #[test]
    fn test_ineligible_hero_skips_to_entered() {
        let mut controller = ViewController::new(false, DELAY);
        assert_eq!(controller.on_loading_elapsed(), Some(ViewState::Entered));
        assert_eq!(controller.enter(), None);
    }

    #[test]
    fn test_from_registry() {
        let registry = ContentRegistry::from_toml_str(
            r#"
[site]
loading_delay_ms = 10

[hero]
is_required = true
"#,
        )
        .unwrap();
        let mut controller = ViewController::from_registry(&registry);
        assert_eq!(controller.loading_delay(), Duration::from_millis(10));
        assert_eq!(controller.on_loading_elapsed(), Some(ViewState::Hero));

        let mut no_hero = ViewController::from_registry(&ContentRegistry::default());
        assert_eq!(no_hero.on_loading_elapsed(), Some(ViewState::Entered));
    }
}
