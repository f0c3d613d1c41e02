//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use folio_core::Launcher;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Open an external URI (new tab, mail client, or messaging app).
///
/// Returns `true` if the browser accepted the request. A blocked pop-up is
/// not an error here; it only shows up in the log.
pub fn open_external(uri: &str) -> bool {
    match window().map(|w| w.open_with_url(uri)) {
        Some(Ok(_)) => true,
        Some(Err(e)) => {
            tracing::warn!(error = ?e, "window.open failed");
            false
        }
        None => false,
    }
}

/// [`Launcher`] backed by `window.open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn launch(&mut self, uri: &str) {
        open_external(uri);
    }
}

/// How far the page has been scrolled, from 0.0 (top) to 1.0 (bottom).
pub fn scroll_progress() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };

    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    progress_ratio(offset, f64::from(root.scroll_height()), viewport)
}

/// Scroll offset as a fraction of the scrollable distance, clamped to 0..=1.
pub fn progress_ratio(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Jump to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio() {
        assert_eq!(progress_ratio(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(progress_ratio(1000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_ratio_clamps() {
        assert_eq!(progress_ratio(-20.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(1500.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_ratio_short_page() {
        assert_eq!(progress_ratio(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(10.0, 1000.0, 1000.0), 0.0);
    }
}
