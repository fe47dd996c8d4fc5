//! Modal lifecycle and notifications.
//!
//! The pipeline never touches a DOM; it drives the [`UiSurface`] trait. A
//! browser layer implements the trait over the real page; this crate ships
//! [`HeadlessSurface`], an in-memory implementation with the same
//! semantics, used as the test double and for server-side rendering of
//! the modal state.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// How long a notification stays visible before it is removed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Visual flavor of a notification; doubles as the class name on the
/// rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A transient message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// A success message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    /// An error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// The rendering surface the pipeline drives.
///
/// Methods take `&self`: the surface is ambient shared state (a page), and
/// pipeline continuations from different triggering events may write to it
/// interleaved.
pub trait UiSurface: Send + Sync {
    /// Make the modal visible with the given body markup and lock page
    /// scroll. Replaces any body already shown.
    fn show_modal(&self, body_html: &str);

    /// Hide the modal and release the scroll lock. Idempotent: closing
    /// always clears both, regardless of how many times the modal was
    /// shown.
    fn close_modal(&self);

    /// Put the modal body into its loading state.
    fn show_loading(&self);

    /// Clear the loading state. No-op when no indicator is present.
    fn hide_loading(&self);

    /// Show a transient notification. Concurrent notifications stack;
    /// each disappears on its own [`NOTIFICATION_TTL`].
    fn notify(&self, notification: Notification);

    /// Write the cart item count to every count display on the page.
    fn set_cart_count(&self, count: i64);
}

impl<T: UiSurface + ?Sized> UiSurface for Arc<T> {
    fn show_modal(&self, body_html: &str) {
        (**self).show_modal(body_html)
    }
    fn close_modal(&self) {
        (**self).close_modal()
    }
    fn show_loading(&self) {
        (**self).show_loading()
    }
    fn hide_loading(&self) {
        (**self).hide_loading()
    }
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
    fn set_cart_count(&self, count: i64) {
        (**self).set_cart_count(count)
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    modal_body: Option<String>,
    scroll_locked: bool,
    loading: bool,
    cart_count: Option<i64>,
    notices: Vec<(Notification, Instant)>,
}

/// In-memory [`UiSurface`].
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    state: Mutex<SurfaceState>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().expect("surface state poisoned")
    }

    /// Whether the modal is currently visible.
    pub fn modal_open(&self) -> bool {
        self.state().modal_body.is_some()
    }

    /// The modal body markup, when visible.
    pub fn modal_body(&self) -> Option<String> {
        self.state().modal_body.clone()
    }

    /// Whether page scroll is locked behind the modal.
    pub fn scroll_locked(&self) -> bool {
        self.state().scroll_locked
    }

    /// Whether the loading indicator is shown.
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// The last broadcast cart count, if any.
    pub fn cart_count(&self) -> Option<i64> {
        self.state().cart_count
    }

    /// Notifications still within their display window.
    pub fn active_notifications(&self) -> Vec<Notification> {
        let now = Instant::now();
        self.state()
            .notices
            .iter()
            .filter(|(_, shown_at)| now.duration_since(*shown_at) < NOTIFICATION_TTL)
            .map(|(notification, _)| notification.clone())
            .collect()
    }

    /// Every notification ever shown, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.state()
            .notices
            .iter()
            .map(|(notification, _)| notification.clone())
            .collect()
    }
}

impl UiSurface for HeadlessSurface {
    fn show_modal(&self, body_html: &str) {
        let mut state = self.state();
        state.modal_body = Some(body_html.to_string());
        state.scroll_locked = true;
    }

    fn close_modal(&self) {
        let mut state = self.state();
        state.modal_body = None;
        state.scroll_locked = false;
    }

    fn show_loading(&self) {
        self.state().loading = true;
    }

    fn hide_loading(&self) {
        self.state().loading = false;
    }

    fn notify(&self, notification: Notification) {
        self.state().notices.push((notification, Instant::now()));
    }

    fn set_cart_count(&self, count: i64) {
        self.state().cart_count = Some(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_close_pair_scroll_lock() {
        let surface = HeadlessSurface::new();
        surface.show_modal("<div></div>");
        assert!(surface.modal_open());
        assert!(surface.scroll_locked());

        surface.close_modal();
        assert!(!surface.modal_open());
        assert!(!surface.scroll_locked());
    }

    #[test]
    fn test_close_is_idempotent() {
        let surface = HeadlessSurface::new();
        surface.show_modal("<div></div>");
        surface.show_modal("<div></div>");
        surface.close_modal();
        surface.close_modal();
        assert!(!surface.modal_open());
        assert!(!surface.scroll_locked());
    }

    #[test]
    fn test_hide_loading_without_indicator_is_a_noop() {
        let surface = HeadlessSurface::new();
        surface.hide_loading();
        assert!(!surface.is_loading());

        surface.show_loading();
        assert!(surface.is_loading());
        surface.hide_loading();
        assert!(!surface.is_loading());
    }

    #[test]
    fn test_notifications_stack() {
        let surface = HeadlessSurface::new();
        surface.notify(Notification::error("Failed to add to cart"));
        surface.notify(Notification::success("Added to cart!"));

        let active = surface.active_notifications();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].kind, NotificationKind::Error);
        assert_eq!(active[1].message, "Added to cart!");
    }

    #[test]
    fn test_kind_maps_to_class_name() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }
}
