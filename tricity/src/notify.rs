//! Toast notifications.
//!
//! A single [`Toaster`] owns the toast element's lifecycle: at most one toast
//! is visible, a replacement waits for the previous toast's hide transition,
//! and each toast dismisses itself after a fixed delay.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// How long a toast stays up.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Longest wait for a hide transition before the next toast goes up anyway.
///
/// `transitionend` never fires when the transition is interrupted or the
/// stylesheet has none.
pub const HIDE_TRANSITION_TIMEOUT: Duration = Duration::from_secs(1);

/// Visual style of a toast, used as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Full class attribute for a toast of this kind.
    pub fn class_name(self) -> String {
        format!("toast {}", self.as_str())
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// The element a toast is rendered into.
pub trait ToastSurface {
    /// Whether a toast is currently on screen (not hidden).
    fn is_showing(&self) -> bool;
    /// Replace the content and style, then reveal.
    fn present(&self, toast: &Toast);
    /// Start hiding; the hide transition may take a while.
    fn hide(&self);
    /// Run `callback` once the hide transition started by [`hide`](Self::hide) finishes.
    fn after_hidden(&self, callback: Box<dyn FnOnce()>);
}

/// A page may lack toast markup; notifications are then dropped.
impl<S: ToastSurface> ToastSurface for Option<S> {
    fn is_showing(&self) -> bool {
        self.as_ref().is_some_and(ToastSurface::is_showing)
    }

    fn present(&self, toast: &Toast) {
        if let Some(surface) = self {
            surface.present(toast);
        }
    }

    fn hide(&self) {
        if let Some(surface) = self {
            surface.hide();
        }
    }

    fn after_hidden(&self, callback: Box<dyn FnOnce()>) {
        match self {
            Some(surface) => surface.after_hidden(callback),
            None => callback(),
        }
    }
}

/// One-shot timers on the UI event loop.
pub trait Timers {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

struct ToasterState<H> {
    dismiss: Option<H>,
    queued: Option<Toast>,
    /// Generation of the swap waiting on a hide transition.
    pending_swap: Option<u64>,
    swap_fallback: Option<H>,
    generation: u64,
}

struct ToasterInner<S: ToastSurface, T: Timers> {
    surface: S,
    timers: T,
    dismiss_after: Duration,
    state: RefCell<ToasterState<T::Handle>>,
}

/// Notification manager for the page's single toast element.
///
/// Clones share the same toast and timer.
pub struct Toaster<S: ToastSurface, T: Timers> {
    inner: Rc<ToasterInner<S, T>>,
}

impl<S: ToastSurface, T: Timers> Clone for Toaster<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: ToastSurface, T: Timers> fmt::Debug for Toaster<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Toaster")
            .field("dismiss_after", &self.inner.dismiss_after)
            .field("dismiss_pending", &state.dismiss.is_some())
            .field("queued", &state.queued)
            .field("pending_swap", &state.pending_swap)
            .finish()
    }
}

impl<S: ToastSurface + 'static, T: Timers + 'static> Toaster<S, T> {
    pub fn new(surface: S, timers: T, dismiss_after: Duration) -> Self {
        Self {
            inner: Rc::new(ToasterInner {
                surface,
                timers,
                dismiss_after,
                state: RefCell::new(ToasterState {
                    dismiss: None,
                    queued: None,
                    pending_swap: None,
                    swap_fallback: None,
                    generation: 0,
                }),
            }),
        }
    }

    /// Show `message`, pre-empting whatever toast is on screen.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast {
            message: message.into(),
            kind,
        };

        let swap = {
            let mut state = self.inner.state.borrow_mut();

            if let Some(handle) = state.dismiss.take() {
                self.inner.timers.cancel(handle);
            }

            state.queued = Some(toast);

            if state.pending_swap.is_some() {
                // The pending swap will pick up the newest toast.
                return;
            }

            if self.inner.surface.is_showing() {
                state.generation += 1;
                state.pending_swap = Some(state.generation);
                state.pending_swap
            } else {
                None
            }
        };

        match swap {
            Some(generation) => self.swap_after_hide(generation),
            None => Self::display_queued(&self.inner),
        }
    }

    /// Hide the current toast; the queued one goes up when the transition
    /// ends or after [`HIDE_TRANSITION_TIMEOUT`], whichever comes first.
    fn swap_after_hide(&self, generation: u64) {
        let inner = &self.inner;
        inner.surface.hide();

        let weak = Rc::downgrade(inner);
        let fallback = inner.timers.schedule(
            HIDE_TRANSITION_TIMEOUT,
            Box::new(move || Self::finish_swap(&weak, generation)),
        );
        inner.state.borrow_mut().swap_fallback = Some(fallback);

        let weak = Rc::downgrade(inner);
        inner
            .surface
            .after_hidden(Box::new(move || Self::finish_swap(&weak, generation)));
    }

    fn finish_swap(weak: &Weak<ToasterInner<S, T>>, generation: u64) {
        let Some(inner) = weak.upgrade() else {
            return;
        };

        let fallback = {
            let mut state = inner.state.borrow_mut();
            if state.pending_swap != Some(generation) {
                return;
            }
            state.pending_swap = None;
            state.swap_fallback.take()
        };

        if let Some(handle) = fallback {
            inner.timers.cancel(handle);
        }

        Self::display_queued(&inner);
    }

    fn display_queued(inner: &Rc<ToasterInner<S, T>>) {
        let Some(toast) = inner.state.borrow_mut().queued.take() else {
            return;
        };

        inner.surface.present(&toast);

        let weak = Rc::downgrade(inner);
        let handle = inner.timers.schedule(
            inner.dismiss_after,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.state.borrow_mut().dismiss = None;
                    inner.surface.hide();
                }
            }),
        );

        inner.state.borrow_mut().dismiss = Some(handle);
    }
}
