//! Single on-screen notification with a self-cancelling hide timer.
//!
//! There is at most one toast element. Showing a new message restyles the
//! same element and replaces the pending hide timer, so an older timer can
//! never hide a newer message.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::styles::{self, escape_html};

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
        }
    }

    pub fn border_color(&self) -> &'static str {
        match self {
            Severity::Success => styles::SUCCESS_BORDER,
            Severity::Error => styles::ERROR_BORDER,
            Severity::Warning => styles::WARNING_BORDER,
        }
    }
}

/// Rendered state of the toast element
#[derive(Debug, Clone, PartialEq)]
pub struct ToastElement {
    pub visible: bool,
    pub severity: Severity,
    pub message: String,
    pub border_color: &'static str,
    pub inner_html: String,
}

impl ToastElement {
    fn new() -> Self {
        Self {
            visible: false,
            severity: Severity::default(),
            message: String::new(),
            border_color: Severity::default().border_color(),
            inner_html: String::new(),
        }
    }

    fn restyle(&mut self, message: &str, severity: Severity) {
        self.visible = true;
        self.severity = severity;
        self.message = message.to_string();
        self.border_color = severity.border_color();
        self.inner_html = format!(
            "<span>{}</span><span>{}</span>",
            severity.icon(),
            escape_html(message)
        );
    }
}

#[derive(Default)]
struct ToastState {
    element: Option<ToastElement>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// Counts live hide timers; released when the timer task ends or is aborted
struct TimerGuard(Arc<AtomicUsize>);

impl TimerGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handle to the page's toast. Clones share the same element.
#[derive(Clone)]
pub struct Toaster {
    state: Arc<Mutex<ToastState>>,
    live_timers: Arc<AtomicUsize>,
    duration: Duration,
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_duration(TOAST_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState::default())),
            live_timers: Arc::new(AtomicUsize::new(0)),
            duration,
        }
    }

    /// Show `message`, creating the element on first use.
    /// Outside a Tokio runtime the toast is shown without a hide timer.
    pub fn show(&self, message: &str, severity: Severity) {
        let mut state = lock(&self.state);
        state
            .element
            .get_or_insert_with(ToastElement::new)
            .restyle(message, severity);

        state.generation += 1;
        let generation = state.generation;
        if let Some(previous) = state.timer.take() {
            previous.abort();
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "No runtime for the toast hide timer, toast stays up");
                return;
            }
        };
        let shared = Arc::clone(&self.state);
        let guard = TimerGuard::new(Arc::clone(&self.live_timers));
        let duration = self.duration;
        state.timer = Some(handle.spawn(async move {
            let _guard = guard;
            tokio::time::sleep(duration).await;
            let mut state = lock(&shared);
            if state.generation == generation {
                if let Some(element) = state.element.as_mut() {
                    element.visible = false;
                }
                debug!(generation, "Toast hidden");
            }
        }));
    }

    pub fn success(&self, message: &str) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: &str) {
        self.show(message, Severity::Error);
    }

    pub fn warning(&self, message: &str) {
        self.show(message, Severity::Warning);
    }

    /// Snapshot of the element, `None` before the first toast
    pub fn current(&self) -> Option<ToastElement> {
        lock(&self.state).element.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.current().map(|e| e.visible).unwrap_or(false)
    }

    /// Hide timers still pending
    pub fn active_timers(&self) -> usize {
        self.live_timers.load(Ordering::SeqCst)
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

fn lock(state: &Mutex<ToastState>) -> MutexGuard<'_, ToastState> {
    // The state stays consistent even if a holder panicked
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
