//! Responsive breakpoint context.
//!
//! Listens for `resize` on the window and republishes the breakpoint only when
//! the viewport crosses the threshold, so unrelated resizes don't re-render.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Smallest viewport width (CSS px) rendered with the medium layout
pub const MEDIUM_MIN_WIDTH: f64 = 600.0;

/// Assumed viewport width when there is no window to measure
#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

pub fn is_medium(width: f64) -> bool {
    width >= MEDIUM_MIN_WIDTH
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Small,
    Medium,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if is_medium(width) {
            Breakpoint::Medium
        } else {
            Breakpoint::Small
        }
    }

    pub fn is_medium(&self) -> bool {
        matches!(self, Breakpoint::Medium)
    }

    /// CSS state token used on the app container
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Small => "small",
            Breakpoint::Medium => "medium",
        }
    }
}

/// Remembers the last breakpoint and reports only transitions
#[derive(Debug)]
pub struct BreakpointDetector {
    last: Breakpoint,
}

impl BreakpointDetector {
    pub fn seeded(initial: Breakpoint) -> Self {
        Self { last: initial }
    }

    /// Feed a new viewport width. Returns the breakpoint if it changed.
    pub fn observe(&mut self, width: f64) -> Option<Breakpoint> {
        let next = Breakpoint::from_width(width);
        if self.last == next {
            return None;
        }
        self.last = next;
        Some(next)
    }
}

/// Breakpoint state shared via context
#[derive(Clone, Copy)]
pub struct BreakpointContext {
    current: Signal<Breakpoint>,
}

impl BreakpointContext {
    pub fn get(&self) -> Breakpoint {
        (self.current)()
    }

    pub fn is_medium(&self) -> bool {
        self.get().is_medium()
    }
}

#[cfg(target_arch = "wasm32")]
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MEDIUM_MIN_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_width() -> f64 {
    FALLBACK_VIEWPORT_WIDTH
}

/// RAII guard removing the resize listener on drop
#[cfg(target_arch = "wasm32")]
struct ResizeGuard {
    window: web_sys::Window,
    onresize: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.onresize.as_ref().unchecked_ref());
    }
}

/// Initialize breakpoint context provider - call once at app root
pub fn use_breakpoint_provider() -> BreakpointContext {
    let current = use_signal(|| Breakpoint::from_width(viewport_width()));

    let ctx = BreakpointContext { current };
    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<ResizeGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            let mut detector = BreakpointDetector::seeded(*current.peek());
            let mut current = current;
            let onresize = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(next) = detector.observe(viewport_width()) {
                    tracing::debug!(breakpoint = next.as_str(), "breakpoint changed");
                    current.set(next);
                }
            }) as Box<dyn FnMut(_)>);

            if let Err(e) = window
                .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to listen for resize: {:?}", e);
                return;
            }

            *guard.borrow_mut() = Some(ResizeGuard {
                window,
                onresize,
            });
        });
    }

    ctx
}

/// Get breakpoint context - use in any component
pub fn use_breakpoint() -> BreakpointContext {
    use_context::<BreakpointContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_at_600() {
        assert!(!is_medium(0.0));
        assert!(!is_medium(599.0));
        assert!(!is_medium(599.99));
        assert!(is_medium(600.0));
        assert!(is_medium(1920.0));
    }

    #[test]
    fn breakpoint_agrees_with_predicate_across_widths() {
        for w in (0..2000).step_by(7) {
            let width = w as f64;
            assert_eq!(Breakpoint::from_width(width).is_medium(), width >= 600.0);
        }
    }

    #[test]
    fn detector_reports_only_transitions() {
        let mut detector = BreakpointDetector::seeded(Breakpoint::Medium);

        assert_eq!(detector.observe(320.0), Some(Breakpoint::Small));
        assert_eq!(detector.observe(480.0), None);
        assert_eq!(detector.observe(600.0), Some(Breakpoint::Medium));
        assert_eq!(detector.observe(1200.0), None);
        assert_eq!(detector.observe(599.0), Some(Breakpoint::Small));
        assert_eq!(detector.observe(10.0), None);
    }

    #[test]
    fn seeded_detector_skips_initial_value() {
        let mut detector = BreakpointDetector::seeded(Breakpoint::Medium);
        assert_eq!(detector.observe(800.0), None);
    }
}
