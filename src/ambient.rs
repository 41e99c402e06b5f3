//! Pointer and scroll input for the decorative widgets.
//!
//! Widgets never touch `window` themselves. The hooks here own the browser
//! listeners (added on mount, removed on unmount) and hand plain values to
//! the components, which turn them into styles.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent, Window};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Bounding box of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Client coordinates translated into this box.
    pub fn relative(&self, client_x: f64, client_y: f64) -> PointerPosition {
        PointerPosition {
            x: client_x - self.left,
            y: client_y - self.top,
        }
    }
}

/// Resolves a mouse event against the element behind `node`.
pub fn pointer_in(node: &NodeRef, event: &MouseEvent) -> Option<(Bounds, PointerPosition)> {
    let element = node.cast::<Element>()?;
    let bounds = Bounds::of(&element);
    let position = bounds.relative(f64::from(event.client_x()), f64::from(event.client_y()));
    Some((bounds, position))
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Vertical offset in px.
    pub offset: f64,
    /// Fraction of the scrollable range covered, in `[0, 1]`.
    pub progress: f64,
}

impl ScrollState {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let offset = offset.max(0.0);
        let range = scroll_height - viewport_height;
        let progress = if range > 0.0 {
            (offset / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { offset, progress }
    }

    pub fn header_is_opaque(&self) -> bool {
        self.offset > config::SCROLL_THRESHOLD_PX
    }
}

fn read_scroll(window: &Window) -> ScrollState {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    ScrollState::new(offset, scroll_height, viewport_height)
}

/// Current window scroll, updated on every `scroll` event.
#[hook]
pub fn use_window_scroll() -> ScrollState {
    let scroll = use_state_eq(ScrollState::default);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    scroll.set(read_scroll(&window));

                    let target = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        scroll.set(read_scroll(&target));
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scroll
}

/// Pointer position relative to `node`, tracked from window-level
/// `mousemove` so it keeps following outside the element.
#[hook]
pub fn use_window_pointer(node: NodeRef) -> PointerPosition {
    let pointer = use_state_eq(PointerPosition::default);

    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = window().map(|window| {
                    let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                        if let Some((_, position)) = pointer_in(&node, &e) {
                            pointer.set(position);
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);

                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            node,
        );
    }

    *pointer
}

/// Seed for the decorative scatter generators.
pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

/// Viewport width at mount time, 0 when there is no window.
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(|| {
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    });
    *width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_position_subtracts_the_box_origin() {
        let bounds = Bounds { left: 100.0, top: 40.0, width: 300.0, height: 200.0 };
        assert_eq!(bounds.relative(250.0, 140.0), PointerPosition { x: 150.0, y: 100.0 });
        assert_eq!(bounds.relative(50.0, 0.0), PointerPosition { x: -50.0, y: -40.0 });
    }

    #[test]
    fn header_turns_opaque_strictly_past_ten_pixels() {
        assert!(!ScrollState::new(0.0, 3000.0, 800.0).header_is_opaque());
        assert!(!ScrollState::new(10.0, 3000.0, 800.0).header_is_opaque());
        assert!(ScrollState::new(10.5, 3000.0, 800.0).header_is_opaque());
        assert!(ScrollState::new(400.0, 3000.0, 800.0).header_is_opaque());
    }

    #[test]
    fn scrolling_back_up_reverts_the_header() {
        let down = ScrollState::new(50.0, 3000.0, 800.0);
        let up = ScrollState::new(4.0, 3000.0, 800.0);
        assert!(down.header_is_opaque());
        assert!(!up.header_is_opaque());
    }

    #[test]
    fn progress_is_bounded() {
        assert_eq!(ScrollState::new(0.0, 2000.0, 1000.0).progress, 0.0);
        assert_eq!(ScrollState::new(500.0, 2000.0, 1000.0).progress, 0.5);
        assert_eq!(ScrollState::new(5000.0, 2000.0, 1000.0).progress, 1.0);
        assert_eq!(ScrollState::new(-20.0, 2000.0, 1000.0).offset, 0.0);
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        assert_eq!(ScrollState::new(0.0, 600.0, 800.0).progress, 0.0);
    }
}
