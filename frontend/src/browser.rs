use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, EventTarget, ScrollBehavior, ScrollToOptions};

/// Event listener that stays registered until dropped.
///
/// Effects keep these in their teardown closure so every listener added on
/// mount is removed on unmount.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(_) => {
                log::warn!("could not register {} listener", event);
                None
            }
        }
    }

    pub fn on_window<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let target: &EventTarget = window.as_ref();
        Self::new(target, event, callback)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Pending `requestAnimationFrame` callback, cancelled on drop.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request<F>(callback: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        }) as Box<dyn FnMut()>);
        let id = window()?
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            id,
            _callback: closure,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

fn scroll_options(top: Option<f64>, left: Option<f64>, smooth: bool) -> ScrollToOptions {
    let opts = ScrollToOptions::new();
    if let Some(top) = top {
        opts.set_top(top);
    }
    if let Some(left) = left {
        opts.set_left(left);
    }
    opts.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    opts
}

pub fn scroll_window_to(top: f64, smooth: bool) {
    if let Some(window) = window() {
        window.scroll_to_with_scroll_to_options(&scroll_options(Some(top), None, smooth));
    }
}

pub fn scroll_element_to(element: &Element, left: f64, smooth: bool) {
    element.scroll_to_with_scroll_to_options(&scroll_options(None, Some(left), smooth));
}

/// Scrolls to a section, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str, offset: f64) -> bool {
    match element_by_id(id) {
        Some(el) => {
            let top = el.get_bounding_client_rect().top() + scroll_y() - offset;
            scroll_window_to(top, !prefers_reduced_motion());
            true
        }
        None => false,
    }
}

/// True once any part of the element, shrunk by `margin`, is in the viewport.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

#[cfg(test)]
mod tests {
    use super::in_view;

    #[test]
    fn in_view_respects_margin() {
        assert!(in_view(100.0, 300.0, 800.0, 50.0));
        assert!(!in_view(760.0, 900.0, 800.0, 50.0));
        assert!(!in_view(-300.0, 40.0, 800.0, 50.0));
        assert!(in_view(-300.0, 60.0, 800.0, 50.0));
    }
}
