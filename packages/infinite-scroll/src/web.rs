//! The browser host, built on `web-sys`.

use dioxus_infinite_scroll_core::{
    Axis, ScrollError, ScrollGeometry, ScrollHost, ScrollResult, ScrollSource,
};
use gloo_events::EventListener;
use web_sys::{Document, Element, EventTarget, Window};

/// Reads scroll geometry from the live DOM and listens for `scroll` events.
///
/// Listeners are registered passive, the page is never scrolled programmatically.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Option<Window>,
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WebHost {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    fn document(&self) -> Option<Document> {
        self.window.as_ref()?.document()
    }

    fn window_geometry(&self, axis: Axis) -> ScrollGeometry {
        let Some(window) = &self.window else {
            return ScrollGeometry::default();
        };
        let Some(root) = self.document().and_then(|document| document.document_element()) else {
            return ScrollGeometry::default();
        };

        match axis {
            Axis::Vertical => ScrollGeometry::new(
                window.scroll_y().unwrap_or_default(),
                js_number(window.inner_height()),
                root.scroll_height() as f64,
            ),
            Axis::Horizontal => ScrollGeometry::new(
                window.scroll_x().unwrap_or_default(),
                js_number(window.inner_width()),
                root.scroll_width() as f64,
            ),
        }
    }
}

fn js_number(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
}

fn element_geometry(element: &Element, axis: Axis) -> ScrollGeometry {
    match axis {
        Axis::Vertical => ScrollGeometry::new(
            element.scroll_top() as f64,
            element.client_height() as f64,
            element.scroll_height() as f64,
        ),
        Axis::Horizontal => ScrollGeometry::new(
            element.scroll_left() as f64,
            element.client_width() as f64,
            element.scroll_width() as f64,
        ),
    }
}

/// Whether `element` is a scroll container along `axis` and has something to scroll.
fn scrolls(window: &Window, element: &Element, axis: Axis) -> bool {
    let property = match axis {
        Axis::Vertical => "overflow-y",
        Axis::Horizontal => "overflow-x",
    };

    let overflow = window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default();

    matches!(overflow.as_str(), "auto" | "scroll" | "overlay")
        && element_geometry(element, axis).overflows()
}

impl ScrollHost for WebHost {
    type Element = Element;
    type Listener = EventListener;

    fn is_available(&self) -> bool {
        self.document()
            .and_then(|document| document.document_element())
            .is_some()
    }

    fn query_selector(&self, selector: &str, root: Option<&Element>) -> Option<Element> {
        let found = match root {
            Some(root) => root.query_selector(selector),
            None => self.document()?.query_selector(selector),
        };

        found.ok().flatten()
    }

    fn scrollable_ancestor(&self, element: &Element, axis: Axis) -> Option<Element> {
        let window = self.window.as_ref()?;
        let mut current = element.parent_element();

        while let Some(candidate) = current {
            if scrolls(window, &candidate, axis) {
                return Some(candidate);
            }
            current = candidate.parent_element();
        }

        None
    }

    fn geometry(&self, source: &ScrollSource<Element>, axis: Axis) -> ScrollGeometry {
        match source {
            ScrollSource::Window => self.window_geometry(axis),
            ScrollSource::Container(element) => element_geometry(element, axis),
        }
    }

    fn listen(
        &self,
        source: &ScrollSource<Element>,
        mut on_scroll: Box<dyn FnMut()>,
    ) -> ScrollResult<EventListener> {
        let target: &EventTarget = match source {
            ScrollSource::Window => self
                .window
                .as_ref()
                .ok_or(ScrollError::HostUnavailable)?
                .as_ref(),
            ScrollSource::Container(element) => element.as_ref(),
        };

        Ok(EventListener::new(target, "scroll", move |_| on_scroll()))
    }
}
