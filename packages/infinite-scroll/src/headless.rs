use dioxus_infinite_scroll_core::{
    Axis, ScrollError, ScrollGeometry, ScrollHost, ScrollResult, ScrollSource,
};

/// The host used where there is no DOM to scroll (server rendering, desktop tests, native builds
/// without the `web` feature).
///
/// It reports itself unavailable, so every scroller created on it is inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadlessHost;

impl ScrollHost for HeadlessHost {
    type Element = ();
    type Listener = ();

    fn is_available(&self) -> bool {
        false
    }

    fn query_selector(&self, _selector: &str, _root: Option<&()>) -> Option<()> {
        None
    }

    fn scrollable_ancestor(&self, _element: &(), _axis: Axis) -> Option<()> {
        None
    }

    fn geometry(&self, _source: &ScrollSource<()>, _axis: Axis) -> ScrollGeometry {
        ScrollGeometry::default()
    }

    fn listen(&self, _source: &ScrollSource<()>, _on_scroll: Box<dyn FnMut()>) -> ScrollResult<()> {
        Err(ScrollError::HostUnavailable)
    }
}
