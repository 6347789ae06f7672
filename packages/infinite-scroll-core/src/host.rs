use web_time::Instant;

use crate::{Axis, ScrollGeometry, ScrollResult, ScrollSource};

/// The environment a scroller runs in.
///
/// The browser implementation lives in `dioxus-infinite-scroll`. Tests substitute a double that
/// returns programmable geometry and fires scroll notifications by hand.
pub trait ScrollHost {
    /// A handle to an element of the host document.
    type Element: Clone + 'static;

    /// A registered scroll listener. Dropping it must unregister the callback.
    type Listener;

    /// Whether there is anything to scroll at all. Outside a browser this is false and every
    /// scroller created on this host is inert.
    fn is_available(&self) -> bool;

    /// Find an element by CSS selector, under `root`, or in the whole document when `root` is
    /// `None`.
    fn query_selector(&self, selector: &str, root: Option<&Self::Element>) -> Option<Self::Element>;

    /// The nearest ancestor of `element` that scrolls along `axis`.
    fn scrollable_ancestor(&self, element: &Self::Element, axis: Axis) -> Option<Self::Element>;

    /// Measure `source` along `axis`. Must not mutate the source.
    fn geometry(&self, source: &ScrollSource<Self::Element>, axis: Axis) -> ScrollGeometry;

    /// Call `on_scroll` for every scroll notification `source` delivers.
    fn listen(
        &self,
        source: &ScrollSource<Self::Element>,
        on_scroll: Box<dyn FnMut()>,
    ) -> ScrollResult<Self::Listener>;

    /// The clock used for throttling.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
