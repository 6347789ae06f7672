//! Keep loading until the content overflows its container.
//!
//! A list that starts out shorter than its container never scrolls, so the scroller never fires.
//! After each batch is rendered the caller reports whether everything is loaded, and (after a
//! debounce owned by the caller) this stage decides whether to ask for another batch.

use crate::{ScrollAction, ScrollGeometry};

/// A synthetic `Down` action, or `None` when nothing more should be requested.
///
/// Nothing is requested once all items are loaded or the content already overflows.
pub fn load_more(all_items_loaded: bool, geometry: ScrollGeometry) -> Option<ScrollAction> {
    if all_items_loaded || geometry.overflows() {
        return None;
    }

    Some(ScrollAction::down(None))
}
