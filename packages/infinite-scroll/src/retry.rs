use std::{cell::RefCell, rc::Rc};

use crate::{PlatformHost, ScrollBinding};

/// Re-check the host element after each rendered batch, debounced by `debounce_ms`, and request
/// another batch while it still does not overflow.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub(crate) fn use_load_until_scrollable(
    binding: &Rc<RefCell<ScrollBinding<PlatformHost>>>,
    all_items_loaded: Option<bool>,
    debounce_ms: u64,
) {
    use dioxus::prelude::use_hook;
    use gloo_timers::callback::Timeout;

    // replacing the pending timeout cancels it
    let pending = use_hook(|| Rc::new(RefCell::new(None::<Timeout>)));

    let Some(all_items_loaded) = all_items_loaded else {
        return;
    };

    let binding = binding.clone();
    let millis = u32::try_from(debounce_ms).unwrap_or(u32::MAX);
    let timeout = Timeout::new(millis, move || {
        binding.borrow().load_until_scrollable(all_items_loaded);
    });
    pending.borrow_mut().replace(timeout);
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub(crate) fn use_load_until_scrollable(
    binding: &Rc<RefCell<ScrollBinding<PlatformHost>>>,
    all_items_loaded: Option<bool>,
    _debounce_ms: u64,
) {
    if let Some(all_items_loaded) = all_items_loaded {
        binding.borrow().load_until_scrollable(all_items_loaded);
    }
}
