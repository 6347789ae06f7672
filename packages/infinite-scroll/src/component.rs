use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_infinite_scroll_core::{
    ContainerRef, ScrollAction, ScrollDirection, ScrollPayload, ScrollerOptions,
};
use futures_channel::mpsc::unbounded;
use futures_util::StreamExt;

use crate::{
    retry::use_load_until_scrollable, BoundAction, HostElement, PlatformHost, ScrollBinding,
};

/// Properties of [`InfiniteScroll`].
///
/// Distances are measured in viewports: with the default `distance` of 2, `onscrolled` fires once
/// the bottom of the content is two viewport heights away or closer.
#[derive(Props, Clone, PartialEq)]
pub struct InfiniteScrollProps {
    /// How close to the trailing edge, in viewports, before `onscrolled` fires.
    #[props(default = 2.0)]
    pub distance: f64,

    /// How close to the leading edge, in viewports, before `onscrolled_up` fires.
    #[props(default = 1.5)]
    pub up_distance: f64,

    /// Minimum milliseconds between two evaluated scroll events.
    #[props(default = 150)]
    pub throttle: u64,

    #[props(default)]
    pub disabled: bool,

    /// CSS selector of the container to observe instead of the window.
    pub container: Option<String>,

    /// An element to observe instead of the window. Takes precedence over `container`.
    ///
    /// Obtain one from an `onmounted` event with [`mounted_element`](crate::mounted_element).
    pub container_element: Option<HostElement>,

    /// Observe the window. Set to false to observe this element (or `container`).
    #[props(default = true)]
    pub scroll_window: bool,

    /// Check once right after mounting, without waiting for a scroll.
    #[props(default)]
    pub immediate_check: bool,

    #[props(default)]
    pub horizontal: bool,

    /// Fire `onscrolled` on every accepted scroll event, regardless of distance.
    #[props(default)]
    pub always_callback: bool,

    /// Look `container` up from the document, and without a container fall back to the nearest
    /// scrolling ancestor.
    #[props(default)]
    pub from_root: bool,

    /// Set after each rendered batch to keep loading until the content overflows. The value is
    /// whether everything has been loaded.
    pub load_until_scrollable: Option<bool>,

    pub onscrolled: Option<EventHandler<Option<ScrollPayload>>>,

    pub onscrolled_up: Option<EventHandler<Option<ScrollPayload>>>,

    pub class: Option<String>,

    pub children: Element,
}

impl InfiniteScrollProps {
    /// The scroller options these props describe, without the host element.
    pub fn options<E>(&self) -> ScrollerOptions<E> {
        let mut options = ScrollerOptions::default();
        options
            .down_distance(self.distance)
            .up_distance(self.up_distance)
            .throttle(self.throttle)
            .disable(self.disabled)
            .scroll_window(self.scroll_window)
            .immediate_check(self.immediate_check)
            .horizontal(self.horizontal)
            .always_callback(self.always_callback)
            .from_root(self.from_root);

        if let Some(selector) = &self.container {
            options.scroll_container(ContainerRef::Selector(selector.clone()));
        }

        options
    }

    /// [`InfiniteScrollProps::options`] with `container_element` applied.
    pub fn host_options(&self) -> ScrollerOptions<HostElement> {
        let mut options = self.options();
        if let Some(element) = &self.container_element {
            options.scroll_container(ContainerRef::Element(element.clone()));
        }
        options
    }
}

#[derive(Default)]
struct Handlers {
    onscrolled: Option<EventHandler<Option<ScrollPayload>>>,
    onscrolled_up: Option<EventHandler<Option<ScrollPayload>>>,
}

impl Handlers {
    fn dispatch(&self, action: ScrollAction) {
        let handler = match action.direction {
            ScrollDirection::Down => self.onscrolled,
            ScrollDirection::Up => self.onscrolled_up,
        };

        if let Some(handler) = handler {
            handler.call(action.payload);
        }
    }
}

/// Fires `onscrolled` when the content nears its end and `onscrolled_up` when it nears its start.
///
/// ```rust, ignore
/// use dioxus::prelude::*;
/// use dioxus_infinite_scroll::InfiniteScroll;
///
/// fn Feed() -> Element {
///     let mut items = use_signal(|| (0..30).collect::<Vec<_>>());
///
///     rsx! {
///         InfiniteScroll {
///             onscrolled: move |_| {
///                 let next = items.len();
///                 items.extend(next..next + 30);
///             },
///             for item in items.iter() {
///                 p { key: "{item}", "item {item}" }
///             }
///         }
///     }
/// }
/// ```
#[allow(non_snake_case)]
pub fn InfiniteScroll(props: InfiniteScrollProps) -> Element {
    let handlers = use_hook(|| Rc::new(RefCell::new(Handlers::default())));
    {
        let mut handlers = handlers.borrow_mut();
        handlers.onscrolled = props.onscrolled;
        handlers.onscrolled_up = props.onscrolled_up;
    }

    // Scroll listeners run outside the dioxus runtime, so actions are routed through a task.
    let binding = use_hook(|| {
        let (tx, mut rx) = unbounded::<BoundAction>();
        let binding = ScrollBinding::new(PlatformHost::default(), tx);
        let liveness = binding.liveness();
        let handlers = handlers.clone();
        spawn(async move {
            while let Some(bound) = rx.next().await {
                if let Some(action) = liveness.admit(bound) {
                    handlers.borrow().dispatch(action);
                }
            }
        });
        Rc::new(RefCell::new(binding))
    });

    binding.borrow_mut().configure(props.host_options());

    use_drop({
        let binding = binding.clone();
        move || binding.borrow_mut().dispose()
    });

    use_load_until_scrollable(&binding, props.load_until_scrollable, props.throttle);

    rsx! {
        div {
            class: props.class.clone(),
            onmounted: move |event: MountedEvent| {
                if let Some(element) = crate::mounted_element(&event.data()) {
                    binding.borrow_mut().mount(element);
                }
            },
            {props.children}
        }
    }
}
