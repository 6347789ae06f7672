use std::time::Duration;

use crate::Axis;

/// The fixed configuration of one scroller instance.
///
/// Changing any of these requires disposing the scroller and creating a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollerConfig {
    pub axis: Axis,
    /// Viewport units from the trailing edge that count as "near".
    pub down_threshold: f64,
    /// Viewport units from the leading edge that count as "near".
    pub up_threshold: f64,
    /// Minimum time between two evaluated samples. Zero disables throttling.
    pub throttle: Duration,
    /// Fire `Down` on every accepted sample regardless of distance.
    pub always_fire: bool,
    pub disabled: bool,
    /// Evaluate once right after attaching, before any real scroll happens. The check bypasses
    /// the throttle gate, so the first real scroll is never dropped because of it.
    pub immediate_check: bool,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            down_threshold: ScrollerOptions::<()>::DEFAULT_DOWN_DISTANCE,
            up_threshold: ScrollerOptions::<()>::DEFAULT_UP_DISTANCE,
            throttle: Duration::from_millis(ScrollerOptions::<()>::DEFAULT_THROTTLE_MS),
            always_fire: false,
            disabled: false,
            immediate_check: false,
        }
    }
}

/// An explicit container for the scroller to observe.
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerRef<E> {
    /// A resolved element.
    Element(E),
    /// A CSS selector, looked up under the host element or, with `from_root`, from the document.
    Selector(String),
}

/// Everything the lifecycle layer hands to [`crate::Scroller::create`].
///
/// `E` is the host's element handle. The defaults match the usual infinite scroll setup: observe
/// the window, load when two viewports from the bottom, throttle to 150ms.
///
/// ```rust
/// use dioxus_infinite_scroll_core::ScrollerOptions;
///
/// let mut options = ScrollerOptions::<()>::default();
/// options.down_distance(1.0).throttle(300).horizontal(true);
/// assert_eq!(options.config().down_threshold, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollerOptions<E> {
    pub(crate) element: Option<E>,
    pub(crate) scroll_container: Option<ContainerRef<E>>,
    pub(crate) scroll_window: bool,
    pub(crate) from_root: bool,
    pub(crate) horizontal: bool,
    pub(crate) always_callback: bool,
    pub(crate) disable: bool,
    pub(crate) down_distance: f64,
    pub(crate) up_distance: f64,
    pub(crate) throttle: u64,
    pub(crate) immediate_check: bool,
}

impl<E> Default for ScrollerOptions<E> {
    fn default() -> Self {
        Self {
            element: None,
            scroll_container: None,
            scroll_window: true,
            from_root: false,
            horizontal: false,
            always_callback: false,
            disable: false,
            down_distance: Self::DEFAULT_DOWN_DISTANCE,
            up_distance: Self::DEFAULT_UP_DISTANCE,
            throttle: Self::DEFAULT_THROTTLE_MS,
            immediate_check: false,
        }
    }
}

impl<E> ScrollerOptions<E> {
    pub const DEFAULT_DOWN_DISTANCE: f64 = 2.0;
    pub const DEFAULT_UP_DISTANCE: f64 = 1.5;
    pub const DEFAULT_THROTTLE_MS: u64 = 150;

    /// The element the scroller belongs to. Used to resolve containers and scrollable ancestors.
    pub fn element(&mut self, element: E) -> &mut Self {
        self.element = Some(element);
        self
    }

    /// Observe this container instead of the window or host element.
    pub fn scroll_container(&mut self, container: ContainerRef<E>) -> &mut Self {
        self.scroll_container = Some(container);
        self
    }

    /// Observe the window. Ignored when an explicit container is set.
    pub fn scroll_window(&mut self, scroll_window: bool) -> &mut Self {
        self.scroll_window = scroll_window;
        self
    }

    /// Look selectors up from the document, and without a container or window fall back to the
    /// nearest ancestor that actually scrolls.
    pub fn from_root(&mut self, from_root: bool) -> &mut Self {
        self.from_root = from_root;
        self
    }

    pub fn horizontal(&mut self, horizontal: bool) -> &mut Self {
        self.horizontal = horizontal;
        self
    }

    /// Fire `Down` on every accepted sample. Useful for containers that never reach the threshold.
    pub fn always_callback(&mut self, always_callback: bool) -> &mut Self {
        self.always_callback = always_callback;
        self
    }

    pub fn disable(&mut self, disable: bool) -> &mut Self {
        self.disable = disable;
        self
    }

    pub fn down_distance(&mut self, distance: f64) -> &mut Self {
        self.down_distance = distance;
        self
    }

    pub fn up_distance(&mut self, distance: f64) -> &mut Self {
        self.up_distance = distance;
        self
    }

    /// Minimum milliseconds between two evaluated samples.
    pub fn throttle(&mut self, millis: u64) -> &mut Self {
        self.throttle = millis;
        self
    }

    pub fn immediate_check(&mut self, immediate_check: bool) -> &mut Self {
        self.immediate_check = immediate_check;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disable
    }

    pub fn host_element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    /// The value object a scroller is created with.
    pub fn config(&self) -> ScrollerConfig {
        ScrollerConfig {
            axis: self.axis(),
            down_threshold: self.down_distance,
            up_threshold: self.up_distance,
            throttle: Duration::from_millis(self.throttle),
            always_fire: self.always_callback,
            disabled: self.disable,
            immediate_check: self.immediate_check,
        }
    }
}

/// What the lifecycle layer has to do when options change under a live scroller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconfiguration {
    /// Nothing that a scroller depends on changed.
    Keep,
    /// Dispose the current scroller and leave it down.
    Teardown,
    /// Dispose the current scroller and create a new one.
    Rebuild,
}

impl<E: PartialEq> ScrollerOptions<E> {
    /// Compare the options a scroller was created with against new ones.
    pub fn reconfigure(&self, next: &Self) -> Reconfiguration {
        let unchanged = self.element == next.element
            && self.scroll_container == next.scroll_container
            && self.scroll_window == next.scroll_window
            && self.from_root == next.from_root
            && self.config() == next.config();

        match (unchanged, next.disable) {
            (true, _) => Reconfiguration::Keep,
            (false, true) => Reconfiguration::Teardown,
            (false, false) => Reconfiguration::Rebuild,
        }
    }
}
