use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use futures_channel::mpsc::{unbounded, UnboundedReceiver};
use tracing::{debug, trace};

use crate::{
    evaluate, EdgeDistances, ScrollAction, ScrollHost, ScrollPayload, ScrollResult, ScrollSource,
    ScrollerConfig, ScrollerOptions, ThrottleGate,
};

/// The stream side of [`Scroller::stream`]. Ends once the scroller is disposed.
pub type ScrollActions = UnboundedReceiver<ScrollAction>;

/// Where a scroller is in its lifetime.
///
/// `Created -> Attached -> Live -> Disposed`. `Disposed` is terminal. An inert scroller (disabled,
/// or created without a host) stays `Created` until it is disposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollerState {
    Created,
    Attached,
    Live,
    Disposed,
}

/// Watches one scroll source and reports when it gets near an edge.
///
/// Every notification from the host goes through the throttle gate, is measured, normalized and
/// evaluated, and the resulting actions are handed to the subscriber synchronously, in order.
///
/// ```rust, ignore
/// let mut options = ScrollerOptions::default();
/// options.element(host_element).scroll_window(false);
///
/// let mut scroller = Scroller::create(WebHost::new(), &options, |action| match action.direction {
///     ScrollDirection::Down => load_next_page(),
///     ScrollDirection::Up => load_previous_page(),
/// })?;
///
/// // later
/// scroller.dispose();
/// ```
pub struct Scroller<H: ScrollHost> {
    state: Rc<Cell<ScrollerState>>,
    engine: Option<Rc<Engine<H>>>,
    listener: Option<H::Listener>,
}

struct Engine<H: ScrollHost> {
    host: H,
    source: ScrollSource<H::Element>,
    config: ScrollerConfig,
    gate: RefCell<ThrottleGate>,
    state: Rc<Cell<ScrollerState>>,
    subscriber: RefCell<Box<dyn FnMut(ScrollAction)>>,
}

impl<H: ScrollHost + 'static> Scroller<H> {
    /// Resolve the scroll source, attach exactly one listener to it and start delivering actions
    /// to `on_action`.
    ///
    /// A disabled configuration or an unavailable host produces an inert scroller that never
    /// attaches and never fires. Resolution failures are returned as errors.
    pub fn create(
        host: H,
        options: &ScrollerOptions<H::Element>,
        on_action: impl FnMut(ScrollAction) + 'static,
    ) -> ScrollResult<Self> {
        let state = Rc::new(Cell::new(ScrollerState::Created));

        if options.is_disabled() {
            debug!("infinite scroll is disabled, not attaching a listener");
            return Ok(Self::inert(state));
        }

        if !host.is_available() {
            debug!("no scroll host available, infinite scroll stays inert");
            return Ok(Self::inert(state));
        }

        let source = ScrollSource::resolve(&host, options)?;
        let config = options.config();

        let engine = Rc::new(Engine {
            gate: RefCell::new(ThrottleGate::new(config.throttle)),
            subscriber: RefCell::new(Box::new(on_action)),
            state: state.clone(),
            host,
            source,
            config,
        });

        let weak: Weak<Engine<H>> = Rc::downgrade(&engine);
        let listener = engine.host.listen(
            &engine.source,
            Box::new(move || {
                if let Some(engine) = weak.upgrade() {
                    engine.sample();
                }
            }),
        )?;

        state.set(ScrollerState::Attached);
        debug!(
            window = engine.source.is_window(),
            axis = ?engine.config.axis,
            "infinite scroll listener attached"
        );

        if engine.config.immediate_check {
            engine.sample_immediately();
        }

        Ok(Self {
            state,
            engine: Some(engine),
            listener: Some(listener),
        })
    }

    /// Like [`Scroller::create`], but deliver actions through a channel instead of a callback.
    pub fn stream(
        host: H,
        options: &ScrollerOptions<H::Element>,
    ) -> ScrollResult<(Self, ScrollActions)> {
        let (tx, rx) = unbounded();
        let scroller = Self::create(host, options, move |action| {
            let _ = tx.unbounded_send(action);
        })?;
        Ok((scroller, rx))
    }

    fn inert(state: Rc<Cell<ScrollerState>>) -> Self {
        Self {
            state,
            engine: None,
            listener: None,
        }
    }

    /// Run one sample as if the host had delivered a scroll notification.
    ///
    /// The sample still goes through the throttle gate.
    pub fn check(&self) {
        if let Some(engine) = &self.engine {
            engine.sample();
        }
    }

    /// Remove the listener and release the throttle state.
    ///
    /// No action is delivered after this returns. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if self.state.get() == ScrollerState::Disposed {
            return;
        }

        self.state.set(ScrollerState::Disposed);
        self.listener.take();
        self.engine.take();
        debug!("infinite scroll disposed");
    }

    pub fn state(&self) -> ScrollerState {
        self.state.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.state() == ScrollerState::Disposed
    }

    /// False for scrollers that never attached a listener.
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    pub fn source(&self) -> Option<&ScrollSource<H::Element>> {
        self.engine.as_ref().map(|engine| &engine.source)
    }

    pub fn config(&self) -> Option<&ScrollerConfig> {
        self.engine.as_ref().map(|engine| &engine.config)
    }
}

impl<H: ScrollHost> Drop for Scroller<H> {
    fn drop(&mut self) {
        if self.state.get() != ScrollerState::Disposed {
            self.state.set(ScrollerState::Disposed);
            self.listener.take();
            self.engine.take();
        }
    }
}

impl<H: ScrollHost> Engine<H> {
    fn sample(&self) {
        if self.state.get() == ScrollerState::Disposed {
            return;
        }

        // a subscriber that synchronously triggers another notification
        let Ok(mut subscriber) = self.subscriber.try_borrow_mut() else {
            trace!("ignoring re-entrant scroll notification");
            return;
        };

        if !self.gate.borrow_mut().should_process(self.host.now()) {
            trace!("scroll sample throttled");
            return;
        }

        self.deliver(&mut **subscriber);
    }

    /// The immediate check on attach. It bypasses the gate and leaves its window untouched.
    fn sample_immediately(&self) {
        let Ok(mut subscriber) = self.subscriber.try_borrow_mut() else {
            return;
        };
        self.deliver(&mut **subscriber);
    }

    fn deliver(&self, subscriber: &mut dyn FnMut(ScrollAction)) {
        if self.state.get() == ScrollerState::Disposed {
            return;
        }

        self.state.set(ScrollerState::Live);

        let geometry = self.host.geometry(&self.source, self.config.axis);
        let payload = ScrollPayload {
            current_scroll_position: geometry.offset,
        };
        let distances = EdgeDistances::compute(geometry);

        for action in evaluate(distances, &self.config, Some(payload)) {
            if self.state.get() == ScrollerState::Disposed {
                break;
            }
            trace!(direction = ?action.direction, ?distances, "scroll action");
            subscriber(action);
        }
    }
}
