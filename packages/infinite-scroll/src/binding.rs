//! Keeps one live scroller in sync with a component's properties.

use std::{cell::Cell, rc::Rc};

use dioxus_infinite_scroll_core::{
    load_more, Reconfiguration, ScrollAction, ScrollHost, ScrollSource, Scroller, ScrollerOptions,
};
use futures_channel::mpsc::UnboundedSender;

/// An action tagged with the scroller that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundAction {
    generation: u64,
    pub action: ScrollAction,
}

/// Tells whether a [`BoundAction`] still belongs to the live scroller.
///
/// Actions wait in the channel until the receiving task runs. Any that were queued before the
/// scroller was torn down are stale by then.
#[derive(Debug, Clone, Default)]
pub struct Liveness(Rc<Cell<u64>>);

impl Liveness {
    pub fn admit(&self, bound: BoundAction) -> Option<ScrollAction> {
        (bound.generation == self.0.get()).then_some(bound.action)
    }

    fn current(&self) -> u64 {
        self.0.get()
    }

    fn expire(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

/// Owns the scroller behind an infinite scroll component.
///
/// The component hands over its element once mounted and its options on every render. Whenever
/// the options change in a way the live scroller cannot absorb, the old scroller is disposed before
/// a new one attaches. Actions are forwarded to `sink`; filter them through
/// [`ScrollBinding::liveness`] on the receiving end.
pub struct ScrollBinding<H: ScrollHost> {
    host: H,
    sink: UnboundedSender<BoundAction>,
    liveness: Liveness,
    element: Option<H::Element>,
    requested: ScrollerOptions<H::Element>,
    applied: Option<ScrollerOptions<H::Element>>,
    scroller: Option<Scroller<H>>,
}

impl<H> ScrollBinding<H>
where
    H: ScrollHost + Clone + 'static,
    H::Element: PartialEq,
{
    pub fn new(host: H, sink: UnboundedSender<BoundAction>) -> Self {
        Self {
            host,
            sink,
            liveness: Liveness::default(),
            element: None,
            requested: ScrollerOptions::default(),
            applied: None,
            scroller: None,
        }
    }

    /// The element the component rendered. Nothing attaches before this is known.
    pub fn mount(&mut self, element: H::Element) {
        self.element = Some(element);
        self.sync();
    }

    /// The latest options. The host element is filled in from [`ScrollBinding::mount`].
    pub fn configure(&mut self, options: ScrollerOptions<H::Element>) {
        self.requested = options;
        self.sync();
    }

    fn sync(&mut self) {
        let Some(element) = self.element.clone() else {
            return;
        };

        let mut next = self.requested.clone();
        next.element(element);

        let change = match &self.applied {
            Some(applied) => applied.reconfigure(&next),
            None if next.is_disabled() => Reconfiguration::Teardown,
            None => Reconfiguration::Rebuild,
        };

        match change {
            Reconfiguration::Keep => {}
            Reconfiguration::Teardown => self.release(),
            Reconfiguration::Rebuild => {
                self.release();
                self.attach(&next);
            }
        }

        self.applied = Some(next);
    }

    fn attach(&mut self, options: &ScrollerOptions<H::Element>) {
        let sink = self.sink.clone();
        let generation = self.liveness.current();
        let created = Scroller::create(self.host.clone(), options, move |action| {
            let _ = sink.unbounded_send(BoundAction { generation, action });
        });

        match created {
            Ok(scroller) => self.scroller = Some(scroller),
            Err(err) => tracing::error!("failed to set up infinite scroll: {err}"),
        }
    }

    /// Tear the scroller down. Safe to call any number of times.
    ///
    /// The next [`ScrollBinding::configure`] or [`ScrollBinding::mount`] sets up from scratch.
    pub fn dispose(&mut self) {
        self.release();
        self.applied = None;
    }

    fn release(&mut self) {
        if let Some(mut scroller) = self.scroller.take() {
            scroller.dispose();
            self.liveness.expire();
        }
    }

    pub fn scroller(&self) -> Option<&Scroller<H>> {
        self.scroller.as_ref()
    }

    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Ask for another batch if the host element still does not overflow.
    ///
    /// Called by the component once a batch has rendered and its debounce has elapsed. Does
    /// nothing without a live scroller, so a disabled binding never requests.
    pub fn load_until_scrollable(&self, all_items_loaded: bool) {
        if self.requested.is_disabled() || self.scroller.is_none() {
            return;
        }

        let Some(element) = self.element.clone() else {
            return;
        };

        let geometry = self
            .host
            .geometry(&ScrollSource::Container(element), self.requested.axis());

        if let Some(action) = load_more(all_items_loaded, geometry) {
            tracing::trace!("content does not overflow yet, requesting more");
            let _ = self.sink.unbounded_send(BoundAction {
                generation: self.liveness.current(),
                action,
            });
        }
    }
}
