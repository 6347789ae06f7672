#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::{Rc, Weak},
    time::Duration,
};

use dioxus_infinite_scroll_core::{Axis, ScrollGeometry, ScrollHost, ScrollResult, ScrollSource};
use web_time::Instant;

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

/// A host with programmable geometry, a manual clock and hand fired scroll notifications.
///
/// Elements are plain ids. The window is keyed as `None`.
#[derive(Clone)]
pub struct FakeHost {
    inner: Rc<Inner>,
}

struct Inner {
    available: Cell<bool>,
    clock: Cell<Instant>,
    geometry: RefCell<HashMap<(Option<u32>, Axis), ScrollGeometry>>,
    selectors: RefCell<HashMap<(Option<u32>, String), u32>>,
    ancestors: RefCell<HashMap<u32, u32>>,
    listeners: RefCell<Vec<(u64, Option<u32>, Callback)>>,
    next_listener: Cell<u64>,
    attached_total: Cell<usize>,
}

pub struct FakeListener {
    host: Weak<Inner>,
    id: u64,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(host) = self.host.upgrade() {
            host.listeners.borrow_mut().retain(|(id, _, _)| *id != self.id);
        }
    }
}

fn key(source: &ScrollSource<u32>) -> Option<u32> {
    source.as_container().copied()
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                available: Cell::new(true),
                clock: Cell::new(Instant::now()),
                geometry: Default::default(),
                selectors: Default::default(),
                ancestors: Default::default(),
                listeners: Default::default(),
                next_listener: Cell::new(0),
                attached_total: Cell::new(0),
            }),
        }
    }

    pub fn unavailable() -> Self {
        let host = Self::new();
        host.inner.available.set(false);
        host
    }

    pub fn set_window(&self, offset: f64, visible: f64, scrollable: f64) {
        self.set(None, Axis::Vertical, offset, visible, scrollable);
    }

    pub fn set_container(&self, id: u32, offset: f64, visible: f64, scrollable: f64) {
        self.set(Some(id), Axis::Vertical, offset, visible, scrollable);
    }

    pub fn set(&self, target: Option<u32>, axis: Axis, offset: f64, visible: f64, scrollable: f64) {
        self.inner.geometry.borrow_mut().insert(
            (target, axis),
            ScrollGeometry::new(offset, visible, scrollable),
        );
    }

    pub fn add_selector(&self, root: Option<u32>, selector: &str, id: u32) {
        self.inner
            .selectors
            .borrow_mut()
            .insert((root, selector.to_string()), id);
    }

    pub fn add_scrollable_ancestor(&self, element: u32, ancestor: u32) {
        self.inner.ancestors.borrow_mut().insert(element, ancestor);
    }

    pub fn advance(&self, millis: u64) {
        let now = self.inner.clock.get() + Duration::from_millis(millis);
        self.inner.clock.set(now);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn attached_total(&self) -> usize {
        self.inner.attached_total.get()
    }

    /// Deliver one scroll notification to every listener on `target`.
    pub fn scroll(&self, target: Option<u32>) {
        let callbacks: Vec<Callback> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter(|(_, t, _)| *t == target)
            .map(|(_, _, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)();
        }
    }

    pub fn scroll_window(&self) {
        self.scroll(None);
    }
}

impl ScrollHost for FakeHost {
    type Element = u32;
    type Listener = FakeListener;

    fn is_available(&self) -> bool {
        self.inner.available.get()
    }

    fn query_selector(&self, selector: &str, root: Option<&u32>) -> Option<u32> {
        self.inner
            .selectors
            .borrow()
            .get(&(root.copied(), selector.to_string()))
            .copied()
    }

    fn scrollable_ancestor(&self, element: &u32, _axis: Axis) -> Option<u32> {
        self.inner.ancestors.borrow().get(element).copied()
    }

    fn geometry(&self, source: &ScrollSource<u32>, axis: Axis) -> ScrollGeometry {
        self.inner
            .geometry
            .borrow()
            .get(&(key(source), axis))
            .copied()
            .unwrap_or_default()
    }

    fn listen(
        &self,
        source: &ScrollSource<u32>,
        on_scroll: Box<dyn FnMut()>,
    ) -> ScrollResult<FakeListener> {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner.attached_total.set(self.inner.attached_total.get() + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, key(source), Rc::new(RefCell::new(on_scroll))));

        Ok(FakeListener {
            host: Rc::downgrade(&self.inner),
            id,
        })
    }

    fn now(&self) -> Instant {
        self.inner.clock.get()
    }
}
