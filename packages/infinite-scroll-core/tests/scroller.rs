mod common;

use std::{cell::RefCell, rc::Rc};

use common::FakeHost;
use dioxus_infinite_scroll_core::{
    Axis, ScrollAction, ScrollDirection, ScrollPayload, Scroller, ScrollerOptions, ScrollerState,
};
use pretty_assertions::assert_eq;

/// Create a scroller that records every action it produces.
fn recording(
    host: &FakeHost,
    options: &ScrollerOptions<u32>,
) -> (Scroller<FakeHost>, Rc<RefCell<Vec<ScrollAction>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let scroller = Scroller::create(host.clone(), options, {
        let seen = seen.clone();
        move |action| seen.borrow_mut().push(action)
    })
    .expect("scroller should attach");
    (scroller, seen)
}

fn directions(seen: &Rc<RefCell<Vec<ScrollAction>>>) -> Vec<ScrollDirection> {
    seen.borrow().iter().map(|a| a.direction).collect()
}

fn container_options(id: u32) -> ScrollerOptions<u32> {
    let mut options = ScrollerOptions::default();
    options.element(id).scroll_window(false);
    options
}

#[test]
fn window_near_bottom_fires_down() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.down_distance(2.0).up_distance(0.5);
    let (_scroller, seen) = recording(&host, &options);

    host.scroll_window();

    assert_eq!(
        *seen.borrow(),
        vec![ScrollAction::down(Some(ScrollPayload {
            current_scroll_position: 1800.0
        }))]
    );
}

#[test]
fn window_far_from_bottom_is_quiet() {
    let host = FakeHost::new();
    host.set_window(0.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.down_distance(0.1);
    let (_scroller, seen) = recording(&host, &options);

    host.scroll_window();

    // sitting at the very top still counts as near the leading edge
    assert_eq!(directions(&seen), vec![ScrollDirection::Up]);
}

#[test]
fn container_without_overflow_fires_on_every_accepted_sample() {
    let host = FakeHost::new();
    host.set_container(7, 0.0, 500.0, 500.0);

    let mut options = container_options(7);
    options.always_callback(true);
    let (_scroller, seen) = recording(&host, &options);

    for _ in 0..3 {
        host.scroll(Some(7));
        host.advance(150);
    }

    let downs = directions(&seen)
        .into_iter()
        .filter(|d| *d == ScrollDirection::Down)
        .count();
    assert_eq!(downs, 3);
}

#[test]
fn samples_inside_the_throttle_window_are_dropped() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.throttle(150).up_distance(0.0);
    let (_scroller, seen) = recording(&host, &options);

    host.scroll_window();
    host.advance(50);
    host.scroll_window();
    assert_eq!(directions(&seen), vec![ScrollDirection::Down]);

    host.advance(100);
    host.scroll_window();
    assert_eq!(
        directions(&seen),
        vec![ScrollDirection::Down, ScrollDirection::Down]
    );
}

#[test]
fn zero_throttle_processes_every_sample() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.throttle(0).up_distance(0.0);
    let (_scroller, seen) = recording(&host, &options);

    for _ in 0..5 {
        host.scroll_window();
    }
    assert_eq!(seen.borrow().len(), 5);
}

#[test]
fn both_edges_fire_from_one_sample_down_first() {
    let host = FakeHost::new();
    host.set_container(1, 20.0, 400.0, 500.0);

    let (_scroller, seen) = recording(&host, &container_options(1));
    host.scroll(Some(1));

    assert_eq!(
        directions(&seen),
        vec![ScrollDirection::Down, ScrollDirection::Up]
    );
}

#[test]
fn collapsed_container_never_fires() {
    let host = FakeHost::new();
    host.set_container(3, 0.0, 0.0, 0.0);

    let mut options = container_options(3);
    options.down_distance(100.0).up_distance(100.0).throttle(0);
    let (_scroller, seen) = recording(&host, &options);

    host.scroll(Some(3));
    host.scroll(Some(3));
    assert!(seen.borrow().is_empty());
}

#[test]
fn collapsed_container_fires_down_with_always_callback() {
    let host = FakeHost::new();
    host.set_container(3, 0.0, 0.0, 0.0);

    let mut options = container_options(3);
    options.always_callback(true);
    let (_scroller, seen) = recording(&host, &options);

    host.scroll(Some(3));
    assert_eq!(directions(&seen), vec![ScrollDirection::Down]);
}

#[test]
fn horizontal_scroller_measures_the_horizontal_axis() {
    let host = FakeHost::new();
    host.set(Some(2), Axis::Vertical, 0.0, 100.0, 10_000.0);
    host.set(Some(2), Axis::Horizontal, 950.0, 100.0, 1100.0);

    let mut options = container_options(2);
    options.horizontal(true).down_distance(1.0).up_distance(0.5);
    let (scroller, seen) = recording(&host, &options);
    assert_eq!(scroller.config().map(|c| c.axis), Some(Axis::Horizontal));

    host.scroll(Some(2));
    assert_eq!(directions(&seen), vec![ScrollDirection::Down]);
}

#[test]
fn immediate_check_evaluates_on_attach() {
    let host = FakeHost::new();
    host.set_container(4, 50.0, 500.0, 600.0);

    let mut options = container_options(4);
    options.immediate_check(true).up_distance(0.0);
    let (scroller, seen) = recording(&host, &options);

    assert_eq!(scroller.state(), ScrollerState::Live);
    assert_eq!(directions(&seen), vec![ScrollDirection::Down]);

    // the immediate check does not open a throttle window
    host.advance(10);
    host.scroll(Some(4));
    assert_eq!(seen.borrow().len(), 2);

    // the first real scroll does
    host.advance(10);
    host.scroll(Some(4));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn without_immediate_check_nothing_fires_until_scroll() {
    let host = FakeHost::new();
    host.set_container(4, 0.0, 500.0, 600.0);

    let (scroller, seen) = recording(&host, &container_options(4));
    assert_eq!(scroller.state(), ScrollerState::Attached);
    assert!(seen.borrow().is_empty());

    host.scroll(Some(4));
    assert_eq!(scroller.state(), ScrollerState::Live);
    assert!(!seen.borrow().is_empty());
}

#[test]
fn check_reuses_the_sampling_path() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.up_distance(0.0);
    let (scroller, seen) = recording(&host, &options);

    scroller.check();
    scroller.check();
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn disabled_scroller_never_attaches() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.disable(true).immediate_check(true);
    let (scroller, seen) = recording(&host, &options);

    assert!(!scroller.is_attached());
    assert_eq!(scroller.state(), ScrollerState::Created);
    assert_eq!(host.listener_count(), 0);

    host.scroll_window();
    scroller.check();
    assert!(seen.borrow().is_empty());
}

#[test]
fn unavailable_host_is_a_silent_no_op() {
    let host = FakeHost::unavailable();

    let mut options = ScrollerOptions::default();
    options.immediate_check(true).always_callback(true);
    let (scroller, seen) = recording(&host, &options);

    assert!(!scroller.is_attached());
    assert_eq!(host.attached_total(), 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn dispose_is_final_and_idempotent() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.throttle(0);
    let (mut scroller, seen) = recording(&host, &options);
    assert_eq!(host.listener_count(), 1);

    scroller.dispose();
    assert_eq!(scroller.state(), ScrollerState::Disposed);
    assert_eq!(host.listener_count(), 0);
    assert!(scroller.source().is_none());

    host.scroll_window();
    scroller.check();
    assert!(seen.borrow().is_empty());

    scroller.dispose();
    assert!(scroller.is_disposed());
}

#[test]
fn disposing_an_inert_scroller_is_fine() {
    let host = FakeHost::new();
    let mut options = ScrollerOptions::default();
    options.disable(true);
    let (mut scroller, _) = recording(&host, &options);

    scroller.dispose();
    scroller.dispose();
    assert_eq!(scroller.state(), ScrollerState::Disposed);
}

#[test]
fn dropping_a_scroller_removes_its_listener() {
    let host = FakeHost::new();
    let (scroller, _) = recording(&host, &ScrollerOptions::default());
    assert_eq!(host.listener_count(), 1);

    drop(scroller);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn recreating_attaches_a_fresh_listener_and_gate() {
    let host = FakeHost::new();
    host.set_window(1800.0, 800.0, 2000.0);

    let mut options = ScrollerOptions::default();
    options.throttle(10_000).up_distance(0.0);

    let (mut first, first_seen) = recording(&host, &options);
    host.scroll_window();
    first.dispose();

    let (_second, second_seen) = recording(&host, &options);
    assert_eq!(host.attached_total(), 2);
    assert_eq!(host.listener_count(), 1);

    // well inside the old throttle window, but the new scroller has its own gate
    host.advance(5);
    host.scroll_window();

    assert_eq!(first_seen.borrow().len(), 1);
    assert_eq!(second_seen.borrow().len(), 1);
}

#[test]
fn scrollers_do_not_share_throttle_state() {
    let host = FakeHost::new();
    host.set_container(1, 450.0, 500.0, 1000.0);
    host.set_container(2, 450.0, 500.0, 1000.0);

    let mut a = container_options(1);
    a.up_distance(0.0);
    let mut b = container_options(2);
    b.up_distance(0.0);

    let (_a, seen_a) = recording(&host, &a);
    let (_b, seen_b) = recording(&host, &b);

    host.scroll(Some(1));
    host.scroll(Some(2));

    assert_eq!(seen_a.borrow().len(), 1);
    assert_eq!(seen_b.borrow().len(), 1);
}
