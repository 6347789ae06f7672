#![doc = include_str!("../README.md")]

mod binding;
mod component;
mod headless;
mod retry;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

pub use binding::*;
pub use component::*;
pub use headless::*;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::*;

/// The host independent engine.
pub use dioxus_infinite_scroll_core as engine;

pub use dioxus_infinite_scroll_core::{
    ContainerRef, ScrollAction, ScrollDirection, ScrollPayload, Scroller, ScrollerOptions,
};

/// The host components attach to on this platform.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub type PlatformHost = WebHost;

/// The host components attach to on this platform.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub type PlatformHost = HeadlessHost;

/// The element type of [`PlatformHost`].
pub type HostElement = <PlatformHost as engine::ScrollHost>::Element;

/// The platform element behind a mounted node, for use as a scroll container.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn mounted_element(data: &dioxus::prelude::MountedData) -> Option<web_sys::Element> {
    data.downcast::<web_sys::Element>().cloned()
}

/// The platform element behind a mounted node, for use as a scroll container.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn mounted_element(_data: &dioxus::prelude::MountedData) -> Option<()> {
    Some(())
}
