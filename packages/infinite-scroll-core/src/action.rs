//! Scroll actions and the rules that produce them.

use crate::{EdgeDistances, ScrollerConfig};

/// Which way more content should be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// The trailing edge is near: append more content.
    Down,
    /// The leading edge is near: prepend more content.
    Up,
}

/// Data attached to an action produced from a real scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPayload {
    /// The sampled scroll offset along the observed axis.
    pub current_scroll_position: f64,
}

/// A direction tagged request to load more content.
///
/// Actions are produced once and handed to the subscriber by value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAction {
    pub direction: ScrollDirection,
    /// `None` for synthetic actions that did not come from a scroll sample.
    pub payload: Option<ScrollPayload>,
}

impl ScrollAction {
    pub fn down(payload: Option<ScrollPayload>) -> Self {
        Self {
            direction: ScrollDirection::Down,
            payload,
        }
    }

    pub fn up(payload: Option<ScrollPayload>) -> Self {
        Self {
            direction: ScrollDirection::Up,
            payload,
        }
    }
}

/// Decide which actions a single sample produces.
///
/// Returns zero, one or two actions. When both edges qualify, `Down` comes before `Up`.
/// A disabled config always yields nothing.
pub fn evaluate(
    distances: EdgeDistances,
    config: &ScrollerConfig,
    payload: Option<ScrollPayload>,
) -> Vec<ScrollAction> {
    if config.disabled {
        return Vec::new();
    }

    let mut actions = Vec::with_capacity(2);

    if config.always_fire || distances.from_bottom <= config.down_threshold {
        actions.push(ScrollAction::down(payload));
    }

    if distances.from_top <= config.up_threshold {
        actions.push(ScrollAction::up(payload));
    }

    actions
}
