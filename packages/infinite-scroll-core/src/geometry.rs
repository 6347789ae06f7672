//! Raw scroll geometry as reported by a host.

/// The axis a scroller observes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Top to bottom. Leading edge is the top, trailing edge is the bottom.
    #[default]
    Vertical,
    /// Left to right. Leading edge is the left side, trailing edge is the right side.
    Horizontal,
}

impl Axis {
    /// Pick the axis from a `horizontal` flag.
    pub fn from_horizontal(horizontal: bool) -> Self {
        match horizontal {
            true => Axis::Horizontal,
            false => Axis::Vertical,
        }
    }
}

/// One reading of a scroll source along a single axis, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollGeometry {
    /// How far the source is scrolled from its leading edge.
    pub offset: f64,
    /// The size of the visible viewport onto the content.
    pub visible_extent: f64,
    /// The full size of the content.
    pub scrollable_extent: f64,
}

impl ScrollGeometry {
    pub fn new(offset: f64, visible_extent: f64, scrollable_extent: f64) -> Self {
        Self {
            offset,
            visible_extent,
            scrollable_extent,
        }
    }

    /// Whether the content is larger than the viewport, i.e. there is something to scroll.
    pub fn overflows(&self) -> bool {
        self.scrollable_extent > self.visible_extent
    }

    /// An element that has not been laid out yet reports no visible extent.
    pub fn is_collapsed(&self) -> bool {
        self.visible_extent <= 0.0 || !self.visible_extent.is_finite()
    }
}

/// Reads the current geometry of something that scrolls.
///
/// Reads are pure: they never scroll or otherwise mutate the source.
pub trait GeometryReader {
    fn read(&self, axis: Axis) -> ScrollGeometry;
}

impl<F: Fn(Axis) -> ScrollGeometry> GeometryReader for F {
    fn read(&self, axis: Axis) -> ScrollGeometry {
        self(axis)
    }
}
