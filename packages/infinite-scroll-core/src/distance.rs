use crate::ScrollGeometry;

/// How far a source is from each edge, measured in visible extents.
///
/// A `from_bottom` of `2.0` means two viewport heights (or widths) of content remain
/// before the trailing edge. Negative values can appear on overscroll and count as "at the edge".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDistances {
    /// Distance remaining before the trailing edge.
    pub from_bottom: f64,
    /// Distance already covered from the leading edge.
    pub from_top: f64,
}

impl EdgeDistances {
    /// Both edges infinitely far away. Never satisfies a threshold.
    pub const FAR: Self = Self {
        from_bottom: f64::INFINITY,
        from_top: f64::INFINITY,
    };

    /// Normalize a raw reading.
    ///
    /// A collapsed source (zero visible extent) is reported as [`EdgeDistances::FAR`] rather
    /// than dividing by zero, so elements that are not laid out yet never trigger a load.
    pub fn compute(geometry: ScrollGeometry) -> Self {
        if geometry.is_collapsed() {
            return Self::FAR;
        }

        let ScrollGeometry {
            offset,
            visible_extent,
            scrollable_extent,
        } = geometry;

        Self {
            from_bottom: (scrollable_extent - visible_extent - offset) / visible_extent,
            from_top: offset / visible_extent,
        }
    }
}

impl From<ScrollGeometry> for EdgeDistances {
    fn from(geometry: ScrollGeometry) -> Self {
        Self::compute(geometry)
    }
}
