//! The boundary to the external heatmap rendering engine.

/// One frame of heatmap content: everything the painter needs to draw the
/// matrix from scratch.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapFrame<'a> {
    /// Display-ordered score rows.
    pub matrix: &'a [Vec<f64>],
    /// Labels derived from the score table's key order.
    pub axis_labels: &'a [String],
    /// The fixed amino-acid letter axis, in canonical order.
    pub alphabet: &'a [&'static str],
    /// Plot title.
    pub title: &'a str,
}

/// The highlight overlay: a single rectangle spanning the full
/// letter-axis extent between `x0` and `x1` on the position axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightShape {
    /// Left edge, in position-axis units.
    pub x0: f64,
    /// Right edge, in position-axis units.
    pub x1: f64,
}

impl HighlightShape {
    /// The overlay for one column: half a cell either side of `position`.
    #[must_use]
    pub fn around(position: usize) -> Self {
        let center = position as f64;
        Self {
            x0: center - 0.5,
            x1: center + 0.5,
        }
    }
}

/// Operations the external heatmap engine must provide.
///
/// Implementations own axis drawing, pan/zoom, and painting; this crate
/// only tells them what to show. All calls are idempotent state updates:
/// `set_highlight` REPLACES the overlay (passing `Some` twice leaves one
/// shape), `set_x_range` replaces the visible window.
pub trait HeatmapSurface {
    /// Draw (or redraw) the full matrix.
    fn draw(&mut self, frame: &HeatmapFrame<'_>);

    /// Replace the visible window on the position axis.
    fn set_x_range(&mut self, min: f64, max: f64);

    /// Replace the highlight overlay; `None` clears it.
    fn set_highlight(&mut self, shape: Option<HighlightShape>);
}
