//! The heatmap view: windowing, highlight overlay, click stream.
//!
//! [`HeatmapView`] owns everything about the heatmap that is not painting:
//! which slice of the position axis is visible, where the single
//! selection-highlight rectangle sits, and who is subscribed to column
//! clicks. Painting itself happens behind the [`HeatmapSurface`] trait.

mod surface;

pub use surface::{HeatmapFrame, HeatmapSurface, HighlightShape};

use crate::events::{Subscribers, Subscription};
use crate::options::DisplayOptions;
use crate::score::ScoreTable;

/// View-side state of the substitution heatmap.
pub struct HeatmapView {
    surface: Box<dyn HeatmapSurface>,
    options: DisplayOptions,
    /// Length of the position axis of the last rendered table.
    positions: usize,
    visible: Option<(usize, usize)>,
    highlighted: Option<usize>,
    click: Subscribers<usize>,
}

impl HeatmapView {
    /// Wrap a rendering surface.
    #[must_use]
    pub fn new(
        surface: Box<dyn HeatmapSurface>,
        options: DisplayOptions,
    ) -> Self {
        Self {
            surface,
            options,
            positions: 0,
            visible: None,
            highlighted: None,
            click: Subscribers::new(),
        }
    }

    /// Draw a score table from scratch.
    ///
    /// The letter axis is `alphabet`, the caller's canonical row order
    /// (typically [`score::ALPHABET`](crate::score::ALPHABET)); the
    /// position axis is the table's row dimension. The initial visible
    /// window covers the leading `initial_window_fraction` of the
    /// position axis so long proteins do not open as an unreadably
    /// compressed full-length view.
    pub fn render(
        &mut self,
        table: &ScoreTable,
        alphabet: &[&'static str],
        title: &str,
    ) {
        self.positions = table.positions();
        self.highlighted = None;
        self.surface.draw(&HeatmapFrame {
            matrix: &table.matrix,
            axis_labels: &table.axis_labels,
            alphabet,
            title,
        });
        self.surface.set_highlight(None);

        if self.positions == 0 {
            self.visible = None;
            return;
        }
        let last = self.positions - 1;
        let end = (self.positions as f64
            * self.options.initial_window_fraction)
            as usize;
        self.apply_range(0, end.max(1).min(last));
    }

    /// Re-center the visible window on `center`, `margin` positions to
    /// either side, clamped to the position axis.
    pub fn set_visible_range(&mut self, center: usize, margin: usize) {
        if self.positions == 0 {
            return;
        }
        let last = self.positions - 1;
        let lo = center.saturating_sub(margin).min(last);
        let hi = center.saturating_add(margin).min(last);
        self.apply_range(lo, hi);
    }

    fn apply_range(&mut self, lo: usize, hi: usize) {
        self.visible = Some((lo, hi));
        self.surface.set_x_range(lo as f64, hi as f64);
    }

    /// Move the highlight overlay to `position`.
    ///
    /// The overlay is one rectangle spanning the full letter-axis extent
    /// at `[position - 0.5, position + 0.5]`. Repeated calls REPLACE the
    /// shape; there is never more than one highlight.
    pub fn highlight_column(&mut self, position: usize) {
        self.highlighted = Some(position);
        self.surface
            .set_highlight(Some(HighlightShape::around(position)));
    }

    /// Remove the highlight overlay.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
        self.surface.set_highlight(None);
    }

    /// Subscribe to column clicks. Multiple independent subscribers are
    /// supported.
    pub fn on_click(
        &mut self,
        callback: impl FnMut(usize) + 'static,
    ) -> Subscription {
        self.click.subscribe(callback)
    }

    /// Detach a click subscription.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.click.unsubscribe(subscription)
    }

    /// Entry point for the surface's native click stream: the embedder
    /// calls this with the clicked column index, and the view fans it out
    /// to all subscribers.
    pub fn notify_click(&mut self, position: usize) {
        self.click.emit(position);
    }

    /// Position axis length of the rendered table.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions
    }

    /// Currently visible `[lo, hi]` window, if a table is rendered.
    #[must_use]
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        self.visible
    }

    /// Currently highlighted column, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }
}

impl std::fmt::Debug for HeatmapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeatmapView")
            .field("positions", &self.positions)
            .field("visible", &self.visible)
            .field("highlighted", &self.highlighted)
            .finish_non_exhaustive()
    }
}
