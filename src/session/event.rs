//! The session's complete synchronization vocabulary.
//!
//! Every cross-view interaction — whether it originated as a heatmap
//! click, a viewer click, a viewer hover, or a programmatic call — is
//! represented as a `SyncEvent`. Consumers construct events and pass them
//! to [`SyncSession::dispatch`](super::SyncSession::dispatch); the
//! session never cares *how* an event was produced.

/// A position-change event from either view, or a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// A heatmap column was clicked.
    HeatmapClick {
        /// Clicked sequence position.
        position: usize,
    },

    /// A residue in the 3D view was clicked. Deliberately symmetric with
    /// [`SyncEvent::HeatmapClick`]: both run the full selection
    /// transition.
    ViewerClick {
        /// Clicked sequence position.
        position: usize,
    },

    /// The pointer moved over a residue in the 3D view. Transient: only
    /// the highlights move, the selection and the visible window do not.
    ViewerHover {
        /// Hovered sequence position.
        position: usize,
    },

    /// Return to the idle state: no selection, no highlights, no marks
    /// (e.g. a click on empty space).
    Clear,
}
