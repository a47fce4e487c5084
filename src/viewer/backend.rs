//! The boundary to the external 3D structure viewer.

use crate::error::MutviewError;
use crate::options::LightingMode;

/// Opaque id of one polymer representation node in the backend's scene
/// graph.
pub type ComponentId = u32;

/// Generation token for one structure load.
///
/// Every [`StructureBackend::begin_load`] carries the token of the load
/// that started it; the backend echoes it in
/// [`BackendEvent::LoadComplete`] / [`BackendEvent::LoadFailed`] so the
/// adapter can discard completions that a newer load has superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(pub(crate) u64);

/// Presentation settings pushed to the backend before a load.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// RGB viewport background.
    pub background: [f32; 3],
    /// Lighting preset.
    pub lighting: LightingMode,
    /// Whether the backend's sequence panel is visible.
    pub show_sequence_panel: bool,
    /// Whether the backend's control panel is visible.
    pub show_controls_panel: bool,
}

/// A coloring theme for one polymer component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeSpec<'a> {
    /// A theme the backend derives itself (secondary structure,
    /// hydrophobicity, ...), addressed by name.
    Named(&'a str),
    /// Caller-supplied colors, one per residue in chain order.
    PerResidue(&'a [[f32; 3]]),
}

/// A native event reported by the backend.
///
/// The embedder translates the viewer's own event vocabulary into these
/// and feeds them to
/// [`StructureViewerAdapter::handle_backend_event`](super::StructureViewerAdapter::handle_backend_event).
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// The pointer moved over a residue.
    Hover {
        /// Chain the residue belongs to.
        chain: String,
        /// Backend residue number.
        residue: i64,
    },
    /// A residue was clicked.
    Click {
        /// Chain the residue belongs to.
        chain: String,
        /// Backend residue number.
        residue: i64,
    },
    /// A structure load finished.
    LoadComplete {
        /// Token of the load that finished.
        token: LoadToken,
    },
    /// A structure load failed.
    LoadFailed {
        /// Token of the load that failed.
        token: LoadToken,
        /// Backend-reported failure description.
        reason: String,
    },
}

/// Operations the external 3D viewer must provide.
///
/// Implementations own structure parsing, camera control, and drawing.
/// Marks are single-slot: a second `highlight_residue` call replaces the
/// previous transient highlight, and `select_residue` replaces the
/// previous persistent selection mark.
pub trait StructureBackend {
    /// Start loading a structure model from `url`. Completion (or
    /// failure) is reported later through [`BackendEvent`] carrying the
    /// same `token`.
    ///
    /// # Errors
    ///
    /// [`MutviewError::StructureLoad`] when the load cannot even be
    /// started (malformed URL, viewer not ready).
    fn begin_load(
        &mut self,
        url: &str,
        token: LoadToken,
    ) -> Result<(), MutviewError>;

    /// Apply presentation settings (background, lighting, panels).
    fn apply_presentation(&mut self, presentation: &Presentation);

    /// Polymer representation nodes currently in the scene graph.
    fn polymer_components(&self) -> Vec<ComponentId>;

    /// Re-theme one polymer component.
    fn set_component_theme(
        &mut self,
        component: ComponentId,
        theme: &ThemeSpec<'_>,
    );

    /// Recenter the camera on a residue.
    fn focus_residue(&mut self, chain: &str, residue: i64);

    /// Persistently mark a residue in `color`.
    fn select_residue(&mut self, chain: &str, residue: i64, color: [f32; 3]);

    /// Transiently mark a residue in `color` (replaced by the next
    /// highlight).
    fn highlight_residue(
        &mut self,
        chain: &str,
        residue: i64,
        color: [f32; 3],
    );

    /// Remove all selection and highlight marks.
    fn clear_marks(&mut self);
}
