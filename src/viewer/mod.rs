//! The structure-viewer adapter.
//!
//! [`StructureViewerAdapter`] wraps an external 3D viewer behind the
//! [`StructureBackend`] trait and translates between the heatmap's
//! 0-based position axis and the backend's chain-relative residue
//! numbering. It owns the generation guard for structure loads, the
//! current color scheme (re-applied after every completed load), and the
//! position-indexed hover/click streams that decouple the session from
//! the backend's native event vocabulary.

mod backend;
mod color;

pub use backend::{
    BackendEvent, ComponentId, LoadToken, Presentation, StructureBackend,
    ThemeSpec,
};
pub use color::ColorScheme;

use crate::error::MutviewError;
use crate::events::{Subscribers, Subscription};
use crate::options::{ColorOptions, ViewerOptions};

/// Mapping between 0-based heatmap columns and backend residue numbers.
///
/// Chain and offset are explicit configuration, not assumptions: the two
/// coordinate systems agree only where this mapping says they do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueMapping {
    /// Chain the position axis maps onto.
    pub chain: String,
    /// Offset added to a column index to obtain a residue number.
    pub offset: i64,
}

impl ResidueMapping {
    /// Residue number for a heatmap column.
    #[must_use]
    pub fn to_residue(&self, column: usize) -> i64 {
        column as i64 + self.offset
    }

    /// Heatmap column for a backend residue, if it maps onto the axis.
    #[must_use]
    pub fn to_column(&self, chain: &str, residue: i64) -> Option<usize> {
        if chain != self.chain {
            return None;
        }
        usize::try_from(residue - self.offset).ok()
    }
}

/// A position-indexed interaction reported back to the session after
/// translating a native backend event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerSignal {
    /// The pointer is over this sequence position.
    Hover(usize),
    /// This sequence position was clicked.
    Click(usize),
}

/// View-side state of the 3D structure viewer.
pub struct StructureViewerAdapter {
    backend: Box<dyn StructureBackend>,
    mapping: ResidueMapping,
    presentation: Presentation,
    model_url_template: String,
    scheme: ColorScheme,
    generation: u64,
    current: Option<LoadToken>,
    loaded: bool,
    hover: Subscribers<usize>,
    click: Subscribers<usize>,
}

impl StructureViewerAdapter {
    /// Wrap a viewer backend, taking presentation and addressing from the
    /// options.
    #[must_use]
    pub fn new(
        backend: Box<dyn StructureBackend>,
        options: &ViewerOptions,
        colors: &ColorOptions,
    ) -> Self {
        Self {
            backend,
            mapping: ResidueMapping {
                chain: options.chain.clone(),
                offset: options.residue_offset,
            },
            presentation: Presentation {
                background: colors.background,
                lighting: options.lighting,
                show_sequence_panel: options.show_sequence_panel,
                show_controls_panel: options.show_controls_panel,
            },
            model_url_template: options.model_url_template.clone(),
            scheme: ColorScheme::default(),
            generation: 0,
            current: None,
            loaded: false,
            hover: Subscribers::new(),
            click: Subscribers::new(),
        }
    }

    /// Start loading the structure for `accession`.
    ///
    /// Applies the presentation settings, expands the model URL template,
    /// and begins the backend load under a fresh [`LoadToken`]. Any load
    /// still outstanding is superseded: its completion event will carry a
    /// stale token and be ignored.
    ///
    /// # Errors
    ///
    /// [`MutviewError::StructureLoad`] when the backend cannot start the
    /// load. The error is returned to the caller, never swallowed.
    pub fn initialize(
        &mut self,
        accession: &str,
    ) -> Result<LoadToken, MutviewError> {
        let url = self.model_url_template.replace("{id}", accession);
        self.generation += 1;
        let token = LoadToken(self.generation);
        self.current = Some(token);
        self.loaded = false;

        self.backend.apply_presentation(&self.presentation);
        self.backend.begin_load(&url, token)?;
        log::info!("loading structure {accession} from {url}");
        Ok(token)
    }

    /// Switch the polymer coloring theme and apply it immediately.
    ///
    /// The scheme is also stored so that every completed load re-applies
    /// whatever is current; that re-application lives in
    /// [`handle_backend_event`](Self::handle_backend_event), registered
    /// once by construction rather than once per scheme switch.
    pub fn apply_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.apply_current_scheme();
    }

    /// Push the stored scheme to every polymer component in the scene.
    fn apply_current_scheme(&mut self) {
        let spec = self.scheme.spec();
        for component in self.backend.polymer_components() {
            self.backend.set_component_theme(component, &spec);
        }
    }

    /// Recenter the camera on a sequence position.
    pub fn focus_residue(&mut self, position: usize) {
        let residue = self.mapping.to_residue(position);
        self.backend.focus_residue(&self.mapping.chain, residue);
    }

    /// Persistently mark a sequence position in `color`.
    pub fn select_residue(&mut self, position: usize, color: [f32; 3]) {
        let residue = self.mapping.to_residue(position);
        self.backend
            .select_residue(&self.mapping.chain, residue, color);
    }

    /// Transiently mark a sequence position in `color`. The mark replaces
    /// the previous highlight.
    pub fn highlight_residue(&mut self, position: usize, color: [f32; 3]) {
        let residue = self.mapping.to_residue(position);
        self.backend
            .highlight_residue(&self.mapping.chain, residue, color);
    }

    /// Remove all selection and highlight marks.
    pub fn clear_marks(&mut self) {
        self.backend.clear_marks();
    }

    /// Subscribe to position hovers.
    pub fn on_hover(
        &mut self,
        callback: impl FnMut(usize) + 'static,
    ) -> Subscription {
        self.hover.subscribe(callback)
    }

    /// Subscribe to position clicks.
    pub fn on_click(
        &mut self,
        callback: impl FnMut(usize) + 'static,
    ) -> Subscription {
        self.click.subscribe(callback)
    }

    /// Detach a hover subscription.
    pub fn unsubscribe_hover(&mut self, subscription: Subscription) -> bool {
        self.hover.unsubscribe(subscription)
    }

    /// Detach a click subscription.
    pub fn unsubscribe_click(&mut self, subscription: Subscription) -> bool {
        self.click.unsubscribe(subscription)
    }

    /// Entry point for native backend events.
    ///
    /// Interaction events are translated through the residue mapping and
    /// fanned out to subscribers; events on unmapped chains or residues
    /// below the axis are dropped rather than mis-mapped. Load events are
    /// token-checked: a completion from a superseded load is ignored, a
    /// current completion re-applies the stored color scheme.
    ///
    /// Returns the position-indexed signal the session should relay, if
    /// any.
    pub fn handle_backend_event(
        &mut self,
        event: BackendEvent,
    ) -> Option<ViewerSignal> {
        match event {
            BackendEvent::Hover { chain, residue } => {
                let column = self.mapping.to_column(&chain, residue)?;
                self.hover.emit(column);
                Some(ViewerSignal::Hover(column))
            }
            BackendEvent::Click { chain, residue } => {
                let column = self.mapping.to_column(&chain, residue)?;
                self.click.emit(column);
                Some(ViewerSignal::Click(column))
            }
            BackendEvent::LoadComplete { token } => {
                if self.current == Some(token) {
                    self.loaded = true;
                    self.apply_current_scheme();
                    log::info!(
                        "structure load complete; applied {} coloring",
                        self.scheme.name()
                    );
                } else {
                    log::debug!("ignoring completion of superseded load");
                }
                None
            }
            BackendEvent::LoadFailed { token, reason } => {
                if self.current == Some(token) {
                    self.loaded = false;
                    log::warn!("structure load failed: {reason}");
                } else {
                    log::debug!(
                        "ignoring failure of superseded load: {reason}"
                    );
                }
                None
            }
        }
    }

    /// Whether the current load has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The stored color scheme.
    #[must_use]
    pub fn color_scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// The column/residue mapping in effect.
    #[must_use]
    pub fn mapping(&self) -> &ResidueMapping {
        &self.mapping
    }
}

impl std::fmt::Debug for StructureViewerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructureViewerAdapter")
            .field("mapping", &self.mapping)
            .field("scheme", &self.scheme.name())
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}
