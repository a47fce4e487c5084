//! The synchronization session: one object owning both views and the
//! selection.
//!
//! [`SyncSession`] is the mediator between [`HeatmapView`] and
//! [`StructureViewerAdapter`]. It holds the only copy of the shared
//! [`Selection`], receives [`SyncEvent`]s from the embedder's event loop,
//! and invokes the corresponding operations on each view — the single
//! place where "current position" is defined. It is constructed once per
//! loaded page/session and passed by reference to all handlers; there are
//! no module-scope globals.

mod event;
mod selection;

pub use event::SyncEvent;
pub use selection::Selection;

use crate::error::MutviewError;
use crate::heatmap::HeatmapView;
use crate::options::Options;
use crate::score::{ScoreTable, ALPHABET};
use crate::viewer::{
    BackendEvent, LoadToken, StructureViewerAdapter, ViewerSignal,
};

/// Owns the heatmap view, the structure-viewer adapter, and the shared
/// selection state.
pub struct SyncSession {
    heatmap: HeatmapView,
    viewer: StructureViewerAdapter,
    selection: Selection,
    window_margin: usize,
    highlight_color: [f32; 3],
    selection_color: [f32; 3],
}

impl SyncSession {
    /// Assemble a session from its two views.
    #[must_use]
    pub fn new(
        heatmap: HeatmapView,
        viewer: StructureViewerAdapter,
        options: &Options,
    ) -> Self {
        Self {
            heatmap,
            viewer,
            selection: Selection::Idle,
            window_margin: options.display.window_margin,
            highlight_color: options.colors.highlight,
            selection_color: options.colors.selection,
        }
    }

    /// Render a score table into the heatmap and start loading the
    /// matching structure.
    ///
    /// # Errors
    ///
    /// [`MutviewError::StructureLoad`] when the structure load cannot be
    /// started; the heatmap keeps its rendered state either way.
    pub fn load(
        &mut self,
        table: &ScoreTable,
        title: &str,
        accession: &str,
    ) -> Result<LoadToken, MutviewError> {
        self.selection = Selection::Idle;
        self.heatmap.render(table, &ALPHABET, title);
        self.viewer.initialize(accession)
    }

    /// Apply one synchronization event.
    ///
    /// This is the coordination state machine: clicks from either view
    /// run the full selection transition, hovers move only the transient
    /// highlights, and [`SyncEvent::Clear`] is the explicit idle
    /// re-entry.
    pub fn dispatch(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::HeatmapClick { position }
            | SyncEvent::ViewerClick { position } => {
                self.select_position(position);
            }
            SyncEvent::ViewerHover { position } => {
                self.heatmap.highlight_column(position);
                self.viewer
                    .highlight_residue(position, self.highlight_color);
            }
            SyncEvent::Clear => {
                self.selection = Selection::Idle;
                self.heatmap.clear_highlight();
                self.viewer.clear_marks();
                log::debug!("selection cleared");
            }
        }
    }

    /// The full click transition, identical for both click sources:
    /// window, persistent select, then both highlights.
    fn select_position(&mut self, position: usize) {
        self.selection = Selection::Position(position);
        self.heatmap
            .set_visible_range(position, self.window_margin);
        self.viewer
            .select_residue(position, self.selection_color);
        self.heatmap.highlight_column(position);
        self.viewer
            .highlight_residue(position, self.highlight_color);
        log::debug!("position {position} selected");
    }

    /// Entry point for the heatmap surface's native click stream: fans
    /// the click out to the view's subscribers, then runs the selection
    /// transition.
    pub fn notify_heatmap_click(&mut self, position: usize) {
        self.heatmap.notify_click(position);
        self.dispatch(SyncEvent::HeatmapClick { position });
    }

    /// Entry point for native structure-backend events: the adapter
    /// translates and fans them out, and any resulting position signal is
    /// dispatched.
    pub fn handle_viewer_event(&mut self, event: BackendEvent) {
        match self.viewer.handle_backend_event(event) {
            Some(ViewerSignal::Hover(position)) => {
                self.dispatch(SyncEvent::ViewerHover { position });
            }
            Some(ViewerSignal::Click(position)) => {
                self.dispatch(SyncEvent::ViewerClick { position });
            }
            None => {}
        }
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Read-only access to the heatmap view.
    #[must_use]
    pub fn heatmap(&self) -> &HeatmapView {
        &self.heatmap
    }

    /// Mutable access to the heatmap view (e.g. to add subscribers).
    pub fn heatmap_mut(&mut self) -> &mut HeatmapView {
        &mut self.heatmap
    }

    /// Read-only access to the viewer adapter.
    #[must_use]
    pub fn viewer(&self) -> &StructureViewerAdapter {
        &self.viewer
    }

    /// Mutable access to the viewer adapter (e.g. to switch color
    /// schemes).
    pub fn viewer_mut(&mut self) -> &mut StructureViewerAdapter {
        &mut self.viewer
    }
}

impl std::fmt::Debug for SyncSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncSession")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::heatmap::{HeatmapFrame, HeatmapSurface, HighlightShape};
    use crate::score::{parse, PositionRecord};
    use crate::viewer::{
        ComponentId, LoadToken, Presentation, StructureBackend, ThemeSpec,
    };

    /// One ordered call log shared by both test doubles, so cross-view
    /// causal order is observable.
    type SharedLog = Rc<RefCell<Vec<String>>>;

    struct LoggingSurface {
        log: SharedLog,
    }

    impl HeatmapSurface for LoggingSurface {
        fn draw(&mut self, frame: &HeatmapFrame<'_>) {
            self.log
                .borrow_mut()
                .push(format!("surface.draw {}", frame.matrix.len()));
        }

        fn set_x_range(&mut self, min: f64, max: f64) {
            self.log
                .borrow_mut()
                .push(format!("surface.range {min} {max}"));
        }

        fn set_highlight(&mut self, shape: Option<HighlightShape>) {
            let entry = shape.map_or_else(
                || "surface.highlight none".to_owned(),
                |s| format!("surface.highlight {} {}", s.x0, s.x1),
            );
            self.log.borrow_mut().push(entry);
        }
    }

    struct LoggingBackend {
        log: SharedLog,
    }

    impl StructureBackend for LoggingBackend {
        fn begin_load(
            &mut self,
            _url: &str,
            _token: LoadToken,
        ) -> Result<(), MutviewError> {
            self.log.borrow_mut().push("backend.load".to_owned());
            Ok(())
        }

        fn apply_presentation(&mut self, _presentation: &Presentation) {
            self.log.borrow_mut().push("backend.present".to_owned());
        }

        fn polymer_components(&self) -> Vec<ComponentId> {
            Vec::new()
        }

        fn set_component_theme(
            &mut self,
            _component: ComponentId,
            _theme: &ThemeSpec<'_>,
        ) {
        }

        fn focus_residue(&mut self, chain: &str, residue: i64) {
            self.log
                .borrow_mut()
                .push(format!("backend.focus {chain}{residue}"));
        }

        fn select_residue(
            &mut self,
            chain: &str,
            residue: i64,
            _color: [f32; 3],
        ) {
            self.log
                .borrow_mut()
                .push(format!("backend.select {chain}{residue}"));
        }

        fn highlight_residue(
            &mut self,
            chain: &str,
            residue: i64,
            _color: [f32; 3],
        ) {
            self.log
                .borrow_mut()
                .push(format!("backend.highlight {chain}{residue}"));
        }

        fn clear_marks(&mut self) {
            self.log.borrow_mut().push("backend.clear".to_owned());
        }
    }

    fn table(positions: usize) -> ScoreTable {
        let records: Vec<PositionRecord> = (0..positions)
            .map(|i| {
                PositionRecord::from_pairs([(
                    "A".to_owned(),
                    format!("{i}.0"),
                )])
            })
            .collect();
        parse(&records).unwrap()
    }

    fn session(positions: usize) -> (SyncSession, SharedLog, LoadToken) {
        let log: SharedLog = Rc::new(RefCell::new(Vec::new()));
        let options = Options::default();
        let heatmap = HeatmapView::new(
            Box::new(LoggingSurface { log: Rc::clone(&log) }),
            options.display.clone(),
        );
        let viewer = StructureViewerAdapter::new(
            Box::new(LoggingBackend { log: Rc::clone(&log) }),
            &options.viewer,
            &options.colors,
        );
        let mut session = SyncSession::new(heatmap, viewer, &options);
        let token =
            session.load(&table(positions), "LLR", "P38398").unwrap();
        log.borrow_mut().clear();
        (session, log, token)
    }

    #[test]
    fn heatmap_click_runs_the_full_transition_in_causal_order() {
        let (mut session, log, _) = session(400);

        session.dispatch(SyncEvent::HeatmapClick { position: 7 });

        // Window, persistent select, heatmap highlight, viewer highlight —
        // exactly one call each, in that order (default margin 50,
        // default residue offset +1).
        assert_eq!(
            *log.borrow(),
            vec![
                "surface.range 0 57",
                "backend.select A8",
                "surface.highlight 6.5 7.5",
                "backend.highlight A8",
            ]
        );
        assert_eq!(session.selection(), Selection::Position(7));
    }

    #[test]
    fn viewer_click_is_symmetric_with_heatmap_click() {
        let (mut session, log, _) = session(400);

        session.handle_viewer_event(BackendEvent::Click {
            chain: "A".to_owned(),
            residue: 8,
        });

        assert_eq!(
            *log.borrow(),
            vec![
                "surface.range 0 57",
                "backend.select A8",
                "surface.highlight 6.5 7.5",
                "backend.highlight A8",
            ]
        );
        assert_eq!(session.selection(), Selection::Position(7));
    }

    #[test]
    fn hover_moves_highlights_only() {
        let (mut session, log, _) = session(400);

        session.handle_viewer_event(BackendEvent::Hover {
            chain: "A".to_owned(),
            residue: 4,
        });

        assert_eq!(
            *log.borrow(),
            vec!["surface.highlight 2.5 3.5", "backend.highlight A4"]
        );
        // No range change, no persistent select, no selection change.
        assert!(session.selection().is_idle());
    }

    #[test]
    fn hover_does_not_disturb_an_existing_selection() {
        let (mut session, _, _) = session(400);

        session.dispatch(SyncEvent::HeatmapClick { position: 7 });
        session.dispatch(SyncEvent::ViewerHover { position: 3 });

        assert_eq!(session.selection(), Selection::Position(7));
        assert_eq!(session.heatmap().highlighted(), Some(3));
    }

    #[test]
    fn clear_returns_to_idle_and_removes_marks() {
        let (mut session, log, _) = session(400);

        session.dispatch(SyncEvent::HeatmapClick { position: 7 });
        log.borrow_mut().clear();
        session.dispatch(SyncEvent::Clear);

        assert_eq!(
            *log.borrow(),
            vec!["surface.highlight none", "backend.clear"]
        );
        assert!(session.selection().is_idle());
        assert_eq!(session.heatmap().highlighted(), None);
    }

    #[test]
    fn reselection_replaces_the_selected_position() {
        let (mut session, _, _) = session(400);

        session.dispatch(SyncEvent::HeatmapClick { position: 7 });
        session.dispatch(SyncEvent::ViewerClick { position: 9 });

        assert_eq!(session.selection(), Selection::Position(9));
        assert_eq!(session.heatmap().highlighted(), Some(9));
    }

    #[test]
    fn native_heatmap_click_reaches_subscribers_and_selects() {
        let (mut session, _, _) = session(400);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = session
            .heatmap_mut()
            .on_click(move |p| sink.borrow_mut().push(p));

        session.notify_heatmap_click(11);

        assert_eq!(*seen.borrow(), vec![11]);
        assert_eq!(session.selection(), Selection::Position(11));
    }

    #[test]
    fn load_renders_then_starts_the_structure_load() {
        let log: SharedLog = Rc::new(RefCell::new(Vec::new()));
        let options = Options::default();
        let heatmap = HeatmapView::new(
            Box::new(LoggingSurface { log: Rc::clone(&log) }),
            options.display.clone(),
        );
        let viewer = StructureViewerAdapter::new(
            Box::new(LoggingBackend { log: Rc::clone(&log) }),
            &options.viewer,
            &options.colors,
        );
        let mut session = SyncSession::new(heatmap, viewer, &options);

        let _token =
            session.load(&table(8), "LLR", "P38398").unwrap();

        let entries = log.borrow();
        assert_eq!(entries[0], "surface.draw 8");
        assert!(entries.contains(&"backend.load".to_owned()));
    }

    #[test]
    fn stale_load_completion_does_not_mark_loaded() {
        let (mut session, _, stale) = session(8);
        let _fresh = session.viewer_mut().initialize("Q9Y6K9").unwrap();

        session
            .handle_viewer_event(BackendEvent::LoadComplete { token: stale });

        assert!(!session.viewer().is_loaded());
    }
}
