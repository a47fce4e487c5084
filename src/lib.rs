// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Substitution-effect heatmap synchronized with a 3D structure view.
//!
//! Mutview turns a per-residue amino-acid substitution score table (LLR
//! scores from a protein language model or a deep mutational scan) into a
//! position-indexed matrix, renders it through a pluggable heatmap
//! surface, and keeps the "current sequence position" consistent between
//! that heatmap and a 3D molecular structure viewer, in both directions.
//!
//! # Key entry points
//!
//! - [`session::SyncSession`] - owns both views and the selection state;
//!   feed it [`session::SyncEvent`]s from your event loop
//! - [`score::parse`] - raw position records to matrix, axis labels, and
//!   per-position aggregates
//! - [`heatmap::HeatmapView`] / [`viewer::StructureViewerAdapter`] - the
//!   two view-side components, each wrapping an embedder-supplied backend
//! - [`options::Options`] - runtime configuration (display, colors,
//!   viewer, sources)
//!
//! # Architecture
//!
//! The rendering engines themselves are external: the heatmap painter
//! implements [`heatmap::HeatmapSurface`] and the molecular viewer
//! implements [`viewer::StructureBackend`]. What this crate owns is the
//! data transformation and the synchronization contract between the two
//! views: which one reacts how when the user clicks or hovers a sequence
//! position in the other.

pub mod error;
pub mod events;
pub mod heatmap;
pub mod options;
pub mod score;
pub mod session;
pub mod source;
pub mod viewer;

pub use error::MutviewError;
pub use session::{SyncEvent, SyncSession};
