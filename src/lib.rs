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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Selection and style control for DNA structure viewers.
//!
//! Strandview sits between a page's controls and a molecular viewer. It
//! keeps one residue selection, a hover marker, and the display toggles,
//! and re-derives the viewer's style from them on every change.
//!
//! # Key entry points
//!
//! - [`SelectionController`] - owns selection and display state and drives
//!   the engines
//! - [`structure::StructureEngine`] / [`scene::SceneRenderer`] - the
//!   capabilities a host viewer provides
//! - [`input::InputProcessor`] - turns page events into [`ViewerCommand`]s
//! - [`options::Options`] - runtime configuration (display, colors,
//!   geometry, labels, camera, key bindings)
//!
//! # Architecture
//!
//! Styling is never patched incrementally. Each change clears the
//! structure engine's styles and replays the full
//! [`controller::styling::display_plan`], so the drawn model is always a
//! pure function of the current options and selection. With the `web`
//! feature, `web::WebViewer` binds all of this to a 3Dmol.js viewer.

pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod structure;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{SelectionController, ViewerCommand};
pub use error::StrandError;
