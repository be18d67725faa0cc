// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
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
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// Tests are allowed to unwrap
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Frame-driven motion engine for a terminal-styled document browser.
//!
//! Drift computes every visual transition of the browser: a continuous
//! floating simulation that blends idle sway, pointer parallax and press
//! tilt, plus one-shot transitions (directional moves, mask fades, and a
//! portal that grows toward a target that keeps moving while it plays).
//!
//! # Key entry points
//!
//! - [`floating::FloatingSimulator`] - per-surface floating simulation
//! - [`transition`] - directional, fade and portal primitives
//! - [`list::ListReconciler`] - enter/exit tagging for keyed lists
//! - [`animation::FrameDriver`] - frame loops with idempotent cancellation
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`shell`] - the terminal command interpreter and history log
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. Each animated thing is
//! a [`animation::FrameTask`] armed on a [`animation::FrameDriver`]; the
//! host calls [`animation::FrameDriver::tick`] once per display frame
//! (the `web` feature pumps it from `requestAnimationFrame`). Pointer
//! handlers mutate simulator targets between frames and the next frame
//! picks the change up. Layout reads and style writes go through the
//! [`geometry::LayoutProbe`] and surface traits so the core runs headless.

pub mod animation;
pub mod error;
pub mod floating;
pub mod geometry;
pub mod input;
pub mod list;
pub mod options;
pub mod shell;
pub mod transition;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::DriftError;
