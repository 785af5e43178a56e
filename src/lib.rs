// THEORY:
// This file is the main entry point for the `visual_diff` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (a GUI shell, a test harness,
// or the bundled example runner binary).
//
// The primary goal is to export the `ComparisonPipeline` and its associated data
// structures (`DiffReport`, `DiffRegion`, `HighlightStyle`, `DiffError`) as the
// clean, high-level interface for the entire diff engine. The internal modules
// (`core_modules`) are organized by responsibility — canvas normalization,
// region extraction, composite rendering, reporting — and accessible for
// consumers that want to drive the stages individually.

pub mod core_modules;
pub mod pipeline;
