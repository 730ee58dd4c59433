//! Compile-time embedded templates for artifact generation.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/cforge-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here,
//! and do not edit a `.tmpl` without checking that its Handlebars variables still match
//! what the renderer passes in.

// -------------------------------------------------------
// Parameterized fragments (Handlebars)
// -------------------------------------------------------

pub const MAIN_FUNCTION: &str = include_str!("../../../../templates/source/main.c.tmpl");
pub const MAIN_FUNCTION_MMAP: &str = include_str!("../../../../templates/source/main_mmap.c.tmpl");
pub const HEADER_MACROS: &str = include_str!("../../../../templates/header/macros.h.tmpl");
pub const MAKEFILE: &str = include_str!("../../../../templates/build/Makefile.tmpl");

// -------------------------------------------------------
// Fixed utility module (written verbatim)
// -------------------------------------------------------

pub const UTILITY_HEADER: &str = include_str!("../../../../templates/utility/utils.h");
pub const UTILITY_SOURCE: &str = include_str!("../../../../templates/utility/utils.c");
