//! Template system for cforge artifact generation.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module. The parameterized fragments are rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`];
//! the utility module files are written out verbatim.
//!
//! ## Template variables
//!
//! - `{{name}}` — the program stem
//! - `{{build_date}}` / `{{build_time}}` — captured from the render-time clock
//! - `{{target}}` / `{{files}}` — Makefile rule inputs
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay
//! in sync. The `include_str!` paths are relative to this file and checked at
//! compile-time.

pub mod embedded;
pub mod renderer;
