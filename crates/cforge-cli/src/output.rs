//! Terminal output formatting for the cforge CLI.
//!
//! Consistent, colored output using the [`console`] crate.

use console::style;

/// Print the final success marker.
pub fn print_ok() {
    println!("{}", style("[Ok]").green().bold());
}

/// Print an error message prefixed with red `[Error]`.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[Error]").red().bold(), text);
}
