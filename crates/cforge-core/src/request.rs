//! The generation request: which artifacts to produce for a given stem.

/// Immutable description of one scaffolding run.
///
/// The stem is used verbatim as the filename base, the printed string
/// literal, and the `AUTO_BUILD_NAME` macro value. No identifier validation
/// is performed; any non-empty string is accepted.
///
/// Timestamps are deliberately absent: each artifact captures the wall
/// clock at its own render time, so files generated by one run may carry
/// timestamps that differ by a tick.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub stem: String,
    pub include_header: bool,
    pub include_makefile: bool,
    pub include_utility: bool,
}

impl GenerationRequest {
    /// A request for the bare skeleton: main source only.
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            include_header: false,
            include_makefile: false,
            include_utility: false,
        }
    }
}
