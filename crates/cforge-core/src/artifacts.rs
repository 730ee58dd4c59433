//! Fragment renderers and artifact assembly.
//!
//! The fragment functions mirror the pieces of a generated file: the fixed
//! includes block, the main function (plain or file-mapping variant), the
//! `AUTO_BUILD_*` macro block, and the single-rule Makefile. [`render`]
//! composes them with the comment banner into complete file contents for
//! each [`ArtifactKind`].
//!
//! Every fragment carries its parameters verbatim: the stem is substituted
//! unescaped wherever it appears, whatever characters it contains.

use chrono::{Local, NaiveDateTime};
use serde_json::json;

use crate::banner::{self, CommentStyle};
use crate::error::Result;
use crate::request::GenerationRequest;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// One generated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    UtilityHeader,
    UtilitySource,
    MainSource,
    HeaderFile,
    Makefile,
}

impl ArtifactKind {
    /// File name of this artifact inside the project directory.
    pub fn file_name(&self, stem: &str) -> String {
        match self {
            Self::UtilityHeader => "utils.h".into(),
            Self::UtilitySource => "utils.c".into(),
            Self::MainSource => format!("{stem}.c"),
            Self::HeaderFile => format!("{stem}.h"),
            Self::Makefile => "Makefile".into(),
        }
    }
}

/// The artifacts to produce for `request`, in generation order: utility
/// header, utility source, main source, header file, Makefile.
pub fn plan(request: &GenerationRequest) -> Vec<ArtifactKind> {
    let mut kinds = Vec::new();
    if request.include_utility {
        kinds.push(ArtifactKind::UtilityHeader);
        kinds.push(ArtifactKind::UtilitySource);
    }
    kinds.push(ArtifactKind::MainSource);
    if request.include_header {
        kinds.push(ArtifactKind::HeaderFile);
    }
    if request.include_makefile {
        kinds.push(ArtifactKind::Makefile);
    }
    kinds
}

/// Render the complete contents of one artifact.
pub fn render(
    kind: ArtifactKind,
    request: &GenerationRequest,
    renderer: &TemplateRenderer,
) -> Result<String> {
    match kind {
        ArtifactKind::UtilityHeader => Ok(render_utility_header()),
        ArtifactKind::UtilitySource => Ok(render_utility_source()),
        ArtifactKind::MainSource => render_main_source(request, renderer),
        ArtifactKind::HeaderFile => render_header_file(&request.stem, renderer),
        ArtifactKind::Makefile => {
            let mut sources = vec![format!("{}.c", request.stem)];
            if request.include_utility {
                sources.push("utils.c".into());
            }
            render_build_file(&request.stem, &sources, renderer)
        }
    }
}

/// The fixed includes block, plus one `#include <...>` line per extra entry,
/// in input order.
pub fn render_includes(extra: &[&str]) -> String {
    let mut block = String::from("#include <stdio.h>\n#include <stdint.h>\n");
    for inc in extra {
        block.push_str(&format!("#include <{inc}>\n"));
    }
    block
}

/// The main function body.
///
/// The file-mapping variant keeps the single-exit discipline of the
/// generated C: one `cleanup:` label that unmaps and returns, reached either
/// by fall-through or by a forward jump from the usage-error and map-failure
/// branches.
pub fn render_main_function(
    name: &str,
    with_file_mapping: bool,
    renderer: &TemplateRenderer,
) -> Result<String> {
    let template = if with_file_mapping {
        embedded::MAIN_FUNCTION_MMAP
    } else {
        embedded::MAIN_FUNCTION
    };
    renderer.render(template, &json!({ "name": name }))
}

/// The three `AUTO_BUILD_*` macro definitions, date and time captured now.
pub fn render_header_macros(name: &str, renderer: &TemplateRenderer) -> Result<String> {
    render_header_macros_at(name, renderer, &Local::now().naive_local())
}

fn render_header_macros_at(
    name: &str,
    renderer: &TemplateRenderer,
    at: &NaiveDateTime,
) -> Result<String> {
    renderer.render(
        embedded::HEADER_MACROS,
        &json!({
            "name": name,
            "build_date": at.format("%Y-%m-%d").to_string(),
            "build_time": at.format("%H:%M:%S").to_string(),
        }),
    )
}

/// The single-rule Makefile compiling `sources` into `target`, in the order
/// given. No header dependencies are emitted.
pub fn render_build_file(
    target: &str,
    sources: &[String],
    renderer: &TemplateRenderer,
) -> Result<String> {
    renderer.render(
        embedded::MAKEFILE,
        &json!({ "target": target, "files": sources }),
    )
}

/// The fixed utility header, fronted by its own banner.
pub fn render_utility_header() -> String {
    let mut out = banner::banner(&CommentStyle::default(), "utils", "");
    out.push_str(embedded::UTILITY_HEADER);
    out
}

/// The fixed utility source, fronted by its own banner.
pub fn render_utility_source() -> String {
    let mut out = banner::banner(&CommentStyle::default(), "utils", "");
    out.push_str(embedded::UTILITY_SOURCE);
    out
}

fn render_main_source(request: &GenerationRequest, renderer: &TemplateRenderer) -> Result<String> {
    let mut out = banner::banner(&CommentStyle::default(), &request.stem, "");
    out.push_str(&render_includes(&[]));
    if request.include_header {
        out.push_str(&format!("#include \"{}.h\"\n", request.stem));
    }
    if request.include_utility {
        out.push_str("#include \"utils.h\"\n");
    }
    out.push_str("\n\n");
    out.push_str(&render_main_function(
        &request.stem,
        request.include_utility,
        renderer,
    )?);
    Ok(out)
}

fn render_header_file(stem: &str, renderer: &TemplateRenderer) -> Result<String> {
    let mut out = banner::banner(&CommentStyle::default(), stem, "");
    out.push_str("#pragma once\n\n");
    out.push_str("\n\n");
    out.push_str(&render_header_macros(stem, renderer)?);
    out.push_str("\n\n");
    Ok(out)
}
