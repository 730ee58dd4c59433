//! Boxed comment banners for generated C artifacts.
//!
//! Every generated C file opens with a fixed-width `/* ... */` block: a
//! solid border, blank lines, the title, the render timestamp, and a
//! subtitle. Layout is driven by [`CommentStyle`].

use chrono::{Local, NaiveDateTime};

/// Layout parameters for the boxed comment banner.
#[derive(Debug, Clone)]
pub struct CommentStyle {
    /// Total column width of the block, borders included.
    pub column_width: usize,
    /// Blank comment lines before the title.
    pub pre_text_blank_lines: usize,
    /// Blank comment lines after the subtitle.
    pub post_text_blank_lines: usize,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self {
            column_width: 80,
            pre_text_blank_lines: 1,
            post_text_blank_lines: 1,
        }
    }
}

/// The solid `/***...***/` border line.
pub fn solid_line(style: &CommentStyle) -> String {
    let mut line = String::with_capacity(style.column_width + 1);
    line.push('/');
    for _ in 0..style.column_width.saturating_sub(2) {
        line.push('*');
    }
    line.push('/');
    line.push('\n');
    line
}

/// A single comment line, space-padded out to the column width.
///
/// Text wider than the column is NOT truncated: the padding loop simply
/// never runs and the closer lands past the border column. Overflow is the
/// defined behavior for long titles.
pub fn comment_line(style: &CommentStyle, text: &str) -> String {
    let mut line = String::from("/* ");
    line.push_str(text);
    while line.chars().count() < style.column_width.saturating_sub(2) {
        line.push(' ');
    }
    line.push_str("*/\n");
    line
}

/// The full banner block: border, blank lines, title, timestamp, subtitle,
/// blank lines, border. The timestamp is captured at call time.
pub fn banner(style: &CommentStyle, title: &str, subtitle: &str) -> String {
    banner_at(style, title, subtitle, &Local::now().naive_local())
}

fn banner_at(style: &CommentStyle, title: &str, subtitle: &str, at: &NaiveDateTime) -> String {
    let mut block = solid_line(style);
    for _ in 0..style.pre_text_blank_lines {
        block.push_str(&comment_line(style, ""));
    }
    block.push_str(&comment_line(style, title));
    block.push_str(&comment_line(
        style,
        &at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ));
    block.push_str(&comment_line(style, subtitle));
    for _ in 0..style.post_text_blank_lines {
        block.push_str(&comment_line(style, ""));
    }
    block.push_str(&solid_line(style));
    block
}
