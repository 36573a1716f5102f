//! Banner rendering
//!
//! Turns titles into bordered, centered comment blocks. Rendering is pure:
//! a [`BannerRenderer`] returns lines, and writing them anywhere is the
//! caller's business (see [`BannerRenderer::write_major`]).

use crate::error::RenderError;
use crate::utils::text::{TextMeasure, center_text, fill_line};
use crate::utils::validation::validate_width;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_LEFT_MARKER: &str = "//";
pub const DEFAULT_RIGHT_MARKER: &str = "||";

/// Visual weight of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStyle {
    /// Double border of `=`, followed by a blank line
    Major,
    /// Single border of `-`, no padding
    Minor,
}

impl BannerStyle {
    pub fn fill(&self) -> char {
        match self {
            BannerStyle::Major => '=',
            BannerStyle::Minor => '-',
        }
    }

    /// Border lines drawn above (and again below) the title
    pub fn border_rows(&self) -> usize {
        match self {
            BannerStyle::Major => 2,
            BannerStyle::Minor => 1,
        }
    }
}

/// One rendered title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Banner {
    pub title: String,
    pub style: BannerStyle,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerRenderer {
    width: usize,
    left_marker: String,
    right_marker: String,
    minor_spacing: bool,
    measure: TextMeasure,
}

impl Default for BannerRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            left_marker: DEFAULT_LEFT_MARKER.to_string(),
            right_marker: DEFAULT_RIGHT_MARKER.to_string(),
            minor_spacing: false,
            measure: TextMeasure::Chars,
        }
    }
}

impl BannerRenderer {
    /// Create a renderer with the default markers
    pub fn new(width: usize) -> Result<Self, RenderError> {
        let width = validate_width(width)?;
        Ok(Self {
            width,
            ..Self::default()
        })
    }

    /// Set the markers written before and after every line
    pub fn with_markers(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_marker = left.into();
        self.right_marker = right.into();
        self
    }

    /// Append a blank line after each minor block as well
    pub fn with_minor_spacing(mut self, minor_spacing: bool) -> Self {
        self.minor_spacing = minor_spacing;
        self
    }

    /// Center titles by terminal display columns instead of code points
    pub fn with_display_columns(mut self, display_columns: bool) -> Self {
        self.measure = if display_columns {
            TextMeasure::Columns
        } else {
            TextMeasure::Chars
        };
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn framed(&self, body: &str) -> String {
        format!("{}{}{}", self.left_marker, body, self.right_marker)
    }

    pub fn border(&self, style: BannerStyle) -> String {
        self.framed(&fill_line(style.fill(), self.width))
    }

    pub fn title_line(&self, title: &str) -> String {
        self.framed(&center_text(title, self.width, self.measure))
    }

    fn trailing_blank(&self, style: BannerStyle) -> bool {
        match style {
            BannerStyle::Major => true,
            BannerStyle::Minor => self.minor_spacing,
        }
    }

    /// Lines of a single block, including its trailing blank line if any
    pub fn render_banner(&self, style: BannerStyle, title: &str) -> Banner {
        let border = self.border(style);
        let rows = style.border_rows();

        let mut lines = Vec::with_capacity(rows * 2 + 2);
        lines.extend(std::iter::repeat_n(border.clone(), rows));
        lines.push(self.title_line(title));
        lines.extend(std::iter::repeat_n(border, rows));
        if self.trailing_blank(style) {
            lines.push(String::new());
        }

        Banner {
            title: title.to_string(),
            style,
            lines,
        }
    }

    pub fn render_banners<S: AsRef<str>>(&self, style: BannerStyle, titles: &[S]) -> Vec<Banner> {
        titles
            .iter()
            .map(|title| self.render_banner(style, title.as_ref()))
            .collect()
    }

    pub fn render<S: AsRef<str>>(&self, style: BannerStyle, titles: &[S]) -> Vec<String> {
        self.render_banners(style, titles)
            .into_iter()
            .flat_map(|banner| banner.lines)
            .collect()
    }

    pub fn render_major<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        self.render(BannerStyle::Major, titles)
    }

    pub fn render_minor<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        self.render(BannerStyle::Minor, titles)
    }

    /// Write blocks to `out` one title at a time, in input order
    pub fn write<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        style: BannerStyle,
        titles: &[S],
    ) -> std::io::Result<()> {
        for title in titles {
            for line in self.render_banner(style, title.as_ref()).lines {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    pub fn write_major<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        titles: &[S],
    ) -> std::io::Result<()> {
        self.write(out, BannerStyle::Major, titles)
    }

    pub fn write_minor<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        titles: &[S],
    ) -> std::io::Result<()> {
        self.write(out, BannerStyle::Minor, titles)
    }
}
