//! Document framing: wraps rendered clips in `@startuml`/`@enduml` output.

use std::io::{self, Write};

use thiserror::Error;

use crate::clip::Clip;
use crate::layers::Layers;

/// Failure while writing a framed document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to write diagram output")]
    Io(#[from] io::Error),
}

/// Reading direction of the diagram layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

/// Edge line routing directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineMode {
    #[default]
    Default,
    Orthogonal,
    Polyline,
}

/// A framed diagram document: directives plus tagged clips.
#[derive(Debug, Default)]
pub struct Document {
    /// Optional diagram name on the `@startuml` line.
    pub name: Option<String>,
    pub title: Option<String>,
    pub direction: Direction,
    pub line_mode: LineMode,
    /// Raw style block emitted before the clips.
    pub styles: Option<String>,
    /// Comment lines (`' `-prefixed) above the document.
    pub header_comment: Option<String>,
    /// Text of a trailing `note as footer` block.
    pub footer_note: Option<String>,
    pub clips: Vec<(Clip, Layers)>,
}

impl Document {
    pub fn new(clips: Vec<(Clip, Layers)>) -> Self {
        Self {
            clips,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }

    pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = Some(styles.into());
        self
    }

    pub fn with_header_comment(mut self, comment: impl Into<String>) -> Self {
        self.header_comment = Some(comment.into());
        self
    }

    pub fn with_footer_note(mut self, note: impl Into<String>) -> Self {
        self.footer_note = Some(note.into());
        self
    }
}

/// Write clips inside a bare `@startuml`/`@enduml` frame.
pub fn write_clips<W: Write>(out: &mut W, clips: &[(Clip, Layers)]) -> Result<(), DocumentError> {
    out.write_all(b"@startuml\n")?;
    for (clip, layer) in clips {
        out.write_all(clip.render_with(*layer).as_bytes())?;
    }
    out.write_all(b"\n@enduml")?;
    Ok(())
}

/// Write a full document: comments, directives, clips, footer.
pub fn write_document<W: Write>(out: &mut W, document: &Document) -> Result<(), DocumentError> {
    if let Some(comment) = &document.header_comment {
        for line in comment.lines() {
            writeln!(out, "' {line}")?;
        }
    }

    match &document.name {
        Some(name) => writeln!(out, "@startuml {name}")?,
        None => writeln!(out, "@startuml")?,
    }
    if let Some(title) = &document.title {
        writeln!(out, "title {title}")?;
    }
    if document.direction == Direction::LeftToRight {
        writeln!(out, "left to right direction")?;
    }
    match document.line_mode {
        LineMode::Orthogonal => writeln!(out, "skinparam linetype ortho")?,
        LineMode::Polyline => writeln!(out, "skinparam linetype polyline")?,
        LineMode::Default => {}
    }
    if let Some(styles) = &document.styles {
        writeln!(out, "{styles}")?;
    }

    for (clip, layer) in &document.clips {
        out.write_all(clip.render_with(*layer).as_bytes())?;
    }

    if let Some(note) = &document.footer_note {
        write!(out, "\nnote as footer\n\t{note}\nend note")?;
    }
    out.write_all(b"\n@enduml")?;
    Ok(())
}
