//! Error adapter for converting ChanvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Malformed channel
//! documents are reported with the offending YAML location highlighted.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use chanviz::{ChanvizError, channel::ChannelError};

/// Adapter wrapping a [`ChanvizError`] as a [`MietteDiagnostic`].
pub struct ErrorAdapter<'a>(pub &'a ChanvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChanvizError::InputUnreadable { .. } => "chanviz::input_unreadable",
            ChanvizError::InputMalformed { .. } => "chanviz::input_malformed",
            ChanvizError::Channel(ChannelError::EmptyChannel) => "chanviz::empty_channel",
            ChanvizError::Channel(ChannelError::InvalidHead { .. }) => "chanviz::invalid_head",
            ChanvizError::Config(_) => "chanviz::config",
            ChanvizError::Output(_) => "chanviz::output",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ChanvizError::InputMalformed { .. } => {
                "expected a mapping with a `versions` list and an optional `tombstones` list"
            }
            ChanvizError::Channel(ChannelError::EmptyChannel) => {
                "list at least one version under `versions`"
            }
            ChanvizError::Channel(ChannelError::InvalidHead { .. }) => {
                "the last version is the channel head; remove it from `tombstones` or append a newer version"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            ChanvizError::InputMalformed { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ChanvizError::InputMalformed { err, src } = &self.0 else {
            return None;
        };
        let location = err.location()?;
        let span = location_to_miette(location.index(), src);

        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Convert a byte offset into `src` to a miette [`SourceSpan`] one character wide.
fn location_to_miette(index: usize, src: &str) -> SourceSpan {
    let mut index = index.min(src.len());
    while !src.is_char_boundary(index) {
        index -= 1;
    }
    let len = src[index..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::new(index.into(), len)
}
