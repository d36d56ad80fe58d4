//! Chanviz - upgrade graphs for update channels.
//!
//! Loads a channel document, derives which releases replace and skip which,
//! and renders the result as a Mermaid flowchart in which retired
//! ("tombstoned") releases stay visible but muted.

pub mod config;
pub mod document;
pub mod render;

mod error;

pub use chanviz_core::{channel, graph};

pub use error::ChanvizError;

use log::{debug, info, trace};

use channel::Channel;
use config::AppConfig;
use document::ChannelDocument;
use graph::GraphDescription;
use render::DiagramRenderer;

/// Builder for parsing channels and rendering their upgrade graphs.
///
/// # Examples
///
/// ```rust
/// use chanviz::{ChannelGraphBuilder, config::AppConfig};
///
/// let source = "versions: [v1, v2, v3]\ntombstones: [v2]";
///
/// let builder = ChannelGraphBuilder::new(AppConfig::default());
/// let channel = builder.parse(source).expect("Failed to parse");
/// let diagram = builder.render(&channel);
///
/// assert!(diagram.starts_with("graph RL"));
/// assert!(diagram.contains("v3 -- skips --> v2"));
/// ```
#[derive(Default)]
pub struct ChannelGraphBuilder {
    config: AppConfig,
}

impl ChannelGraphBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse and validate a YAML channel document.
    ///
    /// # Errors
    ///
    /// Returns `ChanvizError` if the document is malformed, lists no
    /// versions, or tombstones its head version.
    pub fn parse(&self, source: &str) -> Result<Channel, ChanvizError> {
        info!("Parsing channel document");

        let channel = ChannelDocument::from_yaml(source)?.into_channel()?;

        debug!(
            versions = channel.versions().len(),
            head = channel.head();
            "Channel validated"
        );
        trace!(channel:?; "Parsed channel");

        Ok(channel)
    }

    /// Derive the upgrade graph of `channel` and render it.
    ///
    /// The returned text has no trailing newline.
    pub fn render(&self, channel: &Channel) -> String {
        let graph = GraphDescription::derive(channel);
        trace!(graph:?; "Derived graph");

        DiagramRenderer::new(&self.config).render(&graph)
    }
}
