//! Upgrade-graph derivation.
//!
//! [`GraphDescription::derive`] turns a [`Channel`] into the pieces of an
//! upgrade diagram:
//!
//! - **Nodes**: every version that is not tombstoned, in channel order.
//! - **Replaces edges**: each surviving version replaces the surviving version
//!   right before it.
//! - **Skip edges**: each tombstoned version is skipped by the first surviving
//!   version after it, so nothing beyond a retired release becomes unreachable.
//! - **Styled nodes**: tombstoned versions, drawn as retired instead of omitted.
//!
//! # Example
//!
//! ```
//! use chanviz_core::{channel::Channel, graph::GraphDescription};
//!
//! let channel = Channel::new(
//!     vec!["v1".to_string(), "v2".to_string(), "v3".to_string()],
//!     vec!["v2".to_string()],
//! )
//! .unwrap();
//!
//! let graph = GraphDescription::derive(&channel);
//! assert_eq!(graph.nodes(), ["v1", "v3"]);
//! assert_eq!(graph.skip_edges()[0].to(), "v3");
//! assert_eq!(graph.skip_edges()[0].from(), "v2");
//! ```

use log::{debug, trace};

use crate::channel::Channel;

/// `newer` supersedes `older` in the surviving upgrade chain.
///
/// Edges only come out of [`GraphDescription::derive`]:
///
/// ```compile_fail
/// use chanviz_core::graph::ReplacesEdge;
///
/// let _ = ReplacesEdge::new("v2", "v1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacesEdge<'a> {
    newer: &'a str,
    older: &'a str,
}

impl<'a> ReplacesEdge<'a> {
    pub(crate) fn new(newer: &'a str, older: &'a str) -> Self {
        Self { newer, older }
    }

    pub fn newer(&self) -> &'a str {
        self.newer
    }

    pub fn older(&self) -> &'a str {
        self.older
    }
}

/// The surviving version `to` is reachable by skipping the retired `from`.
///
/// Like [`ReplacesEdge`], only built by [`GraphDescription::derive`]:
///
/// ```compile_fail
/// use chanviz_core::graph::SkipEdge;
///
/// let _ = SkipEdge::new("v3", "v2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipEdge<'a> {
    to: &'a str,
    from: &'a str,
}

impl<'a> SkipEdge<'a> {
    pub(crate) fn new(to: &'a str, from: &'a str) -> Self {
        Self { to, from }
    }

    pub fn to(&self) -> &'a str {
        self.to
    }

    pub fn from(&self) -> &'a str {
        self.from
    }
}

/// The derived upgrade graph of a channel.
///
/// Identifiers are borrowed from the [`Channel`] the graph was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription<'a> {
    nodes: Vec<&'a str>,
    replaces_edges: Vec<ReplacesEdge<'a>>,
    skip_edges: Vec<SkipEdge<'a>>,
    styled_nodes: Vec<&'a str>,
}

impl<'a> GraphDescription<'a> {
    /// Derives the upgrade graph of `channel`.
    ///
    /// This never fails: the channel invariants (non-empty, live head) are
    /// enforced when the [`Channel`] is built.
    pub fn derive(channel: &'a Channel) -> Self {
        let versions = channel.versions();

        let nodes: Vec<&'a str> = versions
            .iter()
            .map(String::as_str)
            .filter(|v| !channel.is_tombstoned(v))
            .collect();

        let replaces_edges: Vec<_> = nodes
            .windows(2)
            .map(|pair| ReplacesEdge::new(pair[1], pair[0]))
            .collect();

        let skip_edges = derive_skip_edges(channel);

        let styled_nodes: Vec<&'a str> = versions
            .iter()
            .map(String::as_str)
            .filter(|v| channel.is_tombstoned(v))
            .collect();

        debug!(
            nodes = nodes.len(),
            replaces_edges = replaces_edges.len(),
            skip_edges = skip_edges.len(),
            styled_nodes = styled_nodes.len();
            "Derived upgrade graph"
        );

        Self {
            nodes,
            replaces_edges,
            skip_edges,
            styled_nodes,
        }
    }

    /// Non-tombstoned versions, in channel order.
    pub fn nodes(&self) -> &[&'a str] {
        &self.nodes
    }

    /// Replaces edges, oldest pair first.
    pub fn replaces_edges(&self) -> &[ReplacesEdge<'a>] {
        &self.replaces_edges
    }

    /// Skip edges, in the order their retired versions appear in the channel.
    pub fn skip_edges(&self) -> &[SkipEdge<'a>] {
        &self.skip_edges
    }

    /// Tombstoned versions, in channel order.
    pub fn styled_nodes(&self) -> &[&'a str] {
        &self.styled_nodes
    }
}

/// Scans the full version list with a `from`/`to` cursor pair.
///
/// `to` always rests on a surviving version; every tombstoned version in
/// `from..to` is skipped by it. After each window `to` itself is stepped
/// over, since a surviving version is never the source of a skip.
fn derive_skip_edges(channel: &Channel) -> Vec<SkipEdge<'_>> {
    let versions = channel.versions();
    let mut edges = Vec::new();

    let (mut from, mut to) = (0, 1);
    while to < versions.len() {
        while to < versions.len() && channel.is_tombstoned(&versions[to]) {
            to += 1;
        }
        // Unreachable for a valid channel: the head is never tombstoned.
        let Some(target) = versions.get(to) else {
            break;
        };

        while from < to {
            let skipped = &versions[from];
            if channel.is_tombstoned(skipped) {
                trace!(to = target.as_str(), from = skipped.as_str(); "Skip edge");
                edges.push(SkipEdge::new(target, skipped));
            }
            from += 1;
        }

        from += 1;
        to += 2;
    }

    edges
}
