//! The channel model.
//!
//! A [`Channel`] is an ordered list of release identifiers, oldest first, plus
//! the set of identifiers that have been retired ("tombstoned"). The last
//! version is the channel head and must always be installable.
//!
//! # Example
//!
//! ```
//! use chanviz_core::channel::Channel;
//!
//! let channel = Channel::new(
//!     vec!["v1".to_string(), "v2".to_string(), "v3".to_string()],
//!     vec!["v2".to_string()],
//! )
//! .expect("valid channel");
//!
//! assert_eq!(channel.head(), "v3");
//! assert!(channel.is_tombstoned("v2"));
//! assert!(!channel.is_tombstoned("v1"));
//! ```

use indexmap::IndexSet;
use log::debug;
use thiserror::Error;

/// Violations of the channel invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The channel lists no versions at all.
    #[error("at least one version is required")]
    EmptyChannel,

    /// The newest version is marked as tombstoned.
    #[error("head version \"{head}\" must not be tombstoned")]
    InvalidHead {
        /// The offending head version.
        head: String,
    },
}

/// A validated update channel.
///
/// Construction through [`Channel::new`] guarantees that `versions` is
/// non-empty and that the head is not tombstoned. The model is read-only
/// once built.
#[derive(Debug, Clone)]
pub struct Channel {
    versions: Vec<String>,
    tombstones: IndexSet<String>,
}

impl Channel {
    /// Creates a channel from its versions (oldest first) and tombstones.
    ///
    /// Tombstones that do not name any version are kept but have no effect.
    ///
    /// # Errors
    ///
    /// - [`ChannelError::EmptyChannel`] if `versions` is empty.
    /// - [`ChannelError::InvalidHead`] if the last version is tombstoned.
    pub fn new(
        versions: Vec<String>,
        tombstones: impl IntoIterator<Item = String>,
    ) -> Result<Self, ChannelError> {
        let tombstones: IndexSet<String> = tombstones.into_iter().collect();

        let Some(head) = versions.last() else {
            return Err(ChannelError::EmptyChannel);
        };

        if tombstones.contains(head) {
            return Err(ChannelError::InvalidHead { head: head.clone() });
        }

        for unknown in tombstones.iter().filter(|t| !versions.contains(*t)) {
            debug!(tombstone = unknown.as_str(); "Ignoring tombstone that names no version");
        }

        Ok(Self {
            versions,
            tombstones,
        })
    }

    /// Returns all versions in channel order, tombstoned ones included.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Returns the tombstone set in the order it was declared.
    pub fn tombstones(&self) -> &IndexSet<String> {
        &self.tombstones
    }

    /// Returns the newest version of the channel.
    pub fn head(&self) -> &str {
        // Non-empty by construction.
        &self.versions[self.versions.len() - 1]
    }

    /// Returns `true` if `version` has been retired.
    pub fn is_tombstoned(&self, version: &str) -> bool {
        self.tombstones.contains(version)
    }
}
