//! Channel documents.
//!
//! A channel is described in YAML:
//!
//! ```yaml
//! schema: olm.channel
//! package: example-operator
//! name: stable
//! versions: [v0.1.0, v0.2.0, v0.3.0]
//! tombstones: [v0.2.0]
//! ```
//!
//! Only `versions` and `tombstones` shape the graph; the remaining fields
//! are informational. Both lists must hold YAML strings: a plain `1.0` is a
//! number and is rejected, while `"1.0"` or `v1.0` is accepted.

use log::{debug, info};
use serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
};
use serde_yaml::Value;

use chanviz_core::channel::{Channel, ChannelError};

use crate::ChanvizError;

/// A channel document as written on disk, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChannelDocument {
    schema: String,
    package: String,
    name: String,
    #[serde(deserialize_with = "string_list")]
    versions: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    tombstones: Vec<String>,
}

/// Deserializes a sequence whose entries are all YAML strings.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a string version identifier",
            )),
        })
        .collect()
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => Unexpected::Signed(i),
            (_, Some(u), _) => Unexpected::Unsigned(u),
            (_, _, Some(f)) => Unexpected::Float(f),
            _ => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Sequence(_) => Unexpected::Seq,
        Value::Mapping(_) => Unexpected::Map,
        Value::Tagged(_) => Unexpected::Other("tagged value"),
    }
}

impl ChannelDocument {
    /// Parses a channel document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ChanvizError::InputMalformed`] if the text is not a
    /// channel-shaped YAML mapping.
    pub fn from_yaml(source: &str) -> Result<Self, ChanvizError> {
        let document: Self = serde_yaml::from_str(source)
            .map_err(|err| ChanvizError::new_malformed_error(err, source))?;

        debug!(
            versions = document.versions.len(),
            tombstones = document.tombstones.len();
            "Channel document parsed"
        );

        Ok(document)
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    pub fn tombstones(&self) -> &[String] {
        &self.tombstones
    }

    /// Validates the document into a [`Channel`].
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::EmptyChannel`] when no versions are listed
    /// (including a missing `versions` key) and
    /// [`ChannelError::InvalidHead`] when the newest version is tombstoned.
    pub fn into_channel(self) -> Result<Channel, ChannelError> {
        info!(
            schema = self.schema,
            package = self.package,
            channel = self.name;
            "Loading channel"
        );

        Channel::new(self.versions, self.tombstones)
    }
}
