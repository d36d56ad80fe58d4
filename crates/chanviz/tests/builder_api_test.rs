//! Integration tests for the ChannelGraphBuilder API

use chanviz::{
    ChannelGraphBuilder, ChanvizError,
    channel::ChannelError,
    config::{AppConfig, Direction, GraphConfig, StyleConfig},
};

const STYLE: &str = "fill:#ccc,stroke:#666,stroke-width:1px,color:#666,stroke-dasharray: 4";

#[test]
fn test_parse_and_render_channel() {
    let source = r#"
schema: olm.channel
package: etcd
name: alpha
versions:
  - v0.6.0
  - v0.6.1
  - v0.9.0
  - v0.9.2
tombstones:
  - v0.6.1
  - v0.9.0
"#;

    let builder = ChannelGraphBuilder::default();
    let channel = builder.parse(source).expect("Failed to parse channel");
    let diagram = builder.render(&channel);

    let expected = format!(
        "graph RL
  v0.6.0
  v0.9.2

  v0.9.2 == replaces ==> v0.6.0

  v0.9.2 -- skips --> v0.6.1
  v0.9.2 -- skips --> v0.9.0

  style v0.6.1 {STYLE}
  style v0.9.0 {STYLE}"
    );
    assert_eq!(diagram, expected);
}

#[test]
fn test_render_single_version_channel() {
    let builder = ChannelGraphBuilder::default();
    let channel = builder.parse("versions: [v1]").unwrap();

    assert_eq!(builder.render(&channel), "graph RL\n  v1");
}

#[test]
fn test_empty_channel_rejected() {
    let builder = ChannelGraphBuilder::default();
    let err = builder.parse("versions: []").unwrap_err();

    assert!(matches!(
        err,
        ChanvizError::Channel(ChannelError::EmptyChannel)
    ));
}

#[test]
fn test_tombstoned_head_rejected() {
    let builder = ChannelGraphBuilder::default();
    let err = builder
        .parse("versions: [v1, v2]\ntombstones: [v2]")
        .unwrap_err();

    assert!(matches!(
        err,
        ChanvizError::Channel(ChannelError::InvalidHead { .. })
    ));
    assert_eq!(
        err.to_string(),
        "head version \"v2\" must not be tombstoned"
    );
}

#[test]
fn test_error_messages_do_not_repeat_their_source() {
    let errors = [
        ChannelGraphBuilder::default()
            .parse("versions: [v1, v2]\ntombstones: [v2]")
            .unwrap_err(),
        ChanvizError::new_unreadable_error(
            "missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ),
        ChanvizError::Output(std::io::Error::other("broken pipe")),
    ];

    for err in &errors {
        if let Some(source) = std::error::Error::source(err) {
            assert!(
                !err.to_string().contains(&source.to_string()),
                "{err} repeats its source"
            );
        }
    }
}

#[test]
fn test_malformed_document_rejected() {
    let builder = ChannelGraphBuilder::default();
    let err = builder.parse("versions: [v1\n").unwrap_err();

    assert!(matches!(err, ChanvizError::InputMalformed { .. }));
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        GraphConfig::new(Direction::TopToBottom),
        StyleConfig::default(),
    );
    let builder = ChannelGraphBuilder::new(config);
    let channel = builder.parse("versions: [a, b]").unwrap();

    assert_eq!(
        builder.render(&channel),
        "graph TB\n  a\n  b\n\n  b == replaces ==> a"
    );
}

#[test]
fn test_builder_reusability() {
    let builder = ChannelGraphBuilder::default();

    let first = builder.parse("versions: [a, b]").unwrap();
    let second = builder.parse("versions: [c, d, e]\ntombstones: [d]").unwrap();

    assert!(builder.render(&first).contains("b == replaces ==> a"));
    assert!(builder.render(&second).contains("e -- skips --> d"));
}
