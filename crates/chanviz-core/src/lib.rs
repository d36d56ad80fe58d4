//! Chanviz Core Types and Derivation
//!
//! This crate provides the foundational types for describing an update
//! channel and deriving its upgrade graph. It includes:
//!
//! - **Channel**: The validated channel model ([`channel::Channel`])
//! - **Graph**: The derived upgrade graph ([`graph::GraphDescription`])
//!
//! Everything here is pure; reading and rendering live in the `chanviz` crate.

pub mod channel;
pub mod graph;
