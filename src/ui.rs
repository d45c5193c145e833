//! src/ui.rs
//!
//! Top-level UI module re-exporting node helpers.

pub mod node;

pub use node::{HitMap, HitTarget, Node, Panel, group, interactive, leaf};
