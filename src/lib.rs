#![allow(clippy::enum_variant_names, clippy::module_inception)]

//! Edit a flat list of slash-delimited paths through the tree it describes.
//!
//! The list in [`tree::PathList`] is authoritative; [`tree::PathTree`] is
//! rebuilt from it after every change. [`editor::Editor`] ties the two to a
//! UI through the [`editor::EditorUi`] trait, and [`render::TerminalUi`] is
//! the terminal implementation used by the binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod editor;
mod ext;
pub mod render;
pub mod tree;
