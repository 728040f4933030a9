//! Solid-color wallpapers with a WCAG contrast-aware color badge.
//!
//! The color engine ([`color`], [`contrast`], [`contrast_solver`], [`selection`])
//! is independent of rendering and can be used on its own.

pub mod cli;
pub mod cli_args;
pub mod color;
pub mod config;
pub mod contrast;
pub mod contrast_solver;
pub mod convert;
pub mod error;
pub mod font;
pub mod format;
pub mod logging;
pub mod names;
pub mod parse;
pub mod random;
pub mod render;
pub mod report;
pub mod selection;
pub mod wallpaper;

pub use color::{ColorValue, HexCase};
pub use error::ColorError;
pub use names::ColorNames;
pub use selection::{ColorSelectionPolicy, Selection, SelectionRequest};
