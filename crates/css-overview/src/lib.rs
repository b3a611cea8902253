//! CSS Overview library
//!
//! Aggregates color, font, unused-declaration, media query and selector
//! statistics from a page snapshot. This exposes the internal modules for
//! testing and for the `css-overview` binary.

pub mod aggregator;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;
