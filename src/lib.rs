//! langbadge - contrast-aware badges for GitHub Linguist language colors.
//!
//! Downloads `languages.yml`, picks black or white text for every language
//! color by perceptual lightness, and writes badge images plus a README that
//! links to them.

pub mod colors;
pub mod config;
pub mod encode;
pub mod errors;
pub mod escape;
pub mod image;
pub mod manifest;
pub mod readme;
pub mod render;
pub mod site;
pub mod template;

#[cfg(feature = "cli")]
pub mod cli;
