//! UI components built with Leptos.
//!
//! - [`Portfolio`] - Top-level view switching (loading, hero, main body)
//! - [`loading`] - Loading screen
//! - [`hero`] - Hero landing screen with the enter button
//! - [`story`], [`projects`], [`skills`], [`contact`] - Main body sections
//! - [`header`] - Shared section title block
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod contact;
pub mod header;
pub mod hero;
pub mod icons;
pub mod loading;
pub mod portfolio;
pub mod projects;
pub mod skills;
pub mod story;

pub use portfolio::Portfolio;
