//! # Screenflow
//!
//! Screenflow is a lightweight, server-driven UI description format written in Rust.
//! A backend composes a screen as a tree of typed component nodes and serializes it
//! to a canonical JSON document; a remote rendering client interprets the document
//! to build a native screen without shipping new client code.
//!
//! ## Core Features
//!
//! - **Recursive Node Schema**: screens are trees of [`ComponentNode`] values with
//!   open component tags, so either side can introduce new component types without
//!   a schema bump
//! - **Data Binding**: list nodes describe their data through [`DataSource`],
//!   [`PaginationConfig`] and [`ItemTemplate`] with `{{field}}` placeholder tokens;
//!   fetching and substitution stay on the client
//! - **Ergonomic Construction**: incremental builders and ready-made constructors
//!   produce fully-formed, immutable values
//! - **Advisory Validation**: an explicit pass collects structural diagnostics
//!   instead of rejecting documents at construction time
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use screenflow::{ScreenBuilder, components::{column, text}};
//!
//! let screen = ScreenBuilder::new("home", "Home", "1.0")
//!     .with_layout(column([text("Hello World")]))
//!     .build();
//!
//! screen.validate()?;
//! let json = screen.to_json()?;
//! ```

mod builder;
mod error;
mod model;
pub mod template;
pub mod validate;

#[cfg(test)]
mod test_util;

pub use builder::components;
pub use builder::{ComponentBuilder, ScreenBuilder};
pub use error::ScreenflowError;
pub use model::*;

/// Result type alias for Screenflow operations.
pub type Result<T> = std::result::Result<T, ScreenflowError>;
