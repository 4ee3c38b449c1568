//! Incremental constructors for screen documents.
//!
//! Builders start from the required fields and layer optional ones on
//! top; every intermediate state is a fully-formed value and the terminal
//! `build()` yields the immutable result. Scalar setters overwrite (last
//! value wins), collection setters accumulate. [`components`] adds
//! ready-made constructors for the common component shapes.

mod component;
pub mod components;
mod screen;

pub use component::ComponentBuilder;
pub use screen::ScreenBuilder;
