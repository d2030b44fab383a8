//! Genicons - generic label-stamped thumbnails for media servers.
//!
//! Renderers without a real thumbnail for an item get a category template
//! (audio, image, video, unknown) with the item's container name drawn on
//! it. Generated icons are cached in memory for the life of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the request façade and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing rendering and configuration adapters.
pub mod infrastructure;

pub use application::{GenericIconService, IconStream};
pub use domain::{MediaDescriptor, RendererPreference};

/// Current version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "genicons";
