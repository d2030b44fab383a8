//! Application layer with the request façade and its DTOs.

/// Data transfer objects.
pub mod dto;
/// Services called by the media server.
pub mod services;

pub use dto::IconStream;
pub use services::GenericIconService;
