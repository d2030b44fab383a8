pub mod generic_icon_service;

pub use generic_icon_service::GenericIconService;
