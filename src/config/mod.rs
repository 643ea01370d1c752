pub mod endpoints;
pub mod settings;
