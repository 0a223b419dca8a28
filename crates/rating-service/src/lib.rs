pub mod api;
pub mod models;
pub mod settings;

pub use settings::ServiceSettings;
