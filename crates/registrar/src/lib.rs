pub mod descriptor;
pub mod directory;
pub mod error;
pub mod lifecycle;
pub mod state;

pub use descriptor::{instance_id, ServiceDescriptor};
pub use directory::{DirectoryClient, DirectoryError};
pub use error::RegistrationError;
pub use lifecycle::{Registrar, RetryPolicy};
pub use state::RegistrationState;
