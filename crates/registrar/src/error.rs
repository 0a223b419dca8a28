use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("discovery directory unreachable after {attempts} attempt(s): {reason}")]
    DirectoryUnreachable { attempts: u32, reason: String },
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
