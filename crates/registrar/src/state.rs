use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a service instance sits in its registration lifecycle.
///
/// Owned exclusively by the `Registrar`; transitions happen only under its
/// lock, on explicit calls or the shutdown path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    Unregistered,
    Registering,
    Registered,
    Deregistering,
    Failed(String),
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationState::Unregistered => write!(f, "unregistered"),
            RegistrationState::Registering => write!(f, "registering"),
            RegistrationState::Registered => write!(f, "registered"),
            RegistrationState::Deregistering => write!(f, "deregistering"),
            RegistrationState::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
