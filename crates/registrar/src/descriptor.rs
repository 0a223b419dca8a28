use serde::{Deserialize, Serialize};

use crate::error::{RegistrationError, Result};

/// Describes one service instance the way the discovery directory sees it.
///
/// Built once at startup from configuration and never mutated. The wire
/// field for `host` is `address`, matching the directory's register API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "address")]
    pub host: String,
    pub port: u16,
}

impl ServiceDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            host: host.into(),
            port,
        }
    }

    /// Like `new`, but for port values coming from untyped configuration.
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
        port: u32,
    ) -> Result<Self> {
        let port = u16::try_from(port).map_err(|_| {
            RegistrationError::InvalidDescriptor(format!("port {} is out of range", port))
        })?;
        let descriptor = Self::new(id, name, host, port);
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Checked before any directory call is made; a descriptor that fails
    /// here is never retried.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(RegistrationError::InvalidDescriptor(
                "id must not be empty".to_string(),
            ));
        }
        if self.name.is_empty() {
            return Err(RegistrationError::InvalidDescriptor(
                "name must not be empty".to_string(),
            ));
        }
        if self.host.is_empty() {
            return Err(RegistrationError::InvalidDescriptor(
                "host must not be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(RegistrationError::InvalidDescriptor(
                "port 0 is out of range".to_string(),
            ));
        }
        Ok(())
    }
}

/// Derives a per-instance identity from the machine hostname and PID, so
/// multiple instances of the same service never collide in the directory.
pub fn instance_id(service_name: &str) -> String {
    let host = hostname::get()
        .unwrap_or_else(|_| std::ffi::OsString::from("unknown"))
        .to_string_lossy()
        .to_string();
    format!("{}-{}-{}", service_name, host, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_descriptor_passes() {
        let descriptor = ServiceDescriptor::new("book-svc-1", "book-service", "10.0.0.5", 9005);
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected() {
        for descriptor in [
            ServiceDescriptor::new("", "book-service", "10.0.0.5", 9005),
            ServiceDescriptor::new("book-svc-1", "", "10.0.0.5", 9005),
            ServiceDescriptor::new("book-svc-1", "book-service", "", 9005),
        ] {
            assert!(matches!(
                descriptor.validate(),
                Err(RegistrationError::InvalidDescriptor(_))
            ));
        }
    }

    #[test]
    fn port_zero_is_rejected() {
        let descriptor = ServiceDescriptor::new("book-svc-1", "book-service", "10.0.0.5", 0);
        assert!(matches!(
            descriptor.validate(),
            Err(RegistrationError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn oversized_port_is_rejected() {
        let err = ServiceDescriptor::try_new("book-svc-1", "book-service", "10.0.0.5", 70000)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidDescriptor(_)));
    }

    #[test]
    fn instance_id_embeds_service_name_and_pid() {
        let id = instance_id("book-service");
        assert!(id.starts_with("book-service-"));
        assert!(id.ends_with(&std::process::id().to_string()));
    }

    #[test]
    fn host_serializes_as_address() {
        let descriptor = ServiceDescriptor::new("book-svc-1", "book-service", "10.0.0.5", 9005);
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["address"], "10.0.0.5");
        assert!(json.get("host").is_none());
    }
}
