use std::env;

use registrar::{instance_id, ServiceDescriptor};

/// Runtime settings for this service, read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub service_name: String,
    pub service_host: String,
    pub service_port: u16,
    pub discovery_address: String,
}

impl ServiceSettings {
    pub fn from_env() -> Self {
        let service_port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(9005);

        Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "book-service".to_string()),
            service_host: env::var("SERVICE_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            service_port,
            discovery_address: env::var("DISCOVERY_ADDRESS")
                .unwrap_or_else(|_| "http://localhost:8500".to_string()),
        }
    }

    /// The descriptor this instance registers under.
    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor::new(
            instance_id(&self.service_name),
            self.service_name.clone(),
            self.service_host.clone(),
            self.service_port,
        )
    }
}
