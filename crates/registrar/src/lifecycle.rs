use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::descriptor::ServiceDescriptor;
use crate::directory::DirectoryClient;
use crate::error::{RegistrationError, Result};
use crate::state::RegistrationState;

type ShutdownHook = Box<dyn FnOnce() + Send>;

/// Bounded retry schedule for directory calls.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Delay before the next attempt. Grows linearly with the attempt
    /// number, capped at ten times the base delay.
    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * attempt.min(10)
    }
}

struct Inner {
    state: RegistrationState,
    registered: Option<ServiceDescriptor>,
    hooks: Vec<ShutdownHook>,
}

/// Manages the registration lifecycle of a single service instance against
/// an external discovery directory.
///
/// All state transitions happen under one lock that is held across the
/// directory call, so a shutdown invoked from a signal handler cannot
/// interleave with a registration retry still in flight.
pub struct Registrar {
    client: DirectoryClient,
    retry: RetryPolicy,
    inner: Mutex<Inner>,
    shutdown_started: AtomicBool,
}

impl Registrar {
    pub fn new(client: DirectoryClient) -> Self {
        Self::with_retry(client, RetryPolicy::default())
    }

    pub fn with_retry(client: DirectoryClient, retry: RetryPolicy) -> Self {
        Self {
            client,
            retry,
            inner: Mutex::new(Inner {
                state: RegistrationState::Unregistered,
                registered: None,
                hooks: Vec::new(),
            }),
            shutdown_started: AtomicBool::new(false),
        }
    }

    pub async fn state(&self) -> RegistrationState {
        self.inner.lock().await.state.clone()
    }

    /// Registers `descriptor` with the directory.
    ///
    /// A stale entry left by an unclean prior shutdown is removed first;
    /// that cleanup is best effort and its failure never blocks the
    /// registration itself. Transient directory failures are retried per
    /// the configured policy. Once the attempt budget is exhausted the
    /// registrar moves to `Failed` and returns `DirectoryUnreachable`; the
    /// host service should log this and keep serving, since only
    /// discoverability is lost. A later `register` call starts over from
    /// scratch and is the only recovery path out of `Failed`.
    pub async fn register(&self, descriptor: &ServiceDescriptor) -> Result<()> {
        descriptor.validate()?;

        let mut inner = self.inner.lock().await;
        inner.state = RegistrationState::Registering;

        // Awaited before the create, so registration cannot race its own
        // stale-entry cleanup.
        if let Err(e) = self.client.deregister(&descriptor.id).await {
            warn!("stale-entry cleanup for {} failed: {}", descriptor.id, e);
        }

        let mut attempt = 0;
        let last_error = loop {
            attempt += 1;
            match self.client.register(descriptor).await {
                Ok(()) => {
                    info!(
                        "registered {} ({}) at {}:{}",
                        descriptor.name, descriptor.id, descriptor.host, descriptor.port
                    );
                    inner.state = RegistrationState::Registered;
                    inner.registered = Some(descriptor.clone());
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        "registration attempt {}/{} for {} failed: {}",
                        attempt, self.retry.max_attempts, descriptor.id, e
                    );
                    if attempt >= self.retry.max_attempts {
                        break e;
                    }
                    tokio::time::sleep(self.retry.backoff(attempt)).await;
                }
            }
        };

        let reason = last_error.to_string();
        inner.state = RegistrationState::Failed(reason.clone());
        Err(RegistrationError::DirectoryUnreachable {
            attempts: attempt,
            reason,
        })
    }

    /// Removes the registration for `id`. Removing an identity the
    /// directory does not know is success, not an error.
    pub async fn deregister(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.state = RegistrationState::Deregistering;

        match self.client.deregister(id).await {
            Ok(()) => {
                info!("deregistered {}", id);
                inner.state = RegistrationState::Unregistered;
                inner.registered = None;
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                inner.state = RegistrationState::Failed(reason.clone());
                Err(RegistrationError::DirectoryUnreachable { attempts: 1, reason })
            }
        }
    }

    /// Queues `hook` to run during `shutdown`.
    pub async fn on_shutdown(&self, hook: impl FnOnce() + Send + 'static) {
        self.inner.lock().await.hooks.push(Box::new(hook));
    }

    /// Graceful-shutdown path: deregisters whatever is currently
    /// registered and runs the queued hooks.
    ///
    /// Runs at most once; later calls are no-ops. Failures are logged and
    /// swallowed — the process is already on its way out and shutdown must
    /// always complete.
    pub async fn shutdown(&self) {
        if self.shutdown_started.swap(true, Ordering::SeqCst) {
            debug!("shutdown already ran");
            return;
        }

        let mut inner = self.inner.lock().await;
        if let Some(descriptor) = inner.registered.take() {
            info!("deregistering {} on shutdown", descriptor.id);
            match self.client.deregister(&descriptor.id).await {
                Ok(()) => inner.state = RegistrationState::Unregistered,
                Err(e) => warn!("shutdown deregister for {} failed: {}", descriptor.id, e),
            }
        }

        for hook in inner.hooks.drain(..) {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_linearly() {
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(3), Duration::from_millis(300));
    }

    #[test]
    fn backoff_is_capped() {
        let policy = RetryPolicy {
            max_attempts: 50,
            base_delay: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff(40), Duration::from_millis(1000));
    }

    #[test]
    fn default_policy_bounds_attempts() {
        let policy = RetryPolicy::default();
        assert!(policy.max_attempts >= 1);
    }
}
