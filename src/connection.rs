//! Bounded-retry association against the wireless connection service.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use futures_timer::Delay;
use log::{info, warn};

use crate::Result;
use crate::constants::{retries, timeouts};
use crate::models::{ConnectionError, ConnectionParams, ConnectionState, TwtProfile};
use crate::service::WirelessService;
use crate::utils::ipv4_from_raw;

/// Bound and backoff for the association retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of association attempts per `connect` call.
    pub max_attempts: u32,
    /// Fixed wait between two attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: retries::MAX_CONNECT_ATTEMPTS,
            backoff: timeouts::connect_retry_delay(),
        }
    }
}

/// Owns the association state and credentials and performs bounded-retry
/// connect/disconnect against the wireless connection service.
///
/// At most one attempt is ever in flight: the manager lives on the single
/// worker context and both operations take `&mut self`.
pub struct ConnectionManager<S> {
    svc: Arc<S>,
    params: ConnectionParams,
    state: ConnectionState,
    policy: RetryPolicy,
}

impl<S: WirelessService> ConnectionManager<S> {
    pub fn new(svc: Arc<S>, params: ConnectionParams) -> Self {
        Self {
            svc,
            params,
            state: ConnectionState::Disconnected,
            policy: RetryPolicy::default(),
        }
    }

    /// Overrides the default retry bound and backoff.
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.policy = policy;
    }

    /// Current association state.
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Parameters as stamped for the most recent association attempt.
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Associates with the given TWT profile, retrying up to the policy
    /// bound with a fixed delay between attempts.
    ///
    /// Every exit path lands in `Connected` or `Failed`; the manager never
    /// stays in `Connecting` after return. On success the assigned address
    /// is returned (displays as dotted decimal).
    pub async fn connect(&mut self, profile: TwtProfile) -> Result<Ipv4Addr> {
        // The schedule is conveyed at association time only, so the profile
        // is stamped into the parameters right before the first attempt.
        self.params.itwt_profile = profile;
        self.state = ConnectionState::Connecting;

        info!(
            "connecting to '{}' (iTWT profile: {})",
            self.params.ssid, profile
        );

        let mut attempts = 0;
        loop {
            match self.svc.join(&self.params).await {
                Ok(raw) => {
                    let addr = ipv4_from_raw(raw);
                    self.state = ConnectionState::Connected;
                    info!(
                        "connected to '{}', address {addr} assigned",
                        self.params.ssid
                    );
                    return Ok(addr);
                }
                Err(e) => {
                    attempts += 1;
                    if attempts >= self.policy.max_attempts {
                        warn!(
                            "exceeded {} connection attempts, giving up",
                            self.policy.max_attempts
                        );
                        self.state = ConnectionState::Failed;
                        return Err(ConnectionError::RetriesExhausted);
                    }
                    warn!("association attempt {attempts} failed ({e}), retrying");
                    Delay::new(self.policy.backoff).await;
                }
            }
        }
    }

    /// Drops the current association.
    ///
    /// Valid only from `Connected`. A service failure leaves the state
    /// untouched, since the link may still be usable; the error is surfaced
    /// once and not retried.
    pub async fn disconnect(&mut self) -> Result<()> {
        if self.state != ConnectionState::Connected {
            return Err(ConnectionError::NotConnected);
        }
        self.svc.leave().await?;
        self.state = ConnectionState::Disconnected;
        info!("disconnected from '{}'", self.params.ssid);
        Ok(())
    }
}
