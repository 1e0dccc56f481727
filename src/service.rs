//! Seam to the external wireless connection service.

use async_trait::async_trait;

use crate::models::{ConnectionParams, ServiceError, TwtTeardownRequest};

/// Abstraction over the wireless connection service (driver plus connection
/// firmware).
///
/// The station core never talks to hardware directly: association,
/// disconnection, and TWT teardown all go through this trait, which also
/// lets tests substitute a scripted implementation for the driver.
#[async_trait]
pub trait WirelessService: Send + Sync {
    /// Associates to the network described by `params`.
    ///
    /// Returns the assigned IPv4 address as the driver's raw word, least
    /// significant octet first.
    async fn join(&self, params: &ConnectionParams) -> Result<u32, ServiceError>;

    /// Drops the current association.
    async fn leave(&self) -> Result<(), ServiceError>;

    /// Issues a one-shot TWT teardown control request.
    async fn twt_teardown(&self, req: &TwtTeardownRequest) -> Result<(), ServiceError>;
}
