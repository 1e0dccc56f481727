//! iTWT session setup and teardown orchestration.

use std::net::Ipv4Addr;
use std::sync::Arc;

use log::{error, info, warn};

use crate::connection::ConnectionManager;
use crate::models::{
    ConnectionError, ConnectionState, TeardownError, TwtProfile, TwtTeardownRequest,
};
use crate::service::WirelessService;

/// Orchestrates TWT schedule setup and teardown on top of the association
/// owned by [`ConnectionManager`].
///
/// A schedule cannot be renegotiated on a live link: the profile is only
/// conveyed at association time, so `setup` re-associates, accepting the
/// connectivity gap of a full disconnect/connect cycle.
pub struct TwtSession<S> {
    svc: Arc<S>,
    conn: ConnectionManager<S>,
}

impl<S: WirelessService> TwtSession<S> {
    pub fn new(svc: Arc<S>, conn: ConnectionManager<S>) -> Self {
        Self { svc, conn }
    }

    /// The underlying connection manager.
    pub fn connection(&self) -> &ConnectionManager<S> {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut ConnectionManager<S> {
        &mut self.conn
    }

    /// Negotiates a TWT schedule by re-associating with the given profile.
    ///
    /// If currently connected, disconnects first; a disconnect failure
    /// aborts the setup before any new association attempt is made.
    pub async fn setup(&mut self, profile: TwtProfile) -> Result<Ipv4Addr, ConnectionError> {
        if self.conn.state() == ConnectionState::Connected {
            info!("already connected, dropping association before TWT setup");
            if let Err(e) = self.conn.disconnect().await {
                error!("failed to drop association: {e}");
                return Err(e);
            }
        }
        self.conn.connect(profile).await
    }

    /// Tears down the single default individual TWT flow.
    ///
    /// Issued regardless of association state; the service's verdict is
    /// returned unchanged, with no retry.
    pub async fn teardown(&mut self) -> Result<(), TeardownError> {
        let req = TwtTeardownRequest::default_flow();
        match self.svc.twt_teardown(&req).await {
            Ok(()) => {
                info!("TWT session torn down");
                Ok(())
            }
            Err(e) => {
                warn!("TWT session teardown failed: {e}");
                Err(TeardownError::ServiceFailure(e.0))
            }
        }
    }
}
