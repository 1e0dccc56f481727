use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Individual Target Wake Time profile requested at association time.
///
/// The profile is an input to association, not a standalone session object:
/// the wake schedule is negotiated as a side effect of (re)joining the
/// network, so changing it means reconnecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwtProfile {
    /// No wake schedule requested.
    #[default]
    None,
    /// Short wake interval for latency-sensitive traffic.
    Active,
    /// Long wake interval for mostly-idle stations.
    Idle,
}

impl Display for TwtProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Active => write!(f, "active"),
            Self::Idle => write!(f, "idle"),
        }
    }
}

/// Security mode used for association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Security {
    Open,
    #[default]
    Wpa2AesPsk,
    Wpa3Sae,
}

/// Frequency-band preference for association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Let the service pick whichever band the network is reachable on.
    #[default]
    Any,
    Band2_4Ghz,
    Band5Ghz,
    Band6Ghz,
}

/// Parameters handed to the wireless connection service on every
/// association attempt.
///
/// Owned by the connection manager and rewritten immediately before each
/// attempt; never shared with the timer context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub ssid: String,
    pub passphrase: String,
    pub security: Security,
    pub band: Band,
    pub itwt_profile: TwtProfile,
}

impl ConnectionParams {
    /// Creates parameters for the given network with the default security
    /// mode, band preference, and no TWT schedule.
    pub fn new(ssid: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            passphrase: passphrase.into(),
            security: Security::default(),
            band: Band::default(),
            itwt_profile: TwtProfile::default(),
        }
    }
}

/// Association lifecycle state, owned exclusively by the connection manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

impl Display for ConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One-shot TWT teardown control request.
///
/// Built fresh for every teardown call and handed to the wireless
/// connection service; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwtTeardownRequest {
    pub negotiation_type: u8,
    pub flow_id: u8,
    pub bcast_twt_id: u8,
    pub teardown_all: bool,
}

impl TwtTeardownRequest {
    /// Request tearing down the single default individual flow (flow 0,
    /// negotiation type 0), leaving any broadcast schedules alone.
    pub fn default_flow() -> Self {
        Self {
            negotiation_type: 0,
            flow_id: 0,
            bcast_twt_id: 0,
            teardown_all: false,
        }
    }
}

/// Numeric result code reported by the wireless connection service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("service error 0x{0:08x}")]
pub struct ServiceError(pub u32);

/// Errors from association and disconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Every attempt in the retry budget failed.
    #[error("exceeded maximum connection attempts")]
    RetriesExhausted,

    /// The wireless connection service reported a failure.
    #[error("wireless service failure: 0x{0:08x}")]
    ServiceFailure(u32),

    /// Disconnect was requested while no association exists.
    #[error("not connected")]
    NotConnected,
}

impl From<ServiceError> for ConnectionError {
    fn from(e: ServiceError) -> Self {
        Self::ServiceFailure(e.0)
    }
}

/// Errors from TWT session teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TeardownError {
    /// The wireless connection service rejected the teardown request.
    #[error("TWT teardown failed: 0x{0:08x}")]
    ServiceFailure(u32),
}

impl From<ServiceError> for TeardownError {
    fn from(e: ServiceError) -> Self {
        Self::ServiceFailure(e.0)
    }
}

/// Errors raised at the command-dispatch boundary, before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("invalid argument '{0}'")]
    InvalidArgument(String),

    #[error("insufficient arguments, usage: {0}")]
    InsufficientArguments(&'static str),
}
