//! Association lifecycle and iTWT power-save session control for a Wi-Fi
//! station.
//!
//! This crate manages a station's association to an access point and the
//! negotiation of an Individual Target Wake Time (iTWT) schedule on top of
//! it, driven by a line-oriented command interface:
//!
//! - [`ConnectionManager`] owns the association state and credentials and
//!   performs bounded-retry connect/disconnect.
//! - [`TwtSession`] sets up a schedule by re-associating with the chosen
//!   profile and tears it down with a one-shot control request.
//! - [`Station`] wires everything into a single worker loop that dispatches
//!   console lines one at a time.
//! - [`LivenessCoordinator`] runs an independent periodic task that keeps
//!   extending the hardware liveness deadline across long blocking
//!   operations.
//!
//! The wireless driver itself is an external collaborator behind the
//! [`WirelessService`] trait; the line editor feeding the worker loop is
//! another.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use itwt_station::{ConnectionParams, Station};
//!
//! # struct Driver;
//! # #[async_trait::async_trait]
//! # impl itwt_station::WirelessService for Driver {
//! #     async fn join(&self, _: &itwt_station::ConnectionParams) -> Result<u32, itwt_station::ServiceError> { Ok(0) }
//! #     async fn leave(&self) -> Result<(), itwt_station::ServiceError> { Ok(()) }
//! #     async fn twt_teardown(&self, _: &itwt_station::TwtTeardownRequest) -> Result<(), itwt_station::ServiceError> { Ok(()) }
//! # }
//! # struct Board;
//! # impl itwt_station::Watchdog for Board { fn extend(&self, _: u32) {} }
//! # async fn example(lines: futures::stream::Iter<std::vec::IntoIter<String>>) {
//! let params = ConnectionParams::new("MyNetwork", "password123");
//! let mut station = Station::new(Arc::new(Driver), params);
//!
//! station.start(Arc::new(Board)).await;
//! station.run(lines).await;
//! # }
//! ```
//!
//! # Error Handling
//!
//! Association errors ([`ConnectionError`]), teardown errors
//! ([`TeardownError`]), and dispatch errors ([`DispatchError`]) are all
//! recovered at the command boundary: they are logged with the underlying
//! numeric code and folded into the status code returned per line. None of
//! them terminate the worker loop.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. To see log
//! output, install an implementation such as `env_logger`.

// Internal implementation modules
mod connection;
mod dispatch;
mod liveness;
mod session;
mod station;
mod utils;

// Public API modules
pub mod constants;
pub mod models;
pub mod service;

// Re-exported public API
pub use connection::{ConnectionManager, RetryPolicy};
pub use dispatch::{CommandSpec, Dispatcher, STATUS_ERROR, STATUS_OK};
pub use liveness::{LivenessCoordinator, Watchdog};
pub use models::{
    Band, ConnectionError, ConnectionParams, ConnectionState, DispatchError, Security,
    ServiceError, TeardownError, TwtProfile, TwtTeardownRequest,
};
pub use service::WirelessService;
pub use session::TwtSession;
pub use station::Station;

/// A specialized `Result` type for association operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;
