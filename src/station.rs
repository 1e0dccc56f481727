//! Worker-context facade wiring the components together.

use std::sync::Arc;

use futures::{Stream, StreamExt};
use log::warn;

use crate::connection::{ConnectionManager, RetryPolicy};
use crate::dispatch::{CommandSpec, Dispatcher};
use crate::liveness::{LivenessCoordinator, Watchdog};
use crate::models::{ConnectionParams, ConnectionState, TwtProfile};
use crate::service::WirelessService;
use crate::session::TwtSession;

/// The single worker context's view of the system: connection manager, TWT
/// session controller, command table, and the liveness timer handle.
///
/// Initialization, association, and command dispatch all run sequentially
/// on the caller's task; only the liveness timer runs elsewhere, and it
/// touches nothing but the watchdog.
pub struct Station<S> {
    dispatcher: Dispatcher<S>,
    liveness: Option<LivenessCoordinator>,
}

impl<S: WirelessService> Station<S> {
    /// Wires the components around the given wireless service.
    pub fn new(svc: Arc<S>, params: ConnectionParams) -> Self {
        let conn = ConnectionManager::new(Arc::clone(&svc), params);
        let session = TwtSession::new(svc, conn);
        Self {
            dispatcher: Dispatcher::new(session),
            liveness: None,
        }
    }

    /// Overrides the association retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.dispatcher
            .session_mut()
            .connection_mut()
            .set_retry_policy(policy);
        self
    }

    /// Boot sequence: associate without a TWT schedule, then start the
    /// liveness timer.
    ///
    /// A failed boot-time association is reported but not fatal; the
    /// console still comes up and a later `itwt_setup` retries from
    /// scratch.
    pub async fn start<W: Watchdog>(&mut self, watchdog: Arc<W>) {
        let conn = self.dispatcher.session_mut().connection_mut();
        if let Err(e) = conn.connect(TwtProfile::None).await {
            warn!("boot-time association failed: {e}");
        }
        self.liveness = Some(LivenessCoordinator::spawn(watchdog));
    }

    /// Dispatches one console line and returns its status code.
    pub async fn handle_line(&mut self, line: &str) -> i32 {
        self.dispatcher.dispatch(line).await
    }

    /// Drives the dispatcher over a stream of console lines, one line at a
    /// time, until the stream ends.
    ///
    /// The line editor producing the stream is an external collaborator;
    /// this loop is the worker context it feeds.
    pub async fn run<L>(&mut self, mut lines: L)
    where
        L: Stream<Item = String> + Unpin,
    {
        while let Some(line) = lines.next().await {
            self.dispatcher.dispatch(&line).await;
        }
    }

    /// The fixed command table, for the console's help output.
    pub fn commands(&self) -> impl Iterator<Item = &'static CommandSpec> {
        Dispatcher::<S>::commands()
    }

    /// Current association state.
    pub fn state(&self) -> ConnectionState {
        self.dispatcher.session().connection().state()
    }

    /// Parameters as stamped for the most recent association attempt.
    pub fn params(&self) -> &ConnectionParams {
        self.dispatcher.session().connection().params()
    }

    /// Stops the liveness timer, if it was started.
    pub fn shutdown(&mut self) {
        if let Some(liveness) = self.liveness.take() {
            liveness.stop();
        }
    }
}
