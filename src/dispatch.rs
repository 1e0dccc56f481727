//! Command table and dispatch for the interactive console.

use log::error;

use crate::models::{ConnectionError, DispatchError, TeardownError, TwtProfile};
use crate::service::WirelessService;
use crate::session::TwtSession;

/// Status code reported to the console when a line succeeds.
pub const STATUS_OK: i32 = 0;

/// Status code for dispatch-layer failures (unknown command, bad or missing
/// arguments) and exhausted association retries.
pub const STATUS_ERROR: i32 = -1;

/// Handler discriminant for a table entry.
///
/// A closed set rather than dynamic registration: the command surface is
/// fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    ItwtSetup,
    ItwtTeardown,
}

/// Metadata for one console command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command name, the first space-delimited token of a line.
    pub name: &'static str,
    /// Minimum argument count checked before the handler runs.
    pub min_args: usize,
    /// Usage string shown on argument-count failures.
    pub usage: &'static str,
    /// One-line description for the console's help output.
    pub brief: &'static str,
    pub(crate) handler: Handler,
}

/// The fixed command table, built once at startup.
pub(crate) const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "itwt_setup",
        min_args: 1,
        usage: "itwt_setup <active|idle>",
        brief: "Set up an iTWT session with parameters as per the selected profile",
        handler: Handler::ItwtSetup,
    },
    CommandSpec {
        name: "itwt_teardown",
        min_args: 0,
        usage: "itwt_teardown",
        brief: "Tear down the ongoing iTWT session",
        handler: Handler::ItwtTeardown,
    },
];

/// Maps console lines to handlers and runs exactly one handler per line.
///
/// Handlers run to completion on the caller's task before the next line is
/// accepted; there is no queueing and no concurrent handler execution.
pub struct Dispatcher<S> {
    session: TwtSession<S>,
}

impl<S: WirelessService> Dispatcher<S> {
    pub(crate) fn new(session: TwtSession<S>) -> Self {
        Self { session }
    }

    pub(crate) fn session(&self) -> &TwtSession<S> {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut TwtSession<S> {
        &mut self.session
    }

    /// The fixed command table.
    pub fn commands() -> impl Iterator<Item = &'static CommandSpec> {
        COMMANDS.iter()
    }

    /// Dispatches one console line and returns its status code.
    ///
    /// The line is tokenized on whitespace; the first token selects the
    /// command. The declared minimum argument count is checked before any
    /// handler is invoked. Every failure is logged with its underlying code
    /// and folded into the status code; nothing escapes to the worker loop.
    pub async fn dispatch(&mut self, line: &str) -> i32 {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            // Blank lines are a console no-op.
            return STATUS_OK;
        };
        let args: Vec<&str> = tokens.collect();

        let Some(spec) = COMMANDS.iter().find(|c| c.name == name) else {
            error!("{}", DispatchError::UnknownCommand(name.to_owned()));
            return STATUS_ERROR;
        };

        if args.len() < spec.min_args {
            error!("{}", DispatchError::InsufficientArguments(spec.usage));
            return STATUS_ERROR;
        }

        match spec.handler {
            Handler::ItwtSetup => self.itwt_setup(&args).await,
            Handler::ItwtTeardown => self.itwt_teardown().await,
        }
    }

    /// `itwt_setup <active|idle>`: re-associate with the chosen profile.
    async fn itwt_setup(&mut self, args: &[&str]) -> i32 {
        let profile = match args[0] {
            "active" => TwtProfile::Active,
            "idle" => TwtProfile::Idle,
            other => {
                error!("{}", DispatchError::InvalidArgument(other.to_owned()));
                return STATUS_ERROR;
            }
        };

        match self.session.setup(profile).await {
            Ok(_) => STATUS_OK,
            Err(e) => {
                error!("iTWT setup failed: {e}");
                connection_status(&e)
            }
        }
    }

    /// `itwt_teardown`: tear down the default TWT flow.
    async fn itwt_teardown(&mut self) -> i32 {
        match self.session.teardown().await {
            Ok(()) => STATUS_OK,
            Err(TeardownError::ServiceFailure(code)) => code as i32,
        }
    }
}

/// Folds a connection error into a console status code: service failures
/// pass their numeric code through unchanged, everything else is `-1`.
fn connection_status(err: &ConnectionError) -> i32 {
    match err {
        ConnectionError::ServiceFailure(code) => *code as i32,
        ConnectionError::RetriesExhausted | ConnectionError::NotConnected => STATUS_ERROR,
    }
}
