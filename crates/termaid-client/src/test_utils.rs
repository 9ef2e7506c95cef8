//! Test utilities for backend consumers
//!
//! Provides a scripted in-memory [`Backend`] that records every call, and a
//! base URL that refuses connections.

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::Mutex;

use termaid_core::{ConnectivityStatus, Error, Result};

use crate::backend::Backend;
use crate::protocol::ExecutionResult;

/// Scripted backend: responses are popped in order, calls are recorded
#[derive(Debug, Default)]
pub struct FakeBackend {
    executions: Mutex<VecDeque<ExecutionResult>>,
    analyses: Mutex<VecDeque<std::result::Result<String, String>>>,
    health: Mutex<ConnectivityStatus>,
    executed: Mutex<Vec<(String, String)>>,
    analyzed: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next execution result
    pub fn push_execution(&self, result: ExecutionResult) -> &Self {
        self.executions.lock().unwrap().push_back(result);
        self
    }

    /// Queue a successful analysis
    pub fn push_suggestion(&self, suggestion: impl Into<String>) -> &Self {
        self.analyses
            .lock()
            .unwrap()
            .push_back(Ok(suggestion.into()));
        self
    }

    /// Queue a failed analysis
    pub fn push_analysis_failure(&self, reason: impl Into<String>) -> &Self {
        self.analyses.lock().unwrap().push_back(Err(reason.into()));
        self
    }

    pub fn set_health(&self, status: ConnectivityStatus) {
        *self.health.lock().unwrap() = status;
    }

    /// `(command, cwd)` pairs in call order
    pub fn executed(&self) -> Vec<(String, String)> {
        self.executed.lock().unwrap().clone()
    }

    /// Texts sent for analysis in call order
    pub fn analyzed(&self) -> Vec<String> {
        self.analyzed.lock().unwrap().clone()
    }
}

impl Backend for FakeBackend {
    async fn execute(&self, command: &str, cwd: &str) -> ExecutionResult {
        self.executed
            .lock()
            .unwrap()
            .push((command.to_string(), cwd.to_string()));
        self.executions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ExecutionResult::success(""))
    }

    async fn analyze(&self, text: &str) -> Result<String> {
        self.analyzed.lock().unwrap().push(text.to_string());
        match self.analyses.lock().unwrap().pop_front() {
            Some(Ok(suggestion)) => Ok(suggestion),
            Some(Err(reason)) => Err(Error::transport(reason)),
            None => Err(Error::transport("no scripted analysis")),
        }
    }

    async fn check_health(&self) -> ConnectivityStatus {
        *self.health.lock().unwrap()
    }
}

/// Base URL of a local port nothing is listening on.
///
/// The port comes from a listener that is dropped before returning, so
/// connecting to it is refused at the transport level.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
