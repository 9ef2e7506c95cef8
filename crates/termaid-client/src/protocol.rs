//! Wire types for the execution and reasoning services
//!
//! | Call    | Method | Path       | Body                      | Response                          |
//! |---------|--------|------------|---------------------------|-----------------------------------|
//! | Health  | GET    | `/health`  | none                      | any 2xx                           |
//! | Execute | POST   | `/execute` | `{command, cwd}`          | `{output, error, cwd?}`           |
//! | Analyze | POST   | `/analyze` | `{output}`                | `{suggestion}`                    |

use serde::{Deserialize, Serialize};

pub const HEALTH_PATH: &str = "health";
pub const EXECUTE_PATH: &str = "execute";
pub const ANALYZE_PATH: &str = "analyze";

/// Output the execution service sends back for `clear` / `cls`
pub const CLEAR_SCREEN_SENTINEL: &str = "CLEAR_SCREEN";

/// Prefix applied to synthesized execution faults
pub const EXECUTION_FAULT_PREFIX: &str = "Error executing command: ";

/// Body of `POST /execute`
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteRequest<'a> {
    pub command: &'a str,
    pub cwd: &'a str,
}

/// Result of running a command, either reported by the service or synthesized
/// from a transport fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub output: String,
    #[serde(default)]
    pub error: bool,
    /// New working directory, if the service reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: false,
            cwd: None,
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: true,
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Normalize a transport or protocol fault into an error result
    pub fn fault(reason: impl std::fmt::Display) -> Self {
        Self::failure(format!("{EXECUTION_FAULT_PREFIX}{reason}"))
    }

    /// True when the service asked the client to clear its screen
    pub fn is_clear_screen(&self) -> bool {
        !self.error && self.output == CLEAR_SCREEN_SENTINEL
    }
}

/// Body of `POST /analyze`
///
/// The field is named `output` for both error text and free-form chat.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub output: &'a str,
}

/// Response of `POST /analyze`
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub suggestion: Option<String>,
}
