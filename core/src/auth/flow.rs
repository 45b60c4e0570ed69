//! Login flow state machine
//!
//! ```text
//! Idle --begin--> AwaitingInput --submit(blank)--> Rejected(MissingCredential)
//!                 AwaitingInput --submit(text)---> Submitting
//!                 Submitting --resolve(ok)-------> Admitted
//!                 Submitting --resolve(err)------> Rejected(LoginRejected)
//! ```

use crate::error::GateError;
use crate::http::ApiResult;
use std::fmt;

/// A trimmed, non-empty admin password
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Trim raw prompt input; blank or absent input yields `None`
    pub fn from_input(input: Option<&str>) -> Option<Self> {
        input
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Where a login attempt currently stands
#[derive(Debug)]
pub enum LoginState {
    Idle,
    AwaitingInput,
    Submitting(Credential),
    Admitted,
    Rejected(GateError),
}

impl LoginState {
    pub fn name(&self) -> &'static str {
        match self {
            LoginState::Idle => "idle",
            LoginState::AwaitingInput => "awaiting input",
            LoginState::Submitting(_) => "submitting",
            LoginState::Admitted => "admitted",
            LoginState::Rejected(_) => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoginState::Admitted | LoginState::Rejected(_))
    }
}

/// Terminal result of a login attempt
#[derive(Debug)]
pub enum GateOutcome {
    /// The caller may proceed to the protected view
    Admitted,
    /// The caller must be sent home
    Redirected(GateError),
}

impl GateOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, GateOutcome::Admitted)
    }
}

/// One login attempt, driven by explicit events
#[derive(Debug)]
pub struct LoginFlow {
    state: LoginState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            state: LoginState::Idle,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Credential being submitted, if any
    pub fn credential(&self) -> Option<&Credential> {
        match &self.state {
            LoginState::Submitting(credential) => Some(credential),
            _ => None,
        }
    }

    /// Start asking for input
    pub fn begin(&mut self) -> Result<&LoginState, GateError> {
        match self.state {
            LoginState::Idle => {
                self.state = LoginState::AwaitingInput;
                Ok(&self.state)
            }
            _ => Err(self.invalid("begin")),
        }
    }

    /// Hand over what the user typed; `None` means the prompt was cancelled
    pub fn submit(&mut self, input: Option<&str>) -> Result<&LoginState, GateError> {
        if !matches!(self.state, LoginState::AwaitingInput) {
            return Err(self.invalid("submit"));
        }

        self.state = match Credential::from_input(input) {
            Some(credential) => LoginState::Submitting(credential),
            None => LoginState::Rejected(GateError::MissingCredential),
        };
        Ok(&self.state)
    }

    /// Record the result of the login request
    pub fn resolve(&mut self, result: ApiResult<()>) -> Result<&LoginState, GateError> {
        if !matches!(self.state, LoginState::Submitting(_)) {
            return Err(self.invalid("resolve"));
        }

        self.state = match result {
            Ok(()) => LoginState::Admitted,
            Err(e) => LoginState::Rejected(GateError::LoginRejected(e)),
        };
        Ok(&self.state)
    }

    /// Final outcome; `None` until the flow reaches a terminal state
    pub fn into_outcome(self) -> Option<GateOutcome> {
        match self.state {
            LoginState::Admitted => Some(GateOutcome::Admitted),
            LoginState::Rejected(reason) => Some(GateOutcome::Redirected(reason)),
            _ => None,
        }
    }

    fn invalid(&self, event: &'static str) -> GateError {
        GateError::InvalidTransition {
            from: self.state.name(),
            event,
        }
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}
