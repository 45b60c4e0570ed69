//! Admin login gate
//!
//! Asks for the admin password, checks it against `POST /admin/login` and
//! sends the user home on any failure. Every invocation is independent.

use super::flow::{GateOutcome, LoginFlow};
use crate::error::{ApiError, GateError};
use crate::http::ApiBackend;
use crate::models::LoginRequest;
use crate::router::{paths, GuardDecision, Navigator, Route, RouteGuard};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// API path the credential is submitted to
pub const LOGIN_PATH: &str = "/admin/login";

/// Text shown when asking for the password
pub const PASSWORD_PROMPT: &str = "Please enter the password";

/// Text shown when the password is refused
pub const WRONG_PASSWORD_ALERT: &str = "The password is incorrect.";

/// Blocking user interaction used by the gate
pub trait Prompter: Send + Sync {
    /// Ask for a line of text; `None` when the user cancels
    fn prompt(&self, message: &str) -> Option<String>;

    /// Show a message and wait for the user to acknowledge it
    fn alert(&self, message: &str);
}

/// Password gate in front of protected views
pub struct LoginGate<P> {
    api: Arc<dyn ApiBackend>,
    prompter: P,
    home: String,
}

impl<P: Prompter> LoginGate<P> {
    pub fn new(api: Arc<dyn ApiBackend>, prompter: P) -> Self {
        Self {
            api,
            prompter,
            home: paths::HOME.to_string(),
        }
    }

    /// Send rejected users somewhere other than `/`
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run one login attempt to its terminal outcome without navigating
    pub async fn run(&self) -> GateOutcome {
        match self.drive().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Login flow aborted");
                GateOutcome::Redirected(e)
            }
        }
    }

    /// Run one login attempt; on failure replace the current location with home.
    /// Returns whether the caller may proceed.
    pub async fn attempt_login(&self, navigator: &mut dyn Navigator) -> bool {
        match self.run().await {
            GateOutcome::Admitted => true,
            GateOutcome::Redirected(reason) => {
                info!(%reason, home = %self.home, "Redirecting after failed login");
                if let Err(e) = navigator.replace(&self.home) {
                    warn!(error = %e, "Failed to redirect home");
                }
                false
            }
        }
    }

    async fn drive(&self) -> Result<GateOutcome, GateError> {
        let mut flow = LoginFlow::new();
        flow.begin()?;

        let input = self.prompter.prompt(PASSWORD_PROMPT);
        flow.submit(input.as_deref())?;

        if let Some(credential) = flow.credential() {
            debug!(path = LOGIN_PATH, "Submitting admin credential");
            let result = self.submit(LoginRequest::new(credential.as_str())).await;
            if let Err(e) = &result {
                error!(error = %e, "Admin login failed");
            }
            flow.resolve(result)?;
        }

        let outcome = flow.into_outcome().ok_or(GateError::InvalidTransition {
            from: "submitting",
            event: "finish",
        })?;

        if let GateOutcome::Redirected(GateError::LoginRejected(_)) = &outcome {
            self.prompter.alert(WRONG_PASSWORD_ALERT);
        }
        Ok(outcome)
    }

    async fn submit(&self, request: LoginRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(&request).map_err(|e| ApiError::Encode {
            message: e.to_string(),
        })?;
        // Response body is not used
        self.api.post_json(LOGIN_PATH, body).await.map(|_| ())
    }
}

#[async_trait]
impl<P: Prompter> RouteGuard for LoginGate<P> {
    async fn authorize(&self, route: &Route) -> GuardDecision {
        debug!(route = %route.id, "Login required");
        if self.run().await.is_admitted() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(self.home.clone())
        }
    }
}
