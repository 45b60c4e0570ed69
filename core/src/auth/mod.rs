//! Admin authentication: the login flow state machine and the gate that drives it

pub mod flow;
pub mod gate;

pub use flow::{Credential, GateOutcome, LoginFlow, LoginState};
pub use gate::{LoginGate, Prompter, LOGIN_PATH, PASSWORD_PROMPT, WRONG_PASSWORD_ALERT};
