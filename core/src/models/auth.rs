//! Admin login request body

use serde::{Deserialize, Serialize};

/// Body of `POST /admin/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

impl LoginRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

// Keep the credential out of logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let body = serde_json::to_value(LoginRequest::new("hunter2")).unwrap();
        assert_eq!(body, serde_json::json!({ "password": "hunter2" }));
    }

    #[test]
    fn test_debug_redacts_password() {
        let printed = format!("{:?}", LoginRequest::new("hunter2"));
        assert!(!printed.contains("hunter2"));
    }
}
