//! Admin account bodies.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// Body of `GET /admin/setup-required`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetupRequired {
    /// True while no admin account exists yet
    #[serde(default, deserialize_with = "null_as_default")]
    pub setup: bool,
}

/// Request body for `POST /admin/register`.
///
/// `confirm` is forwarded as typed. Nothing on this side checks it against
/// `password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Request body for `POST /admin/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `GET /admin/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminProfile {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_keeps_confirm_field() {
        let req = RegisterRequest {
            full_name: "Ada Admin".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            confirm: "different".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["confirm"], "different");
        assert_eq!(json["full_name"], "Ada Admin");
    }

    #[test]
    fn test_setup_required_defaults_to_false() {
        let s: SetupRequired = serde_json::from_str("{}").unwrap();
        assert!(!s.setup);
        let s: SetupRequired = serde_json::from_str(r#"{"setup": true}"#).unwrap();
        assert!(s.setup);
    }

    #[test]
    fn test_profile_accepts_arbitrary_shape() {
        let p: AdminProfile = serde_json::from_str(r#"{"username":"ada","role":"owner"}"#).unwrap();
        assert_eq!(p.username.as_deref(), Some("ada"));
        assert!(p.email.is_none());
    }
}
