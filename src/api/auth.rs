//! Login

use list_manager::{ListError, ListResult};
use serde_json::json;

use super::envelope::decode_object;
use super::ApiClient;
use crate::session::LoginGrant;

pub const LOGIN_TRANSPORT_FAILURE: &str = "Login Failed! Please check your credentials.";

pub async fn login(api: &ApiClient, email: &str, password: &str) -> ListResult<LoginGrant> {
    let body = api
        .post_json("/login", &json!({ "email": email.trim(), "password": password }))
        .await?;
    decode_object(&body, None)
}

/// Inline form error for a rejected login
pub fn login_error_text(err: &ListError) -> String {
    match err {
        ListError::Application(message) if message.contains("Email") => {
            "The email you entered doesn’t exist.".to_string()
        }
        ListError::Application(message) if message.contains("password") => {
            "The password you entered is incorrect.".to_string()
        }
        ListError::Application(message) if !message.trim().is_empty() => message.clone(),
        ListError::Application(_) => "Login Failed! Please try again later.".to_string(),
        _ => LOGIN_TRANSPORT_FAILURE.to_string(),
    }
}

/// Toast text for a rejected login: the server's own words when it sent any
pub fn login_toast_text(err: &ListError) -> String {
    err.user_message(LOGIN_TRANSPORT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_mapping() {
        let app = |m: &str| ListError::Application(m.to_string());
        assert_eq!(login_error_text(&app("Email not found")), "The email you entered doesn’t exist.");
        assert_eq!(login_error_text(&app("Invalid password")), "The password you entered is incorrect.");
        assert_eq!(login_error_text(&app("Account locked")), "Account locked");
        assert_eq!(login_error_text(&ListError::Transport("offline".into())), LOGIN_TRANSPORT_FAILURE);
    }

    #[test]
    fn test_login_toast_uses_server_message() {
        assert_eq!(login_toast_text(&ListError::Application("Invalid password".into())), "Invalid password");
        assert_eq!(login_toast_text(&ListError::Decode("x".into())), LOGIN_TRANSPORT_FAILURE);
    }

    #[test]
    fn test_rejected_login_envelope() {
        let err = decode_object::<LoginGrant>(r#"{"status":false,"message":"Email not registered"}"#, None).unwrap_err();
        assert_eq!(login_error_text(&err), "The email you entered doesn’t exist.");
    }
}
