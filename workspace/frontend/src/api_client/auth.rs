//! Authentication operations and the locally persisted session.
//!
//! The hosted auth service issues an access token on sign-in; we keep it in
//! localStorage (the same place the vendor's own client keeps its session)
//! and send it as the bearer token on row operations. `check_session`
//! revalidates the stored token against the auth service and fails closed.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::api_client::error_message;
use crate::settings;

const SESSION_STORAGE_KEY: &str = "cryptokit_session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// The persisted session: the bearer token plus the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// Sign-up responses carry the user at the top level or nested under
/// `user` depending on whether a session was issued immediately. With
/// auto-confirm enabled the backend also issues a token right away.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    id: Option<String>,
    email: Option<String>,
    user: Option<AuthUser>,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

/// The stored session, if any. Purely local; no liveness check.
pub fn stored_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable stored session: {e}");
            clear_session();
            None
        }
    }
}

pub fn stored_access_token() -> Option<String> {
    stored_session().map(|s| s.access_token)
}

fn store_session(session: &Session) {
    if let Some(storage) = local_storage() {
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(SESSION_STORAGE_KEY, &raw).is_err() {
                    log::warn!("Failed to persist session");
                }
            }
            Err(e) => log::warn!("Failed to serialize session: {e}"),
        }
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

fn anon_headers(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let anon_key = settings::get_settings().supabase_anon_key;
    builder
        .header("apikey", &anon_key)
        .header("Content-Type", "application/json")
}

/// Create an auth account. The profile row is written separately by the
/// caller; there is no rollback of the account if that second step fails.
pub async fn sign_up(email: &str, password: &str) -> Result<AuthUser, String> {
    let url = settings::get_settings().auth_url("/signup");
    log::debug!("Signing up {email}");

    let body = serde_json::json!({
        "email": email,
        "password": password,
        "data": { "email_confirmed": true },
    });

    let response = anon_headers(Request::post(&url))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("sign_up - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message("sign_up", &response).await);
    }

    let payload: SignUpResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;

    let user = match (payload.user, payload.id) {
        (Some(user), _) => user,
        (None, Some(id)) => AuthUser {
            id,
            email: payload.email,
        },
        (None, None) => {
            log::error!("sign_up - response carried no user");
            return Err("Failed to create user".to_string());
        }
    };

    // Auto-confirmed accounts come back with a live token; persist it so the
    // profile row can be written before the explicit sign-in.
    if let Some(access_token) = payload.access_token {
        store_session(&Session {
            access_token,
            user: user.clone(),
        });
    }

    log::info!("Created auth account {}", user.id);
    Ok(user)
}

/// Password sign-in. On success the session is persisted and returned.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, String> {
    let url = settings::get_settings().auth_url("/token?grant_type=password");
    log::debug!("Signing in {email}");

    let response = anon_headers(Request::post(&url))
        .json(&Credentials { email, password })
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("sign_in - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message("sign_in", &response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;

    let session = Session {
        access_token: token.access_token,
        user: token.user,
    };
    store_session(&session);
    log::info!("Signed in as {}", session.user.id);
    Ok(session)
}

/// Revoke the session remotely and drop it locally. The local session is
/// cleared even when the revocation call fails, so sign-out always signs
/// the browser out.
pub async fn sign_out() -> Result<(), String> {
    let result = match stored_access_token() {
        Some(token) => {
            let url = settings::get_settings().auth_url("/logout");
            let anon_key = settings::get_settings().supabase_anon_key;
            let response = Request::post(&url)
                .header("apikey", &anon_key)
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| format!("Request failed: {e}"));
            match response {
                Ok(response) if response.ok() => Ok(()),
                Ok(response) => Err(error_message("sign_out", &response).await),
                Err(e) => Err(e),
            }
        }
        None => Ok(()),
    };

    clear_session();
    log::info!("Signed out");
    result
}

/// Resolve the current session: the stored token revalidated against the
/// auth service. Any failure (no token, revoked token, network error) is
/// `None`.
pub async fn check_session() -> Option<Session> {
    let session = stored_session()?;
    let url = settings::get_settings().auth_url("/user");
    let anon_key = settings::get_settings().supabase_anon_key;

    let response = Request::get(&url)
        .header("apikey", &anon_key)
        .header("Authorization", &format!("Bearer {}", session.access_token))
        .send()
        .await;

    match response {
        Ok(response) if response.ok() => Some(session),
        Ok(response) => {
            log::warn!("Stored session rejected ({}), clearing", response.status());
            clear_session();
            None
        }
        Err(e) => {
            log::error!("Error checking session: {e}");
            None
        }
    }
}

/// The signed-in user from the stored session.
pub fn current_user() -> Result<AuthUser, String> {
    stored_session()
        .map(|s| s.user)
        .ok_or_else(|| "User not authenticated".to_string())
}

/// Merge metadata onto the auth user record.
pub async fn update_user_metadata(data: serde_json::Value) -> Result<(), String> {
    let token = stored_access_token().ok_or_else(|| "User not authenticated".to_string())?;
    let url = settings::get_settings().auth_url("/user");
    let anon_key = settings::get_settings().supabase_anon_key;

    let response = Request::put(&url)
        .header("apikey", &anon_key)
        .header("Authorization", &format!("Bearer {token}"))
        .json(&serde_json::json!({ "data": data }))
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("update_user_metadata - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message("update_user_metadata", &response).await);
    }

    Ok(())
}
