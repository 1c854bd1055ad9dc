pub mod auth;
pub mod holding;
pub mod market;
pub mod payment_address;
pub mod profile;
pub mod realtime;
pub mod transaction;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::settings;

/// Error payload shape of the backend. The row endpoints use `message`,
/// the auth endpoints use `msg` or `error_description`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

/// Extract a user-facing message from a non-2xx response.
pub(crate) async fn error_message(endpoint: &str, response: &Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => {
            let detail = body
                .message
                .or(body.msg)
                .or(body.error_description)
                .unwrap_or_else(|| format!("HTTP error: {status}"));
            log::error!("{endpoint} - API error: {detail}");
            detail
        }
        Err(_) => {
            let detail = format!("HTTP error: {status}");
            log::error!("{endpoint} - {detail}");
            detail
        }
    }
}

fn rest_url(path_and_query: &str) -> String {
    settings::get_settings().rest_url(path_and_query)
}

/// Attach the api key and the caller's bearer token. Unauthenticated calls
/// fall back to the anon key, which is what the backend's row-level rules
/// expect.
fn with_auth_headers(builder: RequestBuilder) -> RequestBuilder {
    let anon_key = settings::get_settings().supabase_anon_key;
    let token = auth::stored_access_token().unwrap_or_else(|| anon_key.clone());
    builder
        .header("apikey", &anon_key)
        .header("Authorization", &format!("Bearer {token}"))
}

/// Row select. `path_and_query` is the table name plus filters, e.g.
/// `profiles?username=eq.alice&select=*`.
pub(crate) async fn select<T>(path_and_query: &str) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
{
    let url = rest_url(path_and_query);
    log::debug!("SELECT {url}");

    let response = with_auth_headers(Request::get(&url))
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("SELECT {path_and_query} - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message(path_and_query, &response).await);
    }

    let rows: Vec<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {e}");
        log::error!("SELECT {path_and_query} - {error_msg}");
        error_msg
    })?;

    log::trace!("SELECT {path_and_query} - {} rows", rows.len());
    Ok(rows)
}

/// Select expecting at most one row; an empty result is `Ok(None)`.
pub(crate) async fn select_single<T>(path_and_query: &str) -> Result<Option<T>, String>
where
    T: DeserializeOwned,
{
    let mut rows = select::<T>(path_and_query).await?;
    if rows.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rows.remove(0)))
    }
}

/// Row insert returning the created row.
pub(crate) async fn insert<T, B>(table: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = rest_url(table);
    log::debug!("INSERT {url}");

    let response = with_auth_headers(Request::post(&url))
        .header("Prefer", "return=representation")
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {e}");
            log::error!("INSERT {table} - {error_msg}");
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("INSERT {table} - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message(table, &response).await);
    }

    // The row endpoint returns the representation as a one-element array.
    let mut rows: Vec<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {e}");
        log::error!("INSERT {table} - {error_msg}");
        error_msg
    })?;

    if rows.is_empty() {
        let error_msg = "Insert returned no rows".to_string();
        log::error!("INSERT {table} - {error_msg}");
        return Err(error_msg);
    }

    log::info!("INSERT {table} - Success");
    Ok(rows.remove(0))
}

/// Partial row update over a filter, e.g. `profiles?id=eq.<uuid>`.
pub(crate) async fn update<B>(path_and_query: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let url = rest_url(path_and_query);
    log::debug!("UPDATE {url}");

    let response = with_auth_headers(Request::patch(&url))
        .header("Prefer", "return=minimal")
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {e}");
            log::error!("UPDATE {path_and_query} - {error_msg}");
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("UPDATE {path_and_query} - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message(path_and_query, &response).await);
    }

    log::info!("UPDATE {path_and_query} - Success");
    Ok(())
}

/// Insert-or-update keyed on `on_conflict` columns.
pub(crate) async fn upsert<B>(table: &str, on_conflict: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let path_and_query = format!("{table}?on_conflict={on_conflict}");
    let url = rest_url(&path_and_query);
    log::debug!("UPSERT {url}");

    let response = with_auth_headers(Request::post(&url))
        .header("Prefer", "resolution=merge-duplicates,return=minimal")
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {e}");
            log::error!("UPSERT {table} - {error_msg}");
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {e}");
            log::error!("UPSERT {table} - {error_msg}");
            error_msg
        })?;

    if !response.ok() {
        return Err(error_message(table, &response).await);
    }

    log::info!("UPSERT {table} - Success");
    Ok(())
}
