use common::records::{NewProfile, Profile, ProfileUpdate};

use crate::api_client;

fn by_id_query(user_id: &str) -> String {
    format!("profiles?id=eq.{}&select=*", urlencoding::encode(user_id))
}

fn by_username_query(username: &str) -> String {
    format!(
        "profiles?username=eq.{}&select=*",
        urlencoding::encode(username)
    )
}

/// Get the profile row of a user; `Ok(None)` when no row exists.
pub async fn get_profile(user_id: &str) -> Result<Option<Profile>, String> {
    log::trace!("Fetching profile for user {user_id}");
    let result: Result<Option<Profile>, String> =
        api_client::select_single(&by_id_query(user_id)).await;
    match &result {
        Ok(Some(profile)) => log::info!("Fetched profile: {}", profile.username),
        Ok(None) => log::info!("No profile row for user {user_id}"),
        Err(e) => log::error!("Failed to fetch profile for {user_id}: {e}"),
    }
    result
}

/// Resolve a username to its profile; `Ok(None)` when it is unclaimed.
pub async fn get_profile_by_username(username: &str) -> Result<Option<Profile>, String> {
    log::trace!("Looking up username {username}");
    let result = api_client::select_single(&by_username_query(username)).await;
    match &result {
        Ok(Some(_)) => log::info!("Username {username} resolved"),
        Ok(None) => log::info!("Username {username} not found"),
        Err(e) => log::error!("Failed to look up username {username}: {e}"),
    }
    result
}

/// Write the profile row for a freshly created auth account. Also marks the
/// account's email confirmed in auth metadata, which the deployed backend
/// relies on instead of a confirmation mail.
pub async fn create_profile(profile: NewProfile) -> Result<(), String> {
    log::debug!("Creating profile for {}", profile.username);

    api_client::auth::update_user_metadata(serde_json::json!({ "email_confirmed": true })).await?;

    let created: Profile = api_client::insert("profiles", &profile).await.map_err(|e| {
        log::error!("Failed to create profile '{}': {e}", profile.username);
        e
    })?;

    log::info!("Created profile {} ({})", created.username, created.id);
    Ok(())
}

/// Partial update of the caller's profile row.
pub async fn update_profile(user_id: &str, updates: &ProfileUpdate) -> Result<(), String> {
    log::debug!("Updating profile {user_id}");
    let result = api_client::update(
        &format!("profiles?id=eq.{}", urlencoding::encode(user_id)),
        updates,
    )
    .await;
    match &result {
        Ok(()) => log::info!("Updated profile {user_id}"),
        Err(e) => log::error!("Failed to update profile {user_id}: {e}"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_filter_is_url_encoded() {
        assert_eq!(
            by_username_query("alice"),
            "profiles?username=eq.alice&select=*"
        );
        // Filter metacharacters must not leak into the query grammar.
        assert_eq!(
            by_username_query("a&b=c"),
            "profiles?username=eq.a%26b%3Dc&select=*"
        );
    }

    #[test]
    fn id_filter_targets_single_row() {
        assert_eq!(
            by_id_query("9b2f6c1e-0000-4000-8000-000000000001"),
            "profiles?id=eq.9b2f6c1e-0000-4000-8000-000000000001&select=*"
        );
    }
}
