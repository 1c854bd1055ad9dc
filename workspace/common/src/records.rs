//! Remote record shapes, one struct per row collection.
//!
//! All persistent state lives in the hosted backend; these types exist so
//! the gateway can deserialize rows and serialize inserts/updates. Ids are
//! the backend's uuid strings, timestamps arrive as RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile row. Created at sign-up, read/updated by the profile view.
///
/// `transaction_password` is stored and compared in plaintext by the remote
/// schema. That is how the deployed system behaves today; do not "fix" it
/// here without a backend migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub transaction_password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert body for a new profile row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub transaction_password: String,
}

/// Partial update for a profile row. `None` fields are omitted from the
/// request body so the backend leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_password: Option<String>,
}

/// A user's recorded quantity of one asset symbol. Unique per
/// `(user_id, symbol)`; nothing in this client ever decrements one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub quantity: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Upsert body for a holding, keyed on `(user_id, symbol)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingUpsert {
    pub user_id: String,
    pub symbol: String,
    pub quantity: f64,
    pub updated_at: DateTime<Utc>,
}

impl HoldingUpsert {
    pub fn new(user_id: &str, symbol: &str, quantity: f64) -> Self {
        Self {
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            quantity,
            updated_at: Utc::now(),
        }
    }
}

/// Read-only payment address reference data, seeded out-of-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAddress {
    pub id: String,
    pub network: String,
    pub address: String,
    pub qr_code_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A user-submitted claim of an on-chain membership payment, pending manual
/// verification by a back-office process outside this repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipTransaction {
    pub id: String,
    pub user_id: String,
    pub plan: String,
    pub transaction_id: String,
    pub network: String,
    pub amount: f64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert body for a membership payment claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMembershipTransaction {
    pub user_id: String,
    pub plan: String,
    pub transaction_id: String,
    pub network: String,
    pub amount: f64,
}

/// A user-submitted claim of an on-chain deposit, same lifecycle as
/// [`MembershipTransaction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositTransaction {
    pub id: String,
    pub user_id: String,
    pub asset: String,
    pub transaction_id: String,
    pub network: String,
    pub amount: f64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert body for a deposit claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDepositTransaction {
    pub user_id: String,
    pub asset: String,
    pub transaction_id: String,
    pub network: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_row_deserializes_from_backend_json() {
        let json = r#"{
            "id": "9b2f6c1e-0000-4000-8000-000000000001",
            "username": "alice",
            "email": "a@x.com",
            "full_name": null,
            "transaction_password": "t1",
            "created_at": "2025-03-01T12:00:00.123456+00:00",
            "updated_at": "2025-03-01T12:00:00.123456+00:00"
        }"#;

        let profile: Profile = serde_json::from_str(json).expect("valid profile row");
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.full_name, None);
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            full_name: Some("Alice".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({ "full_name": "Alice" }));
    }

    #[test]
    fn holding_upsert_carries_conflict_key_columns() {
        let upsert = HoldingUpsert::new("user-1", "BTC", 0.5);
        let body = serde_json::to_value(&upsert).unwrap();

        assert_eq!(body["user_id"], "user-1");
        assert_eq!(body["symbol"], "BTC");
        assert_eq!(body["quantity"], 0.5);
        assert!(body.get("updated_at").is_some());
    }

    #[test]
    fn membership_claim_serializes_without_status() {
        // Status is assigned server-side; the client must not send one.
        let claim = NewMembershipTransaction {
            user_id: "user-1".to_string(),
            plan: "advance".to_string(),
            transaction_id: "0xabc".to_string(),
            network: "ERC20".to_string(),
            amount: 399.0,
        };

        let body = serde_json::to_value(&claim).unwrap();
        assert!(body.get("status").is_none());
        assert_eq!(body["plan"], "advance");
    }
}
