//! User-submitted payment claims. Both kinds are inserted by the client and
//! verified out-of-band by a back-office process outside this repository.

use common::records::{
    DepositTransaction, MembershipTransaction, NewDepositTransaction, NewMembershipTransaction,
};

use crate::api_client;
use crate::api_client::auth;

/// Record a membership payment claim for the signed-in user.
pub async fn submit_membership_transaction(
    plan: &str,
    transaction_id: &str,
    network: &str,
    amount: f64,
) -> Result<MembershipTransaction, String> {
    let user = auth::current_user()?;
    log::debug!("Submitting membership claim: plan={plan} network={network}");

    let claim = NewMembershipTransaction {
        user_id: user.id,
        plan: plan.to_string(),
        transaction_id: transaction_id.to_string(),
        network: network.to_string(),
        amount,
    };

    let result: Result<MembershipTransaction, String> =
        api_client::insert("membership_transactions", &claim).await;
    match &result {
        Ok(row) => log::info!("Membership claim recorded ({})", row.id),
        Err(e) => log::error!("Failed to submit membership claim: {e}"),
    }
    result
}

/// Record a deposit claim for the signed-in user.
pub async fn submit_deposit_transaction(
    asset: &str,
    transaction_id: &str,
    network: &str,
    amount: f64,
) -> Result<DepositTransaction, String> {
    let user = auth::current_user()?;
    log::debug!("Submitting deposit claim: asset={asset} network={network}");

    let claim = NewDepositTransaction {
        user_id: user.id,
        asset: asset.to_string(),
        transaction_id: transaction_id.to_string(),
        network: network.to_string(),
        amount,
    };

    let result: Result<DepositTransaction, String> =
        api_client::insert("deposit_transactions", &claim).await;
    match &result {
        Ok(row) => log::info!("Deposit claim recorded ({})", row.id),
        Err(e) => log::error!("Failed to submit deposit claim: {e}"),
    }
    result
}
