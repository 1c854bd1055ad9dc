pub mod auth;
pub mod internal_transfer;
pub mod market;
pub mod membership;
pub mod profile;
pub mod total_assets;

/// Username granted hard-coded pro treatment (PRO badge, fixed asset
/// balances). Placeholder behavior carried over from the deployed system;
/// removing it requires seeding real holdings for that account first.
pub const PRO_USERNAME: &str = "SAM1996";
