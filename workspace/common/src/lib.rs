//! Domain types and pure logic shared with the CryptoKit frontend.
//! These structs mirror the remote record collections (Supabase rows) and
//! the public price API payload, so the UI can deserialize responses
//! without duplicating shapes, plus the client-side rules (form validation,
//! plan catalog, table filtering/sorting, display formatting) that need no
//! browser environment and are unit-tested here.

pub mod format;
pub mod market;
pub mod plans;
pub mod records;
pub mod validation;

pub use market::{MarketAsset, SortDirection, SortKey};
pub use plans::{Plan, PlanFeature};
pub use records::{
    Holding, MembershipTransaction, NewDepositTransaction, NewMembershipTransaction,
    PaymentAddress, Profile,
};
