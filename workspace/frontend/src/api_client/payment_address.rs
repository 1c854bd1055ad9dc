use std::collections::HashMap;

use common::records::PaymentAddress;

use crate::api_client;

/// All payment addresses, ordered by network. Read-only reference data
/// seeded out-of-band.
pub async fn get_payment_addresses() -> Result<Vec<PaymentAddress>, String> {
    log::trace!("Fetching payment addresses");
    let result = api_client::select("payment_addresses?select=*&order=network.asc").await;
    match &result {
        Ok(addresses) => log::info!("Fetched {} payment addresses", addresses.len()),
        Err(e) => log::error!("Failed to fetch payment addresses: {e}"),
    }
    result
}

/// Collapse the address list into a network → address map for the payment
/// modals. Later rows win on duplicate networks, matching the row order.
pub fn address_map(addresses: Vec<PaymentAddress>) -> HashMap<String, PaymentAddress> {
    addresses
        .into_iter()
        .map(|address| (address.network.clone(), address))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(network: &str, value: &str) -> PaymentAddress {
        PaymentAddress {
            id: format!("id-{network}"),
            network: network.to_string(),
            address: value.to_string(),
            qr_code_url: format!("https://cdn.example/{network}.png"),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn map_is_keyed_by_network() {
        let map = address_map(vec![address("TRC20", "Txyz"), address("ERC20", "0xabc")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["ERC20"].address, "0xabc");
        assert_eq!(map["TRC20"].address, "Txyz");
    }

    #[test]
    fn duplicate_network_keeps_last_row() {
        let map = address_map(vec![address("TRC20", "Told"), address("TRC20", "Tnew")]);
        assert_eq!(map["TRC20"].address, "Tnew");
    }
}
