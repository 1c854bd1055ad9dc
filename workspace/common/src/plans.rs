//! The static membership plan catalog. Plans are not remote records; the
//! back office only ever sees the slug and the amount on a submitted
//! payment claim.

/// One line of a plan's feature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

/// A purchasable membership tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub tagline: &'static str,
    /// Yearly price in USDT, the value recorded on the payment claim.
    pub amount: f64,
    pub recommended: bool,
    pub features: &'static [PlanFeature],
}

impl Plan {
    /// Identifier submitted with a membership transaction claim.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

const fn feature(text: &'static str, included: bool) -> PlanFeature {
    PlanFeature { text, included }
}

const BASIC_FEATURES: &[PlanFeature] = &[
    feature("Transfer up to 500 USDT per month", true),
    feature("Basic market data", true),
    feature("Email support", true),
    feature("Single device access", true),
    feature("Basic analytics dashboard", true),
    feature("Ethereum transfers", false),
    feature("Bitcoin transfers", false),
    feature("Priority support", false),
];

const ADVANCE_FEATURES: &[PlanFeature] = &[
    feature("Unlimited USDT transfers", true),
    feature("Unlimited Ethereum transfers", true),
    feature("Real-time market data", true),
    feature("Priority support", true),
    feature("Multi-device access", true),
    feature("Advanced analytics", true),
    feature("Custom price alerts", true),
    feature("Bitcoin transfers", false),
];

const PRO_FEATURES: &[PlanFeature] = &[
    feature("Unlimited Bitcoin transfers", true),
    feature("Unlimited Ethereum transfers", true),
    feature("Unlimited USDT transfers", true),
    feature("Premium market insights", true),
    feature("Dedicated account manager", true),
    feature("API access", true),
    feature("Custom reports", true),
    feature("Trading automation", true),
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: "99 USDT",
        period: "per year",
        tagline: "Perfect for USDT traders",
        amount: 99.0,
        recommended: false,
        features: BASIC_FEATURES,
    },
    Plan {
        name: "Advance",
        price: "399 USDT",
        period: "per year",
        tagline: "Ideal for ETH & USDT traders",
        amount: 399.0,
        recommended: true,
        features: ADVANCE_FEATURES,
    },
    Plan {
        name: "Pro",
        price: "999 USDT",
        period: "per year",
        tagline: "Complete access to all cryptocurrencies",
        amount: 999.0,
        recommended: false,
        features: PRO_FEATURES,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_three_tiers_in_ascending_price() {
        assert_eq!(PLANS.len(), 3);
        assert!(PLANS.windows(2).all(|w| w[0].amount < w[1].amount));
    }

    #[test]
    fn only_advance_is_recommended() {
        let recommended: Vec<&str> = PLANS
            .iter()
            .filter(|p| p.recommended)
            .map(|p| p.name)
            .collect();
        assert_eq!(recommended, ["Advance"]);
    }

    #[test]
    fn slug_is_lowercased_name() {
        assert_eq!(PLANS[1].slug(), "advance");
    }

    #[test]
    fn bitcoin_transfers_gate_the_pro_tier() {
        let includes_btc = |plan: &Plan| {
            plan.features
                .iter()
                .any(|f| f.included && f.text.contains("Bitcoin transfers"))
        };

        assert!(!includes_btc(&PLANS[0]));
        assert!(!includes_btc(&PLANS[1]));
        assert!(includes_btc(&PLANS[2]));
    }
}
