//! Client-side form rules. Everything here runs before any network call;
//! a form that fails validation must never reach the gateway.

use std::fmt;

/// A validation failure, rendered inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required(&'static str),
    PasswordMismatch,
    TransactionPasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "Please enter {field}"),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
            ValidationError::TransactionPasswordMismatch => {
                write!(f, "Transaction passwords do not match")
            }
        }
    }
}

/// Sign-in form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required("your username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("your password"));
        }
        Ok(())
    }
}

/// Sign-up form state. Both password pairs must agree before the gateway
/// is contacted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub transaction_password: String,
    pub confirm_transaction_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::Required("your name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("your email"));
        }
        if self.username.trim().is_empty() {
            return Err(ValidationError::Required("a username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("a password"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.transaction_password.is_empty() {
            return Err(ValidationError::Required("a transaction password"));
        }
        if self.transaction_password != self.confirm_transaction_password {
            return Err(ValidationError::TransactionPasswordMismatch);
        }
        Ok(())
    }
}

/// Withdrawable assets and their network/minimum tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Asset {
    Btc,
    Eth,
    #[default]
    Usdt,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Btc, Asset::Eth, Asset::Usdt];

    pub fn code(self) -> &'static str {
        match self {
            Asset::Btc => "btc",
            Asset::Eth => "eth",
            Asset::Usdt => "usdt",
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Asset::Btc => "BTC",
            Asset::Eth => "ETH",
            Asset::Usdt => "USDT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Asset::Btc => "Bitcoin (BTC)",
            Asset::Eth => "Ethereum (ETH)",
            Asset::Usdt => "Tether (USDT)",
        }
    }

    pub fn from_code(code: &str) -> Option<Asset> {
        match code {
            "btc" => Some(Asset::Btc),
            "eth" => Some(Asset::Eth),
            "usdt" => Some(Asset::Usdt),
            _ => None,
        }
    }

    /// Networks a withdrawal of this asset may target.
    pub fn network_options(self) -> &'static [&'static str] {
        match self {
            Asset::Btc => &["Bitcoin Network"],
            Asset::Eth => &["ERC20"],
            Asset::Usdt => &["TRC20", "ERC20"],
        }
    }

    pub fn default_network(self) -> &'static str {
        self.network_options()[0]
    }

    /// Minimum withdrawal shown as the amount placeholder.
    pub fn min_withdrawal(self) -> f64 {
        match self {
            Asset::Btc => 0.001,
            Asset::Eth => 0.01,
            Asset::Usdt => 20.0,
        }
    }
}

/// Withdraw modal form state. Submission is a simulation; completeness only
/// gates the submit button.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawForm {
    pub asset: Asset,
    pub network: String,
    pub amount: String,
    pub address: String,
    pub transaction_password: String,
}

impl Default for WithdrawForm {
    fn default() -> Self {
        let asset = Asset::default();
        Self {
            asset,
            network: asset.default_network().to_string(),
            amount: String::new(),
            address: String::new(),
            transaction_password: String::new(),
        }
    }
}

impl WithdrawForm {
    /// Switching asset resets the network to that asset's first option.
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.asset = asset;
        self.network = asset.default_network().to_string();
        self
    }

    pub fn is_complete(&self) -> bool {
        !self.address.trim().is_empty()
            && !self.amount.trim().is_empty()
            && !self.transaction_password.is_empty()
    }

    /// The "you will receive" figure; unparseable input displays as 0.
    pub fn receive_amount(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_signup() -> SignUpForm {
        SignUpForm {
            full_name: "Alice Example".to_string(),
            email: "a@x.com".to_string(),
            username: "alice".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            transaction_password: "t1".to_string(),
            confirm_transaction_password: "t1".to_string(),
        }
    }

    #[test]
    fn complete_signup_form_passes() {
        assert_eq!(complete_signup().validate(), Ok(()));
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let form = SignUpForm {
            confirm_password: "p2".to_string(),
            ..complete_signup()
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn mismatched_transaction_passwords_are_rejected() {
        let form = SignUpForm {
            confirm_transaction_password: "t2".to_string(),
            ..complete_signup()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::TransactionPasswordMismatch)
        );
    }

    #[test]
    fn empty_required_fields_are_rejected() {
        let form = SignUpForm {
            username: "   ".to_string(),
            ..complete_signup()
        };
        assert!(matches!(form.validate(), Err(ValidationError::Required(_))));
    }

    #[test]
    fn signin_requires_both_fields() {
        let form = SignInForm {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());

        let form = SignInForm {
            username: "alice".to_string(),
            password: "p1".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn usdt_withdrawals_offer_both_networks() {
        assert_eq!(Asset::Usdt.network_options(), ["TRC20", "ERC20"]);
        assert_eq!(Asset::Btc.network_options(), ["Bitcoin Network"]);
    }

    #[test]
    fn switching_asset_resets_network() {
        let form = WithdrawForm::default();
        assert_eq!(form.network, "TRC20");

        let form = form.with_asset(Asset::Eth);
        assert_eq!(form.network, "ERC20");
    }

    #[test]
    fn incomplete_withdraw_form_blocks_submission() {
        let mut form = WithdrawForm::default();
        assert!(!form.is_complete());

        form.address = "TXyz".to_string();
        form.amount = "25".to_string();
        form.transaction_password = "t1".to_string();
        assert!(form.is_complete());
        assert_eq!(form.receive_amount(), 25.0);
    }

    #[test]
    fn garbage_amount_displays_as_zero() {
        let form = WithdrawForm {
            amount: "abc".to_string(),
            ..WithdrawForm::default()
        };
        assert_eq!(form.receive_amount(), 0.0);
    }
}
