//! Payment method and account type vocabularies.
//!
//! # Responsibility
//! - Map PayProp `payment_method` / `account_type` codes to typed variants.
//! - Describe which payout details each payment method needs.
//!
//! # Invariants
//! - Lenient decoders never fail; they substitute the documented fallback.
//! - Missing, blank and the literal `undefined` are "not provided", not errors.

use crate::model::vocabulary::{
    decode_strict, find_by_code, is_blank, log_fallback, Vocabulary, VocabularyError,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder PayProp sends for unset enum fields.
const PAYPROP_UNDEFINED: &str = "undefined";

/// How an owner or beneficiary is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Domestic bank transfer.
    Local,
    /// SWIFT/IBAN transfer.
    International,
    Cheque,
}

impl PaymentMethod {
    pub const FALLBACK: Self = Self::Local;

    /// Lenient decode for inbound PayProp payloads.
    ///
    /// Absent values default silently; unrecognised values emit a warning
    /// and default to [`Self::FALLBACK`].
    pub fn from_payprop_code(code: Option<&str>) -> Self {
        let Some(raw) = not_provided_filter(code) else {
            debug!(
                "event=vocabulary_default module=model vocabulary=payment_method fallback=LOCAL"
            );
            return Self::FALLBACK;
        };

        match find_by_code(raw) {
            Some(method) => method,
            None => {
                log_fallback("payprop", raw, Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }

    pub fn requires_bank_details(self) -> bool {
        matches!(self, Self::Local | Self::International)
    }

    pub fn is_international(self) -> bool {
        self == Self::International
    }

    /// Lists payout fields still missing for this method.
    ///
    /// An empty result means the payee can be paid.
    pub fn missing_payout_details(self, details: &PayoutDetails) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self {
            Self::Local => {
                push_if_blank(&mut missing, "bank_account_name", &details.bank_account_name);
                push_if_blank(&mut missing, "bank_account_number", &details.bank_account_number);
                push_if_blank(&mut missing, "bank_sort_code", &details.bank_sort_code);
            }
            Self::International => {
                push_if_blank(&mut missing, "address_line_1", &details.address_line_1);
                push_if_blank(&mut missing, "city", &details.city);
                push_if_blank(&mut missing, "country_code", &details.country_code);

                let has_iban = !is_blank(details.bank_iban.as_deref());
                let has_account_and_swift =
                    !is_blank(details.international_account_number.as_deref())
                        && !is_blank(details.bank_swift_code.as_deref());
                if !has_iban && !has_account_and_swift {
                    missing.push("bank_iban_or_account_and_swift");
                }
            }
            Self::Cheque => {}
        }
        missing
    }
}

impl Vocabulary for PaymentMethod {
    const NAME: &'static str = "payment_method";
    const ALL: &'static [Self] = &[Self::Local, Self::International, Self::Cheque];

    fn code(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::International => "international",
            Self::Cheque => "cheque",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::International => "INTERNATIONAL",
            Self::Cheque => "CHEQUE",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

/// Payout fields captured for an owner or beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDetails {
    pub bank_account_name: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_sort_code: Option<String>,
    pub bank_iban: Option<String>,
    pub international_account_number: Option<String>,
    pub bank_swift_code: Option<String>,
    pub address_line_1: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

/// Legal shape of a customer or beneficiary account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Individual,
    Business,
}

impl AccountType {
    pub const FALLBACK: Self = Self::Individual;

    /// Lenient decode for inbound PayProp payloads; defaults to individual.
    pub fn from_payprop_code(code: Option<&str>) -> Self {
        let Some(raw) = not_provided_filter(code) else {
            return Self::FALLBACK;
        };

        match find_by_code(raw) {
            Some(kind) => kind,
            None => {
                log_fallback("payprop", raw, Self::FALLBACK);
                Self::FALLBACK
            }
        }
    }

    pub fn is_business(self) -> bool {
        self == Self::Business
    }
}

impl Vocabulary for AccountType {
    const NAME: &'static str = "account_type";
    const ALL: &'static [Self] = &[Self::Individual, Self::Business];

    fn code(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Business => "BUSINESS",
        }
    }
}

impl FromStr for AccountType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_strict(s)
    }
}

fn not_provided_filter(code: Option<&str>) -> Option<&str> {
    code.map(str::trim)
        .filter(|raw| !raw.is_empty() && !raw.eq_ignore_ascii_case(PAYPROP_UNDEFINED))
}

fn push_if_blank(missing: &mut Vec<&'static str>, field: &'static str, value: &Option<String>) {
    if is_blank(value.as_deref()) {
        missing.push(field);
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountType, PaymentMethod, PayoutDetails};
    use crate::model::vocabulary::Vocabulary;

    #[test]
    fn payment_method_round_trips() {
        for method in PaymentMethod::ALL {
            assert_eq!(
                PaymentMethod::from_payprop_code(Some(method.code())),
                *method
            );
        }
    }

    #[test]
    fn unknown_payment_method_defaults_to_local() {
        assert_eq!(
            PaymentMethod::from_payprop_code(Some("xyz")),
            PaymentMethod::Local
        );
        assert_eq!(
            PaymentMethod::from_payprop_code(Some("undefined")),
            PaymentMethod::Local
        );
        assert_eq!(PaymentMethod::from_payprop_code(None), PaymentMethod::Local);
    }

    #[test]
    fn payment_method_strict_parse_rejects_unknown() {
        assert!("xyz".parse::<PaymentMethod>().is_err());
        assert_eq!(
            "International".parse::<PaymentMethod>(),
            Ok(PaymentMethod::International)
        );
    }

    #[test]
    fn local_payout_requires_uk_bank_fields() {
        let details = PayoutDetails {
            bank_account_name: Some("J Smith".to_string()),
            bank_account_number: Some("12345678".to_string()),
            ..PayoutDetails::default()
        };
        assert_eq!(
            PaymentMethod::Local.missing_payout_details(&details),
            vec!["bank_sort_code"]
        );
    }

    #[test]
    fn international_payout_accepts_iban_or_account_with_swift() {
        let mut details = PayoutDetails {
            address_line_1: Some("1 Rue de Rivoli".to_string()),
            city: Some("Paris".to_string()),
            country_code: Some("FR".to_string()),
            ..PayoutDetails::default()
        };
        assert_eq!(
            PaymentMethod::International.missing_payout_details(&details),
            vec!["bank_iban_or_account_and_swift"]
        );

        details.international_account_number = Some("0001".to_string());
        details.bank_swift_code = Some("BNPAFRPP".to_string());
        assert!(PaymentMethod::International
            .missing_payout_details(&details)
            .is_empty());
    }

    #[test]
    fn cheque_needs_nothing() {
        assert!(!PaymentMethod::Cheque.requires_bank_details());
        assert!(PaymentMethod::Cheque
            .missing_payout_details(&PayoutDetails::default())
            .is_empty());
    }

    #[test]
    fn account_type_defaults_to_individual() {
        assert_eq!(
            AccountType::from_payprop_code(Some("business")),
            AccountType::Business
        );
        assert_eq!(
            AccountType::from_payprop_code(Some(" ")),
            AccountType::Individual
        );
        assert_eq!(
            AccountType::from_payprop_code(Some("trust")),
            AccountType::Individual
        );
        assert!("trust".parse::<AccountType>().is_err());
    }
}
