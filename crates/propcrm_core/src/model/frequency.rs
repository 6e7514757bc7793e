//! Billing frequency vocabularies.
//!
//! `FrequencyCode` is the PayProp wire vocabulary and decodes strictly:
//! outbound payloads are fully controlled, so an unknown code is a bug.
//! `InvoiceFrequency` is the local invoice schedule and parses leniently
//! from imported data.

use crate::model::vocabulary::{decode_strict, humanize_identity, Vocabulary, VocabularyError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// PayProp recurring-payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrequencyCode {
    OneTime,
    Weekly,
    BiWeekly,
    FourWeekly,
    Monthly,
    BiMonthly,
    Quarterly,
    SixMonthly,
    Annually,
}

impl FrequencyCode {
    /// Strict decode.
    ///
    /// # Errors
    /// - Invalid-argument `VocabularyError` for blank or unknown codes.
    pub fn from_code(code: &str) -> Result<Self, VocabularyError> {
        decode_strict(code)
    }

    /// Billing cycle length in months, for month-based frequencies.
    pub fn cycle_months(self) -> Option<u32> {
        match self {
            Self::Monthly => Some(1),
            Self::BiMonthly => Some(2),
            Self::Quarterly => Some(3),
            Self::SixMonthly => Some(6),
            Self::Annually => Some(12),
            _ => None,
        }
    }

    /// Billing cycle length in weeks, for week-based frequencies.
    pub fn cycle_weeks(self) -> Option<u32> {
        match self {
            Self::Weekly => Some(1),
            Self::BiWeekly => Some(2),
            Self::FourWeekly => Some(4),
            _ => None,
        }
    }

    pub fn is_recurring(self) -> bool {
        self != Self::OneTime
    }
}

impl Vocabulary for FrequencyCode {
    const NAME: &'static str = "frequency_code";
    const ALL: &'static [Self] = &[
        Self::OneTime,
        Self::Weekly,
        Self::BiWeekly,
        Self::FourWeekly,
        Self::Monthly,
        Self::BiMonthly,
        Self::Quarterly,
        Self::SixMonthly,
        Self::Annually,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::OneTime => "O",
            Self::Weekly => "W",
            Self::BiWeekly => "2W",
            Self::FourWeekly => "4W",
            Self::Monthly => "M",
            Self::BiMonthly => "2M",
            Self::Quarterly => "Q",
            Self::SixMonthly => "6M",
            Self::Annually => "A",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::OneTime => "ONE_TIME",
            Self::Weekly => "WEEKLY",
            Self::BiWeekly => "BI_WEEKLY",
            Self::FourWeekly => "FOUR_WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::BiMonthly => "BI_MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::SixMonthly => "SIX_MONTHLY",
            Self::Annually => "ANNUALLY",
        }
    }

    fn display_label(self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Self::OneTime => "One-time",
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Every 2 weeks",
            Self::FourWeekly => "Every 4 weeks",
            Self::Monthly => "Monthly",
            Self::BiMonthly => "Every 2 months",
            Self::Quarterly => "Quarterly",
            Self::SixMonthly => "Every 6 months",
            Self::Annually => "Annually",
        })
    }
}

impl FromStr for FrequencyCode {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Local invoice schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceFrequency {
    OneTime,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl InvoiceFrequency {
    pub const FALLBACK: Self = Self::Monthly;

    /// Parses imported frequency text, accepting PayProp codes and long names.
    ///
    /// Anything unrecognised, including a missing value, becomes monthly.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::FALLBACK;
        };

        match raw.trim().to_ascii_uppercase().as_str() {
            "M" | "MONTHLY" => Self::Monthly,
            "W" | "WEEKLY" => Self::Weekly,
            "D" | "DAILY" => Self::Daily,
            "Q" | "QUARTERLY" => Self::Quarterly,
            "Y" | "YEARLY" | "ANNUAL" | "A" => Self::Yearly,
            "O" | "ONE_TIME" | "ONCE" => Self::OneTime,
            _ => Self::FALLBACK,
        }
    }

    /// Whether the schedule needs a day-of-period to bill on.
    pub fn requires_payment_day(self) -> bool {
        matches!(self, Self::Monthly | Self::Quarterly | Self::Yearly)
    }
}

impl Vocabulary for InvoiceFrequency {
    const NAME: &'static str = "invoice_frequency";
    const ALL: &'static [Self] = &[
        Self::OneTime,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    fn identity(self) -> &'static str {
        match self {
            Self::OneTime => "ONE_TIME",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::Yearly => "YEARLY",
        }
    }

    fn display_label(self) -> Cow<'static, str> {
        match self {
            Self::OneTime => Cow::Borrowed("One-time"),
            other => Cow::Owned(humanize_identity(other.identity())),
        }
    }
}

impl From<FrequencyCode> for InvoiceFrequency {
    /// Nearest local schedule; week multiples collapse to weekly and
    /// multi-month cycles to quarterly or yearly.
    fn from(code: FrequencyCode) -> Self {
        match code {
            FrequencyCode::OneTime => Self::OneTime,
            FrequencyCode::Weekly | FrequencyCode::BiWeekly | FrequencyCode::FourWeekly => {
                Self::Weekly
            }
            FrequencyCode::Monthly | FrequencyCode::BiMonthly => Self::Monthly,
            FrequencyCode::Quarterly => Self::Quarterly,
            FrequencyCode::SixMonthly | FrequencyCode::Annually => Self::Yearly,
        }
    }
}
