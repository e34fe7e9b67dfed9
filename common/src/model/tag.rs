use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTag;

/// Redaction category a user can attach to an upload.
///
/// The set is closed: the wire representation is the upper snake case name
/// (`"EMAIL_ADDRESS"`, `"US_SSN"`, ...) and any other string is rejected when
/// parsing or deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagOption {
    EmailAddress,
    PhoneNumber,
    UsSsn,
    CreditCard,
    IbanCode,
    Passport,
    DriverLicense,
    UsBankAccount,
    UsItin,
    IpAddress,
}

impl TagOption {
    /// Every option, in the order the dropdown lists them.
    pub const ALL: [TagOption; 10] = [
        TagOption::EmailAddress,
        TagOption::PhoneNumber,
        TagOption::UsSsn,
        TagOption::CreditCard,
        TagOption::IbanCode,
        TagOption::Passport,
        TagOption::DriverLicense,
        TagOption::UsBankAccount,
        TagOption::UsItin,
        TagOption::IpAddress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagOption::EmailAddress => "EMAIL_ADDRESS",
            TagOption::PhoneNumber => "PHONE_NUMBER",
            TagOption::UsSsn => "US_SSN",
            TagOption::CreditCard => "CREDIT_CARD",
            TagOption::IbanCode => "IBAN_CODE",
            TagOption::Passport => "PASSPORT",
            TagOption::DriverLicense => "DRIVER_LICENSE",
            TagOption::UsBankAccount => "US_BANK_ACCOUNT",
            TagOption::UsItin => "US_ITIN",
            TagOption::IpAddress => "IP_ADDRESS",
        }
    }
}

impl fmt::Display for TagOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagOption {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagOption::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_ten_distinct_options_in_dropdown_order() {
        let names: Vec<&str> = TagOption::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "EMAIL_ADDRESS",
                "PHONE_NUMBER",
                "US_SSN",
                "CREDIT_CARD",
                "IBAN_CODE",
                "PASSPORT",
                "DRIVER_LICENSE",
                "US_BANK_ACCOUNT",
                "US_ITIN",
                "IP_ADDRESS",
            ]
        );
    }

    #[test]
    fn serde_name_matches_display() {
        for tag in TagOption::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_lowercase_names() {
        assert_eq!("US_ITIN".parse::<TagOption>(), Ok(TagOption::UsItin));
        assert!("us_itin".parse::<TagOption>().is_err());
        assert!("NAME".parse::<TagOption>().is_err());
        assert!(serde_json::from_str::<TagOption>("\"NAME\"").is_err());
    }
}
