use std::fmt;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::profile::errors::EmailError;

// ============================================================================
// Email
// ============================================================================
//
// Validation pipeline:
// 1. trim, reject empty and over-long input
// 2. cheap local-part screening (dots, spaces, disallowed characters)
// 3. IDN domain -> ASCII (punycode)
// 4. strict `local@domain.tld` shape check
// 5. local part length (64) and final lower-casing
//
// The `regex` crate matches in linear time, and the compiled automaton is
// capped by `size_limit`, so hostile input cannot cause backtracking blowups.
//
// ============================================================================

const LOCAL_PART_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.(?:[a-zA-Z]{2,63}|xn--[a-zA-Z0-9-]{1,59})$",
    )
    .size_limit(1 << 20)
    .build()
    .expect("Valid email pattern should always compile")
});

/// Normalized, lower-cased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LENGTH: usize = 254;
    pub const MAX_LOCAL_PART_LENGTH: usize = 64;

    pub fn create(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong { max: Self::MAX_LENGTH });
        }

        let (local, domain) = trimmed.rsplit_once('@').ok_or(EmailError::InvalidFormat)?;
        if !is_plausible_local_part(local) || domain.is_empty() {
            return Err(EmailError::InvalidFormat);
        }

        let ascii_domain = idna::domain_to_ascii(domain).map_err(|_| EmailError::InvalidFormat)?;
        let normalized = format!("{local}@{ascii_domain}");
        if normalized.chars().count() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong { max: Self::MAX_LENGTH });
        }
        if !EMAIL_SHAPE.is_match(&normalized) {
            return Err(EmailError::InvalidFormat);
        }

        if local.chars().count() > Self::MAX_LOCAL_PART_LENGTH {
            return Err(EmailError::LocalPartTooLong { max: Self::MAX_LOCAL_PART_LENGTH });
        }

        Ok(Self(normalized.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or(&self.0, |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

/// Rejects local parts that can never be valid before the full parse runs
fn is_plausible_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIALS.contains(c))
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Email {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(&value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn email_of_length(local_len: usize, total_len: usize) -> String {
        // "@" + labels joined by "." + ".com"
        let mut domain_len = total_len - local_len - 1 - 4;
        let mut labels = Vec::new();
        while domain_len > 0 {
            let take = domain_len.min(63);
            labels.push("d".repeat(take));
            domain_len -= take;
            if domain_len > 0 {
                // the dot between labels
                domain_len -= 1;
            }
        }
        format!("{}@{}.com", "a".repeat(local_len), labels.join("."))
    }

    #[test]
    fn test_email_is_lower_cased() {
        let email = Email::create("TEST@EXAMPLE.COM").unwrap();
        assert_eq!(email.as_str(), "test@example.com");
    }

    #[test]
    fn test_email_is_trimmed() {
        let email = Email::create("  john.doe@example.com ").unwrap();
        assert_eq!(email.as_str(), "john.doe@example.com");
        assert_eq!(email.local_part(), "john.doe");
        assert_eq!(email.domain(), "example.com");
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    fn test_empty_email_rejected(raw: &str) {
        assert_eq!(Email::create(raw).unwrap_err(), EmailError::Empty);
    }

    #[test_case("plainaddress"; "missing at")]
    #[test_case(".john@example.com"; "leading dot")]
    #[test_case("john.@example.com"; "trailing dot")]
    #[test_case("jo..hn@example.com"; "double dot")]
    #[test_case("jo hn@example.com"; "embedded space")]
    #[test_case("jo(hn)@example.com"; "parentheses")]
    #[test_case("@example.com"; "empty local part")]
    #[test_case("john@"; "empty domain")]
    #[test_case("john@localhost"; "no tld")]
    #[test_case("john@-example.com"; "label starts with hyphen")]
    fn test_malformed_email_rejected(raw: &str) {
        let err = Email::create(raw).unwrap_err();
        assert_eq!(err.code(), "Email.InvalidFormat");
    }

    #[test]
    fn test_international_domain_is_punycoded() {
        let email = Email::create("user@bücher.de").unwrap();
        assert_eq!(email.as_str(), "user@xn--bcher-kva.de");
    }

    #[test]
    fn test_international_tld_is_accepted() {
        let email = Email::create("user@пример.рф").unwrap();
        assert!(email.domain().starts_with("xn--"));
        assert!(email.domain().ends_with(".xn--p1ai"));
    }

    #[test]
    fn test_local_part_boundary() {
        let ok = format!("{}@example.com", "a".repeat(64));
        assert!(Email::create(&ok).is_ok());

        let too_long = format!("{}@example.com", "a".repeat(65));
        let err = Email::create(&too_long).unwrap_err();
        assert_eq!(err.code(), "Email.LocalPartTooLong");
    }

    #[test]
    fn test_total_length_boundary() {
        let ok = email_of_length(64, 254);
        assert_eq!(ok.len(), 254);
        assert!(Email::create(&ok).is_ok());

        let too_long = email_of_length(64, 255);
        assert_eq!(too_long.len(), 255);
        assert_eq!(Email::create(&too_long).unwrap_err().code(), "Email.TooLong");
    }

    #[test]
    fn test_length_is_rechecked_after_punycode() {
        // 30 labels of five non-ASCII letters: short in characters, long once encoded
        let domain = format!("{}.de", vec!["\u{fc}".repeat(5); 30].join("."));
        let raw = format!("{}@{domain}", "a".repeat(64));
        assert!(raw.chars().count() <= Email::MAX_LENGTH);

        let ascii_domain = idna::domain_to_ascii(&domain).unwrap();
        assert!(64 + 1 + ascii_domain.len() > Email::MAX_LENGTH);

        assert_eq!(Email::create(&raw).unwrap_err(), EmailError::TooLong { max: Email::MAX_LENGTH });
    }

    #[test]
    fn test_email_serde_revalidates() {
        let email: Email = serde_json::from_str("\"Jane@Example.com\"").unwrap();
        assert_eq!(email.as_str(), "jane@example.com");

        let bad: Result<Email, _> = serde_json::from_str("\"not-an-email\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_normalization_is_idempotent(
            local in "[a-z0-9]{1,20}(\\.[a-z0-9]{1,10})?",
            domain in "[a-z]{1,20}\\.[a-z]{2,6}",
        ) {
            let raw = format!("{}@{}", local.to_uppercase(), domain);
            let first = Email::create(&raw).unwrap();
            let second = Email::create(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
