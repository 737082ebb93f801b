use std::sync::OnceLock;

use regex::Regex;

use super::lists::{is_disposable_domain, is_role_local_part};
use super::types::{Classification, Source, Status};

fn shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid address regex"))
}

/// Classify `address` without touching the network.
///
/// The verdict only reflects the shape `local@domain.tld`. The disposable and
/// role flags are computed independently and never change the status.
pub fn classify_offline(address: &str) -> Classification {
    let input = address.trim();

    let status = if shape().is_match(input) {
        Status::Valid
    } else {
        Status::Invalid
    };

    // découpe sur le dernier '@'
    let (disposable, role) = match input.rsplit_once('@') {
        Some((local, domain)) => (is_disposable_domain(domain), is_role_local_part(local)),
        None => (false, false),
    };

    Classification::new(input, status, Source::Offline).with_flags(disposable, role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn disposable_but_well_formed() {
        let c = classify_offline("user@mailinator.com");
        assert_eq!(c.status, Status::Valid);
        assert!(c.disposable);
        assert_eq!(c.source, Source::Offline);
    }

    #[test]
    fn no_at_is_invalid() {
        let c = classify_offline("not-an-email");
        assert_eq!(c.status, Status::Invalid);
        assert!(!c.disposable);
        assert!(!c.role);
    }

    #[test]
    fn shape_edge_cases() {
        for bad in ["@example.com", "alice@", "alice@example", "alice@.com", "alice@example.", "a b@example.com", "a@b@c.com", ""] {
            assert_eq!(classify_offline(bad).status, Status::Invalid, "{bad}");
        }
        for good in ["alice@example.com", "a.b+tag@sub.example.co.uk", "  padded@example.org  "] {
            assert_eq!(classify_offline(good).status, Status::Valid, "{good}");
        }
    }

    #[test]
    fn trims_but_keeps_case() {
        let c = classify_offline("  Alice@Example.COM ");
        assert_eq!(c.email, "Alice@Example.COM");
        assert_eq!(c.status, Status::Valid);
    }

    #[test]
    fn disposable_uses_last_at_and_lowercase() {
        let c = classify_offline("x@y@MAILINATOR.com");
        assert_eq!(c.status, Status::Invalid);
        assert!(c.disposable);
    }

    #[test]
    fn role_flag_is_independent() {
        let c = classify_offline("admin@example.com");
        assert_eq!(c.status, Status::Valid);
        assert!(c.role);
        assert!(!c.disposable);
    }

    proptest! {
        #[test]
        fn generated_addresses_are_valid_and_not_disposable(
            local in "[a-z0-9._%+-]{1,20}",
            domain in "[a-z0-9-]{1,20}",
            tld in "[a-z]{2,6}",
        ) {
            let address = format!("{local}@{domain}.{tld}");
            let c = classify_offline(&address);
            prop_assert_eq!(c.status, Status::Valid);
            let full = format!("{domain}.{tld}");
            prop_assert_eq!(c.disposable, is_disposable_domain(&full));
        }

        #[test]
        fn without_at_always_invalid(s in "[^@]{0,40}") {
            let c = classify_offline(&s);
            prop_assert_eq!(c.status, Status::Invalid);
            prop_assert!(!c.disposable);
        }
    }
}
