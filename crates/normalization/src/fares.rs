//! Fare visibility filters
//!
//! Networks hide fares by case-insensitive substring match of the fare name
//! against a keyword list, using Aho-Corasick for the multi-pattern scan.

use aho_corasick::AhoCorasick;
use domain::Fare;

use crate::error::CustomizationError;
use crate::network::NetworkId;

/// How keyword matches are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarePolicy {
    /// Hide fares whose name contains a keyword
    Deny,
    /// Hide fares whose name contains none of the keywords
    Allow,
}

/// Compiled fare keyword filter
#[derive(Debug, Clone)]
pub struct FareFilter {
    policy: FarePolicy,
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl FareFilter {
    /// Build a filter
    ///
    /// Keywords are lowercased; an empty keyword would match every fare and
    /// is rejected as a table defect.
    pub fn new(
        network: NetworkId,
        policy: FarePolicy,
        keywords: &[&str],
    ) -> Result<Self, CustomizationError> {
        if keywords.is_empty() {
            return Err(CustomizationError::invalid_table(network, "fare keyword list is empty"));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(CustomizationError::invalid_table(network, "empty fare keyword"));
        }
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let matcher = AhoCorasick::new(&keywords)?;
        Ok(Self {
            policy,
            keywords,
            matcher,
        })
    }

    /// Filter hiding fares that mention any keyword
    pub fn deny(network: NetworkId, keywords: &[&str]) -> Result<Self, CustomizationError> {
        Self::new(network, FarePolicy::Deny, keywords)
    }

    /// Filter hiding fares that mention none of the keywords
    pub fn allow(network: NetworkId, keywords: &[&str]) -> Result<Self, CustomizationError> {
        Self::new(network, FarePolicy::Allow, keywords)
    }

    /// Whether the fare should be hidden
    #[must_use]
    pub fn hides(&self, fare: &Fare) -> bool {
        let name = fare.name.as_deref().unwrap_or_default().to_lowercase();
        let mentioned = self.matcher.is_match(&name);
        match self.policy {
            FarePolicy::Deny => mentioned,
            FarePolicy::Allow => !mentioned,
        }
    }

    /// Policy of this filter
    #[must_use]
    pub const fn policy(&self) -> FarePolicy {
        self.policy
    }

    /// Lowercased keywords
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fare(name: &str) -> Fare {
        Fare::named(name, "EUR", 3.0)
    }

    #[test]
    fn deny_list_is_case_insensitive() {
        let filter = FareFilter::deny(NetworkId::Vrr, &["abo"]).expect("filter");
        assert!(filter.hides(&fare("ABO")));
        assert!(filter.hides(&fare("abo")));
        assert!(filter.hides(&fare("Ticket1000 Abo")));
        assert!(!filter.hides(&fare("EinzelTicket")));
    }

    #[test]
    fn allow_list_inverts() {
        let filter = FareFilter::allow(NetworkId::Vms, &["einzel-ticket"]).expect("filter");
        assert!(!filter.hides(&fare("Einzel-Ticket")));
        assert!(filter.hides(&fare("Tageskarte")));
    }

    #[test]
    fn unnamed_fare() {
        let mut unnamed = fare("x");
        unnamed.name = None;
        let deny = FareFilter::deny(NetworkId::Vrr, &["abo"]).expect("filter");
        let allow = FareFilter::allow(NetworkId::Vrr, &["einzel"]).expect("filter");
        assert!(!deny.hides(&unnamed));
        assert!(allow.hides(&unnamed));
    }

    #[test]
    fn non_ascii_keywords() {
        let filter = FareFilter::deny(NetworkId::Vmt, &["Übertragbar"]).expect("filter");
        assert!(filter.hides(&fare("Monatskarte übertragbar")));
        assert_eq!(filter.keywords(), &["übertragbar".to_string()]);
    }

    #[test]
    fn empty_keyword_is_rejected() {
        assert!(FareFilter::deny(NetworkId::Vrr, &["abo", " "]).is_err());
        assert!(FareFilter::deny(NetworkId::Vrr, &[]).is_err());
    }
}
