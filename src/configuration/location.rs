//! Metafield Location

use crate::input::{DiscountInput, Metafield};

/// Namespace the authoring extension stores its configuration under.
pub const DEFAULT_NAMESPACE: &str = "$app:platter-tier-discounts";

/// Key the authoring extension stores its configuration under.
pub const DEFAULT_KEY: &str = "function-configuration";

const APP_PREFIX: &str = "$app:";

/// Where the configuration payload lives on a discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetafieldLocation {
    namespace: String,
    key: String,
}

impl MetafieldLocation {
    /// Create a location.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Return the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Return the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a stored metafield lives at this location.
    ///
    /// An `$app:` namespace also matches the platform-expanded `app--<id>--<suffix>` form.
    pub fn matches(&self, metafield: &Metafield) -> bool {
        let (Some(namespace), Some(key)) = (&metafield.namespace, &metafield.key) else {
            return false;
        };

        key == &self.key && self.matches_namespace(namespace)
    }

    fn matches_namespace(&self, namespace: &str) -> bool {
        if namespace == self.namespace {
            return true;
        }

        let Some(suffix) = self.namespace.strip_prefix(APP_PREFIX) else {
            return false;
        };

        namespace.starts_with("app--")
            && namespace
                .strip_suffix(suffix)
                .is_some_and(|head| head.ends_with("--"))
    }

    /// Select the raw configuration payload from a discount.
    ///
    /// A pre-selected `metafield` with a value wins; otherwise the first entry of `metafields`
    /// stored at this location is used.
    pub fn select<'a>(&self, discount: &'a DiscountInput) -> Option<&'a str> {
        if let Some(value) = discount
            .metafield
            .as_ref()
            .and_then(|metafield| metafield.value.as_deref())
        {
            return Some(value);
        }

        discount
            .metafields
            .iter()
            .find(|metafield| self.matches(metafield))
            .and_then(|metafield| metafield.value.as_deref())
    }
}

impl Default for MetafieldLocation {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE, DEFAULT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(namespace: &str, key: &str, value: &str) -> Metafield {
        Metafield {
            namespace: Some(namespace.to_string()),
            key: Some(key.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn matches_exact_location() {
        let location = MetafieldLocation::default();

        assert!(location.matches(&stored(DEFAULT_NAMESPACE, DEFAULT_KEY, "{}")));
        assert!(!location.matches(&stored(DEFAULT_NAMESPACE, "other", "{}")));
        assert!(!location.matches(&stored("custom", DEFAULT_KEY, "{}")));
    }

    #[test]
    fn app_namespace_matches_expanded_form() {
        let location = MetafieldLocation::default();

        assert!(location.matches(&stored(
            "app--123456--platter-tier-discounts",
            DEFAULT_KEY,
            "{}"
        )));
        assert!(!location.matches(&stored("platter-tier-discounts", DEFAULT_KEY, "{}")));
        assert!(!location.matches(&stored(
            "app--123456--other-platter-tier-discounts",
            DEFAULT_KEY,
            "{}"
        )));
    }

    #[test]
    fn unlocated_metafield_never_matches() {
        let location = MetafieldLocation::default();

        assert!(!location.matches(&Metafield::with_value("{}")));
    }

    #[test]
    fn select_prefers_preselected_metafield() {
        let location = MetafieldLocation::default();
        let discount = DiscountInput {
            metafield: Some(Metafield::with_value("selected")),
            metafields: vec![stored(DEFAULT_NAMESPACE, DEFAULT_KEY, "listed")],
            ..DiscountInput::default()
        };

        assert_eq!(location.select(&discount), Some("selected"));
    }

    #[test]
    fn select_finds_listed_metafield_by_location() {
        let location = MetafieldLocation::new("tiers", "config");
        let discount = DiscountInput {
            metafields: vec![
                stored("tiers", "labels", "wrong"),
                stored("tiers", "config", "right"),
            ],
            ..DiscountInput::default()
        };

        assert_eq!(location.select(&discount), Some("right"));
        assert_eq!(location.select(&DiscountInput::default()), None);
    }

    #[test]
    fn valueless_preselected_metafield_falls_back_to_list() {
        let location = MetafieldLocation::default();
        let discount = DiscountInput {
            metafield: Some(Metafield::default()),
            metafields: vec![stored(DEFAULT_NAMESPACE, DEFAULT_KEY, "listed")],
            ..DiscountInput::default()
        };

        assert_eq!(location.select(&discount), Some("listed"));
    }
}
