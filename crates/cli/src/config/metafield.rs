//! Configuration metafield location

use clap::Args;

use tiered_discount::configuration::{DEFAULT_KEY, DEFAULT_NAMESPACE, MetafieldLocation};

/// Where the tier configuration is read from.
#[derive(Debug, Args)]
pub struct MetafieldConfig {
    /// Metafield namespace holding the tier configuration
    #[arg(long, env = "TIERED_DISCOUNT_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Metafield key holding the tier configuration
    #[arg(long, env = "TIERED_DISCOUNT_KEY", default_value = DEFAULT_KEY)]
    pub key: String,
}

impl MetafieldConfig {
    /// Metafield location for the configuration parser.
    pub fn location(&self) -> MetafieldLocation {
        MetafieldLocation::new(self.namespace.as_str(), self.key.as_str())
    }
}
