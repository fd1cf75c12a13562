//! Tunable constants for the allocation engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RestockError, Result};

pub const DEFAULT_NEVER_SENDER_STORE: &str = "Internet Mağaza";
pub const DEFAULT_CAPPED_RECEIVER_STORE: &str = "Caddebostan Mağaza";

/// Store identities and thresholds consumed by the allocation engine.
///
/// Every field has a default, so a config file only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Store that never ships units (typically the e-commerce fulfillment store).
    pub never_sender_store: String,

    /// Store limited to `capped_receiver_limit` units per product code.
    pub capped_receiver_store: String,

    /// Maximum units the capped receiver may take per product code in one run,
    /// summed over all colors and sizes.
    pub capped_receiver_limit: u32,

    /// Maximum units on a single transfer line.
    pub max_per_line: u32,

    /// A variant is left untouched when the never-sender store holds at
    /// least this much stock of it.
    pub never_sender_skip_stock: u32,

    /// Rows must have stock strictly below this to receive.
    pub receive_stock_ceiling: u32,

    /// Need multiplier applied to sales for rows with zero stock.
    pub zero_stock_multiplier: u32,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            never_sender_store: DEFAULT_NEVER_SENDER_STORE.to_string(),
            capped_receiver_store: DEFAULT_CAPPED_RECEIVER_STORE.to_string(),
            capped_receiver_limit: 3,
            max_per_line: 4,
            never_sender_skip_stock: 10,
            receive_stock_ceiling: 4,
            zero_stock_multiplier: 2,
        }
    }
}

impl AllocationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_never_sender(mut self, store: impl Into<String>) -> Self {
        self.never_sender_store = store.into();
        self
    }

    #[must_use]
    pub fn with_capped_receiver(mut self, store: impl Into<String>) -> Self {
        self.capped_receiver_store = store.into();
        self
    }

    #[must_use]
    pub fn with_capped_receiver_limit(mut self, limit: u32) -> Self {
        self.capped_receiver_limit = limit;
        self
    }

    #[must_use]
    pub fn with_max_per_line(mut self, max: u32) -> Self {
        self.max_per_line = max;
        self
    }

    #[must_use]
    pub fn with_never_sender_skip_stock(mut self, threshold: u32) -> Self {
        self.never_sender_skip_stock = threshold;
        self
    }

    #[must_use]
    pub fn with_receive_stock_ceiling(mut self, ceiling: u32) -> Self {
        self.receive_stock_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_zero_stock_multiplier(mut self, multiplier: u32) -> Self {
        self.zero_stock_multiplier = multiplier;
        self
    }

    /// Check values the engine cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`RestockError::InvalidConfig`] when the per-line maximum or the
    /// zero-stock multiplier is zero, or when both designated stores share a name.
    pub fn validate(&self) -> Result<()> {
        if self.max_per_line == 0 {
            return Err(RestockError::invalid("max_per_line must be at least 1"));
        }
        if self.zero_stock_multiplier == 0 {
            return Err(RestockError::invalid(
                "zero_stock_multiplier must be at least 1",
            ));
        }
        if !self.never_sender_store.is_empty()
            && self.never_sender_store == self.capped_receiver_store
        {
            return Err(RestockError::invalid(format!(
                "never_sender_store and capped_receiver_store are both '{}'",
                self.never_sender_store
            )));
        }
        Ok(())
    }

    /// Parse a TOML document; omitted keys keep their defaults.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| RestockError::Toml {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| RestockError::io(path, source))?;
        Self::from_toml_str(&contents, path)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn is_never_sender(&self, store: &str) -> bool {
        store == self.never_sender_store
    }

    pub fn is_capped_receiver(&self, store: &str) -> bool {
        store == self.capped_receiver_store
    }
}
