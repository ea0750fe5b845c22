//! # Store configuration: `fixmyward.toml`
//!
//! Defines the TOML configuration that decides where the record collections
//! live inside the key-value substrate and whether first use seeds the demo
//! data set (filename: [`StoreConfig::filename`] = `"fixmyward.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! prefix = "fixmyward"    # keys: <prefix>_problems, <prefix>_users, <prefix>_current_user
//!
//! [seed]
//! demo_data = true        # false seeds empty collections
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`StoreConfig`] | Top-level config. Builder helpers (`with_prefix`, `without_demo_data`), TOML (de)serialisation, the canonical filename, and the three derived storage keys. |
//! | [`StorageConfig`] | Storage section: the key `prefix`, default **`fixmyward`**. |
//! | [`SeedConfig`] | Seed section: `demo_data`, default **true**. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `fixmyward.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Where collections are stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix shared by every key the store writes.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// First-use seeding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed the demo problems and councillors. When false, absent
    /// collections are initialised empty.
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

fn default_prefix() -> String {
    "fixmyward".to_string()
}

fn default_demo_data() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
        }
    }
}

impl StoreConfig {
    /// Builder method to set the key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage.prefix = prefix.into();
        self
    }

    /// Builder method to disable demo seeding.
    pub fn without_demo_data(mut self) -> Self {
        self.seed.demo_data = false;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "fixmyward.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Key holding the Problems collection.
    pub fn problems_key(&self) -> String {
        format!("{}_problems", self.storage.prefix)
    }

    /// Key holding the Users collection.
    pub fn users_key(&self) -> String {
        format!("{}_users", self.storage.prefix)
    }

    /// Key holding the current-session snapshot.
    pub fn session_key(&self) -> String {
        format!("{}_current_user", self.storage.prefix)
    }
}
