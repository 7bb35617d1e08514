use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use valform_types::Domain;

/// Per-domain configuration, stored as raw JSON and deserialized by each
/// formatter at call time.
///
/// Writes perform no validation; a consumer that finds a malformed entry
/// degrades to its option defaults rather than failing the call. Entries
/// are shallow: setting an object merges its top-level keys over the
/// previous ones, anything else replaces the entry wholesale.
#[derive(Debug, Default)]
pub struct ConfigStore {
    entries: RwLock<HashMap<Domain, Value>>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `options` as the current configuration for `domain`.
    ///
    /// Serialization of plain option structs cannot fail; inputs that do
    /// not serialize (e.g. maps with non-string keys) leave the entry
    /// untouched.
    pub fn set<T: Serialize>(&self, domain: Domain, options: &T) {
        let Ok(value) = serde_json::to_value(options) else {
            debug!(domain = %domain, "ignoring unserializable configuration");
            return;
        };
        self.set_value(domain, value);
    }

    fn set_value(&self, domain: Domain, value: Value) {
        let mut entries = self.entries.write();
        let merged = match (entries.remove(&domain), value) {
            (Some(Value::Object(mut existing)), Value::Object(incoming)) => {
                for (key, val) in incoming {
                    existing.insert(key, val);
                }
                Value::Object(existing)
            }
            (_, value) => value,
        };
        entries.insert(domain, merged);
        debug!(domain = %domain, "configuration updated");
    }

    /// Current configuration for `domain`, or an empty object if never set.
    pub fn get(&self, domain: Domain) -> Value {
        self.entries
            .read()
            .get(&domain)
            .cloned()
            .unwrap_or_else(empty_object)
    }

    /// Deserialize the current configuration for `domain` into its typed
    /// options, falling back to the defaults when the entry is malformed.
    pub fn options<T: DeserializeOwned + Default>(&self, domain: Domain) -> T {
        serde_json::from_value(self.get(domain)).unwrap_or_else(|err| {
            debug!(domain = %domain, %err, "malformed configuration, using defaults");
            T::default()
        })
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

static GLOBAL: LazyLock<ConfigStore> = LazyLock::new(ConfigStore::new);

/// The process-wide store backing the free-function API.
pub fn global() -> &'static ConfigStore {
    &GLOBAL
}

/// Write configuration for `domain` to the process-wide store.
pub fn set_config<T: Serialize>(domain: Domain, options: &T) {
    GLOBAL.set(domain, options);
}
