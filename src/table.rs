use inlinable_string::InlinableString;
use std::collections::hash_map::{Entry, HashMap};

use crate::error::ConfigError;

/// Anything the user can select by typing a short token.
pub trait Aliased {
    fn alias(&self) -> &str;
}

/// Ordered, alias-keyed registry. Keys are matched case-insensitively and
/// iteration follows registration order, which is also the help listing order.
#[derive(Debug, Clone)]
pub struct AliasTable<T> {
    entries: Vec<T>,
    index: HashMap<InlinableString, usize>,
}

impl<T: Aliased> AliasTable<T> {
    // Fails on the first alias that collides with an earlier one
    pub fn new<I: IntoIterator<Item = T>>(kind: &'static str, entries: I) -> Result<Self, ConfigError> {
        let mut table = AliasTable {
            entries: vec![],
            index: HashMap::new(),
        };
        for entry in entries {
            let key = InlinableString::from(entry.alias().to_lowercase().as_str());
            match table.index.entry(key) {
                Entry::Occupied(_) => {
                    return Err(ConfigError::DuplicateAlias {
                        kind,
                        alias: entry.alias().to_string(),
                    })
                }
                Entry::Vacant(slot) => {
                    slot.insert(table.entries.len());
                }
            }
            table.entries.push(entry);
        }
        Ok(table)
    }

    pub fn lookup(&self, input: &str) -> Option<&T> {
        self.index
            .get(input.to_lowercase().as_str())
            .map(|&position| &self.entries[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
