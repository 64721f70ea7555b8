//! Message identifiers.
//!
//! A message identifier is the 32-bit FNV-1a hash of the message's qualified
//! name (`namespace.Name`). The codec-registration runtime builds its
//! identifier → type dispatch table from these values at process start.
//!
//! FNV-1a is chosen for stability and speed only. It is not collision
//! resistant against adversarial input and nothing here resolves collisions;
//! callers that care (the `check` command) use [`find_collisions`] to report
//! them.

use std::collections::{HashMap, HashSet};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit hash.
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }

    hash
}

/// Identifier of the message `name` in `namespace`.
///
/// # Examples
///
/// ```
/// use sprotogen_core::message_id;
///
/// assert_eq!(message_id("net", "Ping"), 0x9d7b_8dba);
/// ```
pub fn message_id(namespace: &str, name: &str) -> u32 {
    fnv1a_32(format!("{namespace}.{name}").as_bytes())
}

/// Two qualified names sharing one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCollision {
    pub id: u32,
    pub first: String,
    pub second: String,
}

/// Report every qualified name whose identifier was already taken.
///
/// Names are hashed in iteration order; each collision pairs the earlier name
/// with the later one. Repeated names are skipped, so a pair is reported once.
pub fn find_collisions<I, S>(qualified_names: I) -> Vec<IdCollision>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = HashSet::new();
    let mut seen: HashMap<u32, String> = HashMap::new();
    let mut collisions = Vec::new();

    for name in qualified_names {
        let name = name.as_ref();
        if !names.insert(name.to_string()) {
            continue;
        }

        let id = fnv1a_32(name.as_bytes());
        match seen.get(&id) {
            Some(first) => collisions.push(IdCollision {
                id,
                first: first.clone(),
                second: name.to_string(),
            }),
            None => {
                seen.insert(id, name.to_string());
            }
        }
    }

    collisions
}
