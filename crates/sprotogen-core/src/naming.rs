//! Exported identifier resolution.
//!
//! Schema names are lower-camel by convention (`seq`, `userName`), while the
//! generated declarations need exported names (`Seq`, `UserName`). Promoting the
//! first letter can land on a host keyword (`self` → `Self` in Rust), so the
//! candidate is checked once against the host's reserved words.
//!
//! | Input | Reserved | Output |
//! |-------|----------|--------|
//! | `seq` | - | `Seq` |
//! | `userName` | - | `UserName` |
//! | `self` | `Self` | `Self_` |

/// Character appended to names that collide with a reserved word.
///
/// No keyword of a supported host language ends with it, so a single pass is
/// enough to leave the reserved set.
pub const RESERVED_MARKER: char = '_';

/// Derive the exported name of a schema member.
///
/// # Examples
///
/// ```
/// use sprotogen_core::export_name;
///
/// assert_eq!(export_name("seq", &[]), "Seq");
/// assert_eq!(export_name("self", &["Self"]), "Self_");
/// ```
pub fn export_name(name: &str, reserved: &[&str]) -> String {
    let mut exported = capitalize(name);

    if reserved.contains(&exported.as_str()) {
        exported.push(RESERVED_MARKER);
    }

    exported
}

/// Capitalize the first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
