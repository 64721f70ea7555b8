//! Descriptor tree produced by the schema compiler.
//!
//! This is the input side of the generator: a language-agnostic view of one
//! parsed `.sp` schema file. The tree is read-only for the whole generation
//! pass; view-models borrow from it and never the other way around.
//!
//! # Structure
//!
//! - [`FileDescriptor`]: one schema file with its messages and enums
//! - [`Descriptor`]: a message or an enum with ordered members
//! - [`FieldDescriptor`]: a message field or an enum member (name + value)
//! - [`FieldType`]: the closed set of abstract field types
//!
//! # Wire format
//!
//! The schema compiler hands descriptors over as JSON:
//!
//! ```json
//! {
//!   "name": "login.sp",
//!   "structs": [
//!     { "name": "Ping", "fields": [
//!         { "name": "seq", "tag": 1, "type": "int32" },
//!         { "name": "peer", "tag": 2, "type": "struct", "type_name": "Peer" }
//!     ] }
//!   ],
//!   "enums": [
//!     { "name": "Result", "fields": [ { "name": "OK", "tag": 0 } ] }
//!   ]
//! }
//! ```

use crate::error::GenResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One parsed schema file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File identity, used to tag errors.
    pub name: String,

    /// Message descriptors in declaration order.
    #[serde(default)]
    pub structs: Vec<Descriptor>,

    /// Enum descriptors in declaration order.
    #[serde(default)]
    pub enums: Vec<Descriptor>,
}

/// A message or an enum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Schema-local name.
    pub name: String,

    /// Members in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

/// A message field, or an enum member when `ty` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Schema-local name.
    pub name: String,

    /// Wire tag for message fields, constant value for enum members.
    pub tag: i32,

    /// Abstract field type. Enum members carry none.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<FieldType>,

    /// Whether the field is an array.
    #[serde(default)]
    pub repeated: bool,

    /// Resolved name of the referenced descriptor for struct and enum fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

/// Abstract field type.
///
/// The set is closed: the schema compiler never produces anything else, so an
/// unknown spelling fails deserialization instead of reaching the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "boolean")]
    Bool,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "uint32")]
    UInt32,
    #[serde(rename = "uint64")]
    UInt64,
    #[serde(rename = "floating")]
    Float,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "bytes")]
    Bytes,
    /// Reference to another message.
    #[serde(rename = "struct")]
    Struct,
    /// Reference to an enum.
    #[serde(rename = "enum")]
    Enum,
}

impl FieldType {
    /// Whether this type refers to another descriptor by name.
    pub fn is_complex(self) -> bool {
        matches!(self, FieldType::Struct | FieldType::Enum)
    }
}

impl FileDescriptor {
    /// Load a descriptor tree from a JSON file.
    pub fn from_file(path: &Path) -> GenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a descriptor tree from JSON text.
    pub fn from_json(content: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Descriptor {
    /// Create a descriptor with the given members.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

impl FieldDescriptor {
    /// Create a scalar message field.
    pub fn scalar(name: impl Into<String>, tag: i32, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            tag,
            ty: Some(ty),
            repeated: false,
            type_name: None,
        }
    }

    /// Create a field referencing another message.
    pub fn message(name: impl Into<String>, tag: i32, type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::scalar(name, tag, FieldType::Struct)
        }
    }

    /// Create a field referencing an enum.
    pub fn enumeration(name: impl Into<String>, tag: i32, type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Self::scalar(name, tag, FieldType::Enum)
        }
    }

    /// Create an enum member.
    pub fn member(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            tag: value,
            ..Self::default()
        }
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}
