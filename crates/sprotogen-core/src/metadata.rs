//! Per-field serialization metadata.
//!
//! The runtime codec reads one annotation per field, in this exact layout:
//!
//! ```text
//! kind,tag[,array],name=Name
//! ```
//!
//! `kind` is the wire kind class. All integer widths and enums share the
//! `integer` class; the runtime picks the width from the host field type.

use crate::descriptor::{FieldDescriptor, FieldType};
use std::fmt;

/// Coarse encoding category read by the runtime codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    Integer,
    Boolean,
    Double,
    String,
    Bytes,
    Struct,
}

impl WireKind {
    /// Wire kind class of a field type.
    pub fn of(ty: FieldType) -> Self {
        match ty {
            FieldType::Int32
            | FieldType::Int64
            | FieldType::UInt32
            | FieldType::UInt64
            | FieldType::Enum => WireKind::Integer,
            FieldType::Bool => WireKind::Boolean,
            FieldType::Float => WireKind::Double,
            FieldType::String => WireKind::String,
            FieldType::Bytes => WireKind::Bytes,
            FieldType::Struct => WireKind::Struct,
        }
    }

    /// Lowercase spelling used in annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            WireKind::Integer => "integer",
            WireKind::Boolean => "boolean",
            WireKind::Double => "double",
            WireKind::String => "string",
            WireKind::Bytes => "bytes",
            WireKind::Struct => "struct",
        }
    }
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the raw annotation for a message field.
///
/// `exported_name` is the resolved host name of the field, not the schema name.
///
/// # Examples
///
/// ```
/// use sprotogen_core::{FieldDescriptor, FieldType, encode_metadata};
///
/// let tags = FieldDescriptor::scalar("tags", 2, FieldType::String).repeated();
/// assert_eq!(encode_metadata(&tags, "Tags"), "string,2,array,name=Tags");
/// ```
pub fn encode_metadata(field: &FieldDescriptor, exported_name: &str) -> String {
    let Some(ty) = field.ty else {
        panic!("field `{}` reached the metadata encoder without a type", field.name);
    };

    let mut metadata = format!("{},{}", WireKind::of(ty), field.tag);
    if field.repeated {
        metadata.push_str(",array");
    }
    metadata.push_str(",name=");
    metadata.push_str(exported_name);

    metadata
}

#[cfg(test)]
#[path = "metadata/metadata_tests.rs"]
mod metadata_tests;
