//! Host language profiles.
//!
//! A profile owns everything the mapping rules need to know about the target
//! language: its reserved words, primitive type names, and how sequences,
//! owning references and field annotations are spelled.
//!
//! # Type Mappings
//!
//! | Field type | Go | Rust |
//! |------------|----|------|
//! | `boolean` | `bool` | `bool` |
//! | `int32` | `int32` | `i32` |
//! | `int64` | `int64` | `i64` |
//! | `uint32` | `uint32` | `u32` |
//! | `uint64` | `uint64` | `u64` |
//! | `floating` | `float64` | `f64` |
//! | `string` | `string` | `String` |
//! | `bytes` | `[]byte` | `Vec<u8>` |
//! | `struct T` | `*T` | `Option<Box<T>>` |
//! | repeated `E` | `[]E` | `Vec<E>` |

use crate::descriptor::FieldType;
use std::fmt;

/// Spelling rules of a target language.
pub trait HostLanguage: fmt::Debug + Send + Sync {
    /// Language identifier (e.g., "go", "rust").
    fn name(&self) -> &'static str;

    /// Words an exported identifier must not be equal to.
    fn reserved_words(&self) -> &'static [&'static str];

    /// Primitive type for a non-reference field type.
    ///
    /// Returns `None` for struct and enum references.
    fn primitive(&self, ty: FieldType) -> Option<&'static str>;

    /// Dynamic sequence of `element`.
    fn sequence(&self, element: &str) -> String;

    /// Owning, nullable reference to a message type.
    fn indirect(&self, type_name: &str) -> String;

    /// Embed a raw `kind,tag[,array],name=Name` annotation in field syntax.
    fn annotate(&self, metadata: &str) -> String;
}

/// Go: struct tags and pointer-typed messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Go;

/// Rust: attributes and boxed optional messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rust;

// Keywords, plus the `String` method declared on every generated message.
const GO_RESERVED: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
    "String",
];

// Strict, reserved and edition-2018+ keywords.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

impl HostLanguage for Go {
    fn name(&self) -> &'static str {
        "go"
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        GO_RESERVED
    }

    fn primitive(&self, ty: FieldType) -> Option<&'static str> {
        match ty {
            FieldType::Bool => Some("bool"),
            FieldType::Int32 => Some("int32"),
            FieldType::Int64 => Some("int64"),
            FieldType::UInt32 => Some("uint32"),
            FieldType::UInt64 => Some("uint64"),
            FieldType::Float => Some("float64"),
            FieldType::String => Some("string"),
            FieldType::Bytes => Some("[]byte"),
            FieldType::Struct | FieldType::Enum => None,
        }
    }

    fn sequence(&self, element: &str) -> String {
        format!("[]{element}")
    }

    fn indirect(&self, type_name: &str) -> String {
        format!("*{type_name}")
    }

    fn annotate(&self, metadata: &str) -> String {
        format!("`sproto:\"{metadata}\"`")
    }
}

impl HostLanguage for Rust {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        RUST_KEYWORDS
    }

    fn primitive(&self, ty: FieldType) -> Option<&'static str> {
        match ty {
            FieldType::Bool => Some("bool"),
            FieldType::Int32 => Some("i32"),
            FieldType::Int64 => Some("i64"),
            FieldType::UInt32 => Some("u32"),
            FieldType::UInt64 => Some("u64"),
            FieldType::Float => Some("f64"),
            FieldType::String => Some("String"),
            FieldType::Bytes => Some("Vec<u8>"),
            FieldType::Struct | FieldType::Enum => None,
        }
    }

    fn sequence(&self, element: &str) -> String {
        format!("Vec<{element}>")
    }

    fn indirect(&self, type_name: &str) -> String {
        format!("Option<Box<{type_name}>>")
    }

    fn annotate(&self, metadata: &str) -> String {
        format!("#[sproto(\"{metadata}\")]")
    }
}
