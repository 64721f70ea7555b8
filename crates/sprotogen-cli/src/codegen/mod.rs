//! Source renderers for generation contexts.
//!
//! Each renderer prints a [`GenerationContext`](sprotogen_core::GenerationContext)
//! as source text for one host language. Type expressions and annotations are
//! already resolved by the core; renderers only lay them out.
//!
//! # Supported Targets
//!
//! - **Go**: structs with `sproto` struct tags, `reflect.Type` registry and
//!   an optional `init` registering it with cellnet
//! - **Rust**: structs with `#[sproto(...)]` attributes, a `MessageMeta`
//!   registry and an optional `register()` function
//!
//! # Output Layout
//!
//! ```text
//! header
//! enums      → integer type, constants, ValueByName, NameByValue, display
//! messages   → one struct per message, fields in declaration order
//! registry   → every message type with its identifier
//! [register] → hands the registry to the codec runtime
//! ```

pub mod go;
pub mod rust;

pub use go::GoRenderer;
pub use rust::RustRenderer;

use sprotogen_core::{Renderer, TargetLanguage};

/// First line of every generated file.
pub const GENERATED_BANNER: &str = "// Generated by sprotogen\n// DO NOT EDIT!";

/// Renderer for a target language.
pub fn renderer_for(lang: TargetLanguage) -> Box<dyn Renderer> {
    match lang {
        TargetLanguage::Go => Box::new(GoRenderer),
        TargetLanguage::Rust => Box::new(RustRenderer),
    }
}
