//! sprotogen-core - Descriptor model and generation rules for sproto sources
//!
//! This crate turns a parsed sproto schema (a [`FileDescriptor`] tree produced by
//! an external schema compiler) into a [`GenerationContext`]: an ordered set of
//! view-models that a [`Renderer`] can print as host-language source.
//!
//! - [`export_name`] derives collision-safe exported identifiers
//! - [`map_field_type`] maps abstract field types to host type expressions
//! - [`encode_metadata`] builds the `kind,tag[,array],name=Name` annotation
//! - [`message_id`] computes the stable message identifier
//! - [`EnumModel`] builds enum constants and lookup tables
//! - [`assemble`] orchestrates all of the above for one file
//!
//! # Pipeline
//!
//! ```text
//! FileDescriptor
//!     ↓
//!  [assemble] ── naming / types / metadata / enums / hash
//!     ↓
//! GenerationContext
//!     ↓
//!  [Renderer] → [Formatter] → source text
//! ```

mod assemble;
mod config;
mod descriptor;
mod enums;
mod error;
mod hash;
mod host;
mod metadata;
mod model;
mod naming;
mod render;
mod types;

pub use assemble::{GenerationOptions, assemble, check_contract};
pub use config::{GeneratorConfig, TargetLanguage};
pub use descriptor::{Descriptor, FieldDescriptor, FieldType, FileDescriptor};
pub use enums::{EnumConstant, EnumModel};
pub use error::{BoxError, ConfigError, ContractViolation, GenError, GenResult};
pub use hash::{IdCollision, find_collisions, fnv1a_32, message_id};
pub use host::{Go, HostLanguage, Rust};
pub use metadata::{WireKind, encode_metadata};
pub use model::{EnumViewModel, FieldViewModel, GenerationContext, MessageViewModel};
pub use naming::{RESERVED_MARKER, export_name};
pub use render::{Formatter, Renderer, generate};
pub use types::map_field_type;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FieldDescriptor, FieldType, FileDescriptor, Formatter, GenError, GenResult,
        GenerationContext, GenerationOptions, GeneratorConfig, HostLanguage, Renderer,
        TargetLanguage, assemble, generate,
    };
}
