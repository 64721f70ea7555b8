//! View-models handed to renderers.
//!
//! View-models are read-only decorations over the descriptor tree, built fresh
//! for every generation pass. They borrow the descriptors and the namespace;
//! nothing in the descriptor tree points back at them.

use crate::descriptor::{Descriptor, FieldDescriptor};
use crate::enums::EnumModel;
use crate::hash::message_id;
use crate::host::HostLanguage;
use crate::metadata::encode_metadata;
use crate::naming::export_name;
use crate::types::map_field_type;
use once_cell::unsync::OnceCell;

/// Everything a renderer needs to print one schema file.
#[derive(Debug)]
pub struct GenerationContext<'a> {
    pub(crate) file: &'a str,
    pub(crate) namespace: &'a str,
    pub(crate) register: bool,
    pub(crate) host: &'a dyn HostLanguage,
    pub(crate) messages: Vec<MessageViewModel<'a>>,
    pub(crate) enums: Vec<EnumViewModel<'a>>,
}

impl<'a> GenerationContext<'a> {
    /// Identity of the schema file.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Namespace (Go package, Rust module) of the generated source.
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Whether to emit registration glue for the codec-registration runtime.
    pub fn register(&self) -> bool {
        self.register
    }

    /// Host language the types were mapped for.
    pub fn host(&self) -> &'a dyn HostLanguage {
        self.host
    }

    /// Messages in declaration order. This is also the registry order.
    pub fn messages(&self) -> &[MessageViewModel<'a>] {
        &self.messages
    }

    /// Enums in declaration order.
    pub fn enums(&self) -> &[EnumViewModel<'a>] {
        &self.enums
    }
}

/// One message to declare.
#[derive(Debug)]
pub struct MessageViewModel<'a> {
    descriptor: &'a Descriptor,
    namespace: &'a str,
    fields: Vec<FieldViewModel>,
    id: OnceCell<u32>,
}

impl<'a> MessageViewModel<'a> {
    pub(crate) fn new(
        descriptor: &'a Descriptor,
        namespace: &'a str,
        host: &dyn HostLanguage,
    ) -> Self {
        let fields = descriptor
            .fields
            .iter()
            .map(|field| FieldViewModel::new(field, host))
            .collect();

        Self {
            descriptor,
            namespace,
            fields,
            id: OnceCell::new(),
        }
    }

    /// Type name of the message.
    pub fn name(&self) -> &'a str {
        &self.descriptor.name
    }

    /// `namespace.Name`
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.descriptor.name)
    }

    /// Message identifier, computed on first use.
    pub fn message_id(&self) -> u32 {
        *self
            .id
            .get_or_init(|| message_id(self.namespace, &self.descriptor.name))
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldViewModel] {
        &self.fields
    }
}

/// One message field to declare.
#[derive(Debug, Clone)]
pub struct FieldViewModel {
    name: String,
    type_expr: String,
    metadata: String,
    annotation: String,
}

impl FieldViewModel {
    pub(crate) fn new(descriptor: &FieldDescriptor, host: &dyn HostLanguage) -> Self {
        let name = export_name(&descriptor.name, host.reserved_words());
        let type_expr = map_field_type(descriptor, host);
        let metadata = encode_metadata(descriptor, &name);
        let annotation = host.annotate(&metadata);

        Self {
            name,
            type_expr,
            metadata,
            annotation,
        }
    }

    /// Exported, collision-safe field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host type expression.
    pub fn type_expr(&self) -> &str {
        &self.type_expr
    }

    /// Raw `kind,tag[,array],name=Name` annotation.
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Annotation embedded in host field syntax.
    pub fn annotation(&self) -> &str {
        &self.annotation
    }
}

/// One enum to declare.
#[derive(Debug, Clone)]
pub struct EnumViewModel<'a> {
    descriptor: &'a Descriptor,
    model: EnumModel,
}

impl<'a> EnumViewModel<'a> {
    pub(crate) fn new(descriptor: &'a Descriptor) -> Self {
        Self {
            descriptor,
            model: EnumModel::build(descriptor),
        }
    }

    pub fn name(&self) -> &'a str {
        &self.descriptor.name
    }

    /// Constants and lookup tables.
    pub fn model(&self) -> &EnumModel {
        &self.model
    }
}
