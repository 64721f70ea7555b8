//! File model assembly.
//!
//! Turns one [`FileDescriptor`] into a [`GenerationContext`] in two passes,
//! messages first and then enums, keeping declaration order everywhere. The
//! assembler performs no I/O.

use crate::descriptor::{Descriptor, FileDescriptor};
use crate::error::{ContractViolation, GenError, GenResult};
use crate::host::HostLanguage;
use crate::model::{EnumViewModel, GenerationContext, MessageViewModel};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Per-invocation generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions<'a> {
    /// Namespace used for the package/module and for qualified message names.
    pub namespace: &'a str,

    /// Emit registration glue for the codec-registration runtime.
    pub register: bool,
}

impl<'a> GenerationOptions<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self {
            namespace,
            register: false,
        }
    }

    pub fn with_register(mut self, register: bool) -> Self {
        self.register = register;
        self
    }
}

/// Assemble the generation context of one schema file.
///
/// The descriptor tree is checked with [`check_contract`] first. A violation
/// aborts the whole file; nothing is partially assembled.
pub fn assemble<'a>(
    file: &'a FileDescriptor,
    options: GenerationOptions<'a>,
    host: &'a dyn HostLanguage,
) -> GenResult<GenerationContext<'a>> {
    check_contract(file, options.namespace)?;

    let messages: Vec<_> = file
        .structs
        .iter()
        .map(|descriptor| {
            trace!(
                message = %descriptor.name,
                fields = descriptor.fields.len(),
                "assembling message"
            );
            MessageViewModel::new(descriptor, options.namespace, host)
        })
        .collect();

    let enums: Vec<_> = file.enums.iter().map(EnumViewModel::new).collect();

    debug!(
        file = %file.name,
        namespace = options.namespace,
        host = host.name(),
        messages = messages.len(),
        enums = enums.len(),
        "assembled generation context"
    );

    Ok(GenerationContext {
        file: &file.name,
        namespace: options.namespace,
        register: options.register,
        host,
        messages,
        enums,
    })
}

/// Check the invariants the schema compiler is expected to guarantee.
///
/// This is a guard, not a schema validator: it only rejects trees the mapping
/// rules cannot handle.
pub fn check_contract(file: &FileDescriptor, namespace: &str) -> GenResult<()> {
    check_file(file, namespace).map_err(|violation| GenError::Contract {
        file: file.name.clone(),
        violation,
    })
}

fn check_file(file: &FileDescriptor, namespace: &str) -> Result<(), ContractViolation> {
    if file.name.is_empty() {
        return Err(ContractViolation::MissingFileName);
    }
    if namespace.is_empty() {
        return Err(ContractViolation::EmptyNamespace);
    }

    for (kind, descriptors) in [("message", &file.structs), ("enum", &file.enums)] {
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.name.is_empty() {
                return Err(ContractViolation::MissingDescriptorName { kind, index });
            }
            check_member_names(descriptor)?;
        }
    }

    file.structs.iter().try_for_each(check_message)
}

fn check_member_names(descriptor: &Descriptor) -> Result<(), ContractViolation> {
    match descriptor.fields.iter().position(|f| f.name.is_empty()) {
        Some(index) => Err(ContractViolation::MissingFieldName {
            descriptor: descriptor.name.clone(),
            index,
        }),
        None => Ok(()),
    }
}

fn check_message(descriptor: &Descriptor) -> Result<(), ContractViolation> {
    let mut tags = HashSet::new();

    for field in &descriptor.fields {
        let Some(ty) = field.ty else {
            return Err(ContractViolation::MissingFieldType {
                descriptor: descriptor.name.clone(),
                field: field.name.clone(),
            });
        };

        let unresolved = field.type_name.as_deref().is_none_or(str::is_empty);
        if ty.is_complex() && unresolved {
            return Err(ContractViolation::UnresolvedReference {
                descriptor: descriptor.name.clone(),
                field: field.name.clone(),
            });
        }

        if !tags.insert(field.tag) {
            return Err(ContractViolation::DuplicateTag {
                descriptor: descriptor.name.clone(),
                tag: field.tag,
            });
        }
    }

    Ok(())
}
