//! Field type mapping.

use crate::descriptor::{FieldDescriptor, FieldType};
use crate::host::HostLanguage;

/// Map a message field to a host type expression.
///
/// Messages are nullable and may refer to each other recursively, so struct
/// references always become an owning indirection. Enums are plain values.
///
/// The assembler rejects message fields without a type and references without
/// a resolved name before calling this. Reaching either case here means the
/// descriptor tree was never checked, which is a programming error.
pub fn map_field_type(field: &FieldDescriptor, host: &dyn HostLanguage) -> String {
    let Some(ty) = field.ty else {
        panic!("field `{}` reached the type mapper without a type", field.name);
    };

    let element = match ty {
        FieldType::Struct => host.indirect(referenced_name(field)),
        FieldType::Enum => referenced_name(field).to_string(),
        FieldType::Bool
        | FieldType::Int32
        | FieldType::Int64
        | FieldType::UInt32
        | FieldType::UInt64
        | FieldType::Float
        | FieldType::String
        | FieldType::Bytes => match host.primitive(ty) {
            Some(primitive) => primitive.to_string(),
            None => panic!("{} has no primitive for {ty:?}", host.name()),
        },
    };

    if field.repeated {
        host.sequence(&element)
    } else {
        element
    }
}

fn referenced_name(field: &FieldDescriptor) -> &str {
    match field.type_name.as_deref() {
        Some(name) => name,
        None => panic!("field `{}` references an unresolved type", field.name),
    }
}
