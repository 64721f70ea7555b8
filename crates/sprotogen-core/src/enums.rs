//! Enum constants and lookup tables.

use crate::descriptor::Descriptor;
use std::collections::HashMap;

/// One named constant of an enum, e.g. `Result_OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    /// Constant identifier: `EnumName_MemberName`.
    pub name: String,

    /// Member name as declared in the schema.
    pub member: String,

    pub value: i32,
}

/// Generation model of one enum.
///
/// Each enum becomes its own 32-bit integer type with one constant per member
/// and two lookup tables. Rendered code falls back to the decimal value when a
/// value is missing from [`EnumModel::name_by_value`]; that fallback lives in
/// the runtime helper the generated code calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    /// Host type name.
    pub name: String,

    /// Constants in declaration order.
    pub constants: Vec<EnumConstant>,

    /// Member name → value, one entry per member, in declaration order.
    pub value_by_name: Vec<(String, i32)>,

    /// Value → member name, one entry per distinct value.
    ///
    /// Entries keep the position of the first member with that value, but the
    /// name of the last one.
    pub name_by_value: Vec<(i32, String)>,
}

impl EnumModel {
    /// Build the model of an enum descriptor.
    pub fn build(descriptor: &Descriptor) -> Self {
        let name = descriptor.name.clone();
        let mut constants = Vec::with_capacity(descriptor.fields.len());
        let mut value_by_name = Vec::with_capacity(descriptor.fields.len());
        let mut name_by_value: Vec<(i32, String)> = Vec::new();
        let mut slots: HashMap<i32, usize> = HashMap::new();

        for member in &descriptor.fields {
            constants.push(EnumConstant {
                name: format!("{}_{}", name, member.name),
                member: member.name.clone(),
                value: member.tag,
            });

            value_by_name.push((member.name.clone(), member.tag));

            match slots.get(&member.tag) {
                Some(&slot) => name_by_value[slot].1 = member.name.clone(),
                None => {
                    slots.insert(member.tag, name_by_value.len());
                    name_by_value.push((member.tag, member.name.clone()));
                }
            }
        }

        Self {
            name,
            constants,
            value_by_name,
            name_by_value,
        }
    }

    /// Member name for a value, if any member has it.
    pub fn name_of(&self, value: i32) -> Option<&str> {
        self.name_by_value
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, name)| name.as_str())
    }

    /// Value of a member name.
    pub fn value_of(&self, member: &str) -> Option<i32> {
        self.value_by_name
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, value)| *value)
    }

    /// Display form of a value: the member name, or the decimal value on a miss.
    pub fn display(&self, value: i32) -> String {
        match self.name_of(value) {
            Some(name) => name.to_string(),
            None => value.to_string(),
        }
    }
}
