//! Rust source generation.
//!
//! Enums become `i32` newtypes with associated lookup slices, messages become
//! structs deriving the runtime's `SprotoEncode`/`SprotoDecode`. Rust has no
//! load-time initializers, so registration is a plain `register()` function
//! the application calls once at startup.

use super::GENERATED_BANNER;
use sprotogen_core::{
    BoxError, EnumViewModel, GenerationContext, HostLanguage, MessageViewModel, Renderer, Rust,
};
use std::fmt::Write;

/// Prints Rust structs with `#[sproto(...)]` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl Renderer for RustRenderer {
    fn host(&self) -> &'static dyn HostLanguage {
        &Rust
    }

    fn render(&self, context: &GenerationContext<'_>) -> Result<String, BoxError> {
        let mut code = String::new();

        writeln!(code, "{GENERATED_BANNER}")?;
        writeln!(code, "// Source: {}", context.file())?;
        writeln!(code)?;
        writeln!(code, "//! sproto messages of the `{}` namespace.", context.namespace())?;
        writeln!(code)?;
        writeln!(code, "#![allow(non_snake_case, non_upper_case_globals)]")?;
        writeln!(code)?;
        writeln!(code, "use sproto::{{MessageMeta, SprotoDecode, SprotoEncode}};")?;

        for enumeration in context.enums() {
            write_enum(&mut code, enumeration)?;
        }

        for message in context.messages() {
            write_struct(&mut code, message)?;
        }

        write_registry(&mut code, context)?;

        if context.register() {
            writeln!(code)?;
            writeln!(code, "/// Registers every message of this file with the codec runtime.")?;
            writeln!(code, "pub fn register() {{")?;
            writeln!(code, "    sprotocodec::auto_register_message_meta(sproto_structs());")?;
            writeln!(code, "}}")?;
        }

        Ok(code)
    }
}

fn write_enum(code: &mut String, enumeration: &EnumViewModel<'_>) -> std::fmt::Result {
    let name = enumeration.name();
    let model = enumeration.model();

    writeln!(code)?;
    writeln!(code, "#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]")?;
    writeln!(code, "pub struct {name}(pub i32);")?;
    writeln!(code)?;

    for constant in &model.constants {
        writeln!(
            code,
            "pub const {}: {name} = {name}({});",
            constant.name, constant.value
        )?;
    }
    writeln!(code)?;

    writeln!(code, "pub const {name}_ValueByName: &[(&str, i32)] = &[")?;
    for (member, value) in &model.value_by_name {
        writeln!(code, "    (\"{member}\", {value}),")?;
    }
    writeln!(code, "];")?;
    writeln!(code)?;

    writeln!(code, "pub const {name}_NameByValue: &[(i32, &str)] = &[")?;
    for (value, member) in &model.name_by_value {
        writeln!(code, "    ({value}, \"{member}\"),")?;
    }
    writeln!(code, "];")?;
    writeln!(code)?;

    writeln!(code, "impl std::fmt::Display for {name} {{")?;
    writeln!(
        code,
        "    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{"
    )?;
    writeln!(
        code,
        "        f.write_str(&sproto::enum_name({name}_NameByValue, self.0))"
    )?;
    writeln!(code, "    }}")?;
    writeln!(code, "}}")
}

fn write_struct(code: &mut String, message: &MessageViewModel<'_>) -> std::fmt::Result {
    writeln!(code)?;
    writeln!(
        code,
        "#[derive(Debug, Clone, Default, PartialEq, SprotoEncode, SprotoDecode)]"
    )?;
    writeln!(code, "pub struct {} {{", message.name())?;
    for field in message.fields() {
        writeln!(code, "    {}", field.annotation())?;
        writeln!(code, "    pub {}: {},", field.name(), field.type_expr())?;
    }
    writeln!(code, "}}")
}

fn write_registry(code: &mut String, context: &GenerationContext<'_>) -> std::fmt::Result {
    writeln!(code)?;
    writeln!(code, "/// Every message of this file, in declaration order.")?;
    writeln!(code, "pub fn sproto_structs() -> Vec<MessageMeta> {{")?;
    writeln!(code, "    vec![")?;
    for message in context.messages() {
        writeln!(
            code,
            "        MessageMeta::of::<{}>({:#010x}, \"{}\"),",
            message.name(),
            message.message_id(),
            message.full_name()
        )?;
    }
    writeln!(code, "    ]")?;
    writeln!(code, "}}")
}
