//! Go source generation.

use super::GENERATED_BANNER;
use sprotogen_core::{
    BoxError, EnumViewModel, GenerationContext, Go, HostLanguage, MessageViewModel, Renderer,
};
use std::fmt::Write;

const REFLECT_IMPORT: &str = "\"reflect\"";
const GOSPROTO_IMPORT: &str = "\"github.com/davyxu/gosproto\"";
const GOOBJFMT_IMPORT: &str = "\"github.com/davyxu/goobjfmt\"";
const CELLNET_IMPORT: &str = "sprotocodec \"github.com/davyxu/cellnet/codec/sproto\"";

/// Prints Go structs with `sproto` struct tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoRenderer;

impl Renderer for GoRenderer {
    fn host(&self) -> &'static dyn HostLanguage {
        &Go
    }

    fn render(&self, context: &GenerationContext<'_>) -> Result<String, BoxError> {
        let mut code = String::new();

        writeln!(code, "{GENERATED_BANNER}")?;
        writeln!(code, "// Source: {}", context.file())?;
        writeln!(code)?;
        writeln!(code, "package {}", context.namespace())?;
        writeln!(code)?;

        write_imports(&mut code, context)?;

        for enumeration in context.enums() {
            write_enum(&mut code, enumeration)?;
        }

        for message in context.messages() {
            write_struct(&mut code, message)?;
        }

        write_registry(&mut code, context)?;

        if context.register() {
            writeln!(code)?;
            writeln!(code, "func init() {{")?;
            writeln!(code, "\tsprotocodec.AutoRegisterMessageMeta(SProtoStructs)")?;
            writeln!(code, "}}")?;
        }

        Ok(code)
    }
}

fn write_imports(code: &mut String, context: &GenerationContext<'_>) -> std::fmt::Result {
    // Go rejects unused imports, so only pull in what the file refers to.
    let mut imports = vec![REFLECT_IMPORT];
    if !context.messages().is_empty() {
        imports.push(GOOBJFMT_IMPORT);
    }
    if !context.enums().is_empty() {
        imports.push(GOSPROTO_IMPORT);
    }
    if context.register() {
        imports.push(CELLNET_IMPORT);
    }

    writeln!(code, "import (")?;
    for import in imports {
        writeln!(code, "\t{import}")?;
    }
    writeln!(code, ")")
}

fn write_enum(code: &mut String, enumeration: &EnumViewModel<'_>) -> std::fmt::Result {
    let name = enumeration.name();
    let model = enumeration.model();

    writeln!(code)?;
    writeln!(code, "type {name} int32")?;
    writeln!(code)?;

    writeln!(code, "const (")?;
    for constant in &model.constants {
        writeln!(code, "\t{} {name} = {}", constant.name, constant.value)?;
    }
    writeln!(code, ")")?;
    writeln!(code)?;

    writeln!(code, "var {name}_ValueByName = map[string]int32{{")?;
    for (member, value) in &model.value_by_name {
        writeln!(code, "\t\"{member}\": {value},")?;
    }
    writeln!(code, "}}")?;
    writeln!(code)?;

    writeln!(code, "var {name}_NameByValue = map[int32]string{{")?;
    for (value, member) in &model.name_by_value {
        writeln!(code, "\t{value}: \"{member}\",")?;
    }
    writeln!(code, "}}")?;
    writeln!(code)?;

    writeln!(code, "func (self {name}) String() string {{")?;
    writeln!(code, "\treturn sproto.EnumName({name}_NameByValue, int32(self))")?;
    writeln!(code, "}}")
}

fn write_struct(code: &mut String, message: &MessageViewModel<'_>) -> std::fmt::Result {
    let name = message.name();

    writeln!(code)?;
    writeln!(code, "type {name} struct {{")?;
    for field in message.fields() {
        writeln!(
            code,
            "\t{} {} {}",
            field.name(),
            field.type_expr(),
            field.annotation()
        )?;
    }
    writeln!(code, "}}")?;
    writeln!(code)?;
    writeln!(
        code,
        "func (self *{name}) String() string {{ return goobjfmt.CompactTextString(self) }}"
    )
}

fn write_registry(code: &mut String, context: &GenerationContext<'_>) -> std::fmt::Result {
    writeln!(code)?;
    writeln!(code, "var SProtoStructs = []reflect.Type{{")?;
    for message in context.messages() {
        writeln!(
            code,
            "\treflect.TypeOf((*{})(nil)).Elem(), // {} {}",
            message.name(),
            message.message_id(),
            message.full_name()
        )?;
    }
    writeln!(code, "}}")
}
