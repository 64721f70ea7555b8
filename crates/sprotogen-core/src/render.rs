//! Rendering seam.
//!
//! Turning a [`GenerationContext`] into text is a collaborator concern. The
//! core only fixes the shape of the context and how collaborator failures are
//! reported: unchanged, tagged with the schema file they belong to.

use crate::assemble::{GenerationOptions, assemble};
use crate::descriptor::FileDescriptor;
use crate::error::{BoxError, GenError, GenResult};
use crate::host::HostLanguage;
use crate::model::GenerationContext;
use tracing::debug;

/// Prints a generation context as source text.
pub trait Renderer {
    /// Host profile whose spelling rules this renderer prints.
    fn host(&self) -> &'static dyn HostLanguage;

    fn render(&self, context: &GenerationContext<'_>) -> Result<String, BoxError>;
}

/// Post-render source formatter (e.g. `gofmt`).
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, BoxError>;
}

/// Assemble, render and optionally format one schema file.
///
/// The renderer's host profile drives the mapping rules, so the context and
/// the printed syntax always agree.
pub fn generate(
    file: &FileDescriptor,
    options: GenerationOptions<'_>,
    renderer: &dyn Renderer,
    formatter: Option<&dyn Formatter>,
) -> GenResult<String> {
    let context = assemble(file, options, renderer.host())?;

    let source = renderer
        .render(&context)
        .map_err(|source| GenError::Render {
            file: file.name.clone(),
            source,
        })?;

    let Some(formatter) = formatter else {
        return Ok(source);
    };

    debug!(file = %file.name, host = renderer.host().name(), "formatting output");

    formatter.format(&source).map_err(|source| GenError::Format {
        file: file.name.clone(),
        source,
    })
}
