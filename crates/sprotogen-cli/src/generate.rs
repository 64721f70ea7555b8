//! Generate command implementation

use crate::codegen;
use crate::format::ExternalFormatter;
use anyhow::{Context, Result};
use sprotogen_core::{
    FileDescriptor, Formatter, GenerationOptions, GeneratorConfig, TargetLanguage, generate,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command line values that override the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub lang: Option<TargetLanguage>,
    pub output: Option<PathBuf>,
    pub register: bool,
    pub no_format: bool,
}

/// Run the generate command
pub fn run(input: &Path, config: Option<&Path>, overrides: Overrides) -> Result<()> {
    let config = resolve_config(config, overrides)?;

    let file = FileDescriptor::from_file(input)
        .with_context(|| format!("Failed to load descriptors from {}", input.display()))?;

    let source = render(&file, &config)?;

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            info!(
                file = %file.name,
                output = %path.display(),
                messages = file.structs.len(),
                enums = file.enums.len(),
                "generated source"
            );
        }
        None => print!("{source}"),
    }

    Ok(())
}

/// Render one descriptor file with the configured target
pub fn render(file: &FileDescriptor, config: &GeneratorConfig) -> Result<String> {
    let renderer = codegen::renderer_for(config.lang);
    let formatter = config
        .format
        .then(|| ExternalFormatter::for_language(config.lang));
    if let Some(formatter) = &formatter {
        debug!(program = formatter.program(), "formatting enabled");
    }

    let options = GenerationOptions::new(&config.namespace).with_register(config.register);

    let source = generate(
        file,
        options,
        renderer.as_ref(),
        formatter.as_ref().map(|f| f as &dyn Formatter),
    )?;

    Ok(source)
}

/// Merge the configuration file with command line overrides
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(namespace) = overrides.namespace {
        config.namespace = namespace;
    }
    if let Some(lang) = overrides.lang {
        config.lang = lang;
    }
    if let Some(output) = overrides.output {
        config.output = Some(output);
    }
    config.register |= overrides.register;
    if overrides.no_format {
        config.format = false;
    }

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
