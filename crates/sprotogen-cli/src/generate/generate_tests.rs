#![allow(non_snake_case)]

use super::*;
use sprotogen_core::{Descriptor, FieldDescriptor, FieldType};
use test_case::test_case;

fn ping_file() -> FileDescriptor {
    FileDescriptor {
        name: "net.sp".into(),
        structs: vec![Descriptor::new(
            "Ping",
            vec![
                FieldDescriptor::scalar("seq", 1, FieldType::Int32),
                FieldDescriptor::scalar("tags", 2, FieldType::String).repeated(),
            ],
        )],
        enums: vec![],
    }
}

fn unformatted(namespace: &str, lang: TargetLanguage) -> GeneratorConfig {
    GeneratorConfig {
        lang,
        format: false,
        ..GeneratorConfig::new(namespace)
    }
}

// resolve_config tests

#[test]
fn resolve_config___no_file_with_namespace___uses_defaults() {
    let overrides = Overrides {
        namespace: Some("net".into()),
        ..Overrides::default()
    };

    let config = resolve_config(None, overrides).unwrap();

    assert_eq!(config.namespace, "net");
    assert_eq!(config.lang, TargetLanguage::Go);
    assert!(config.format);
    assert!(!config.register);
}

#[test]
fn resolve_config___no_namespace___fails() {
    let result = resolve_config(None, Overrides::default());

    assert!(result.is_err());
}

#[test]
fn resolve_config___flags___override_defaults() {
    let overrides = Overrides {
        namespace: Some("net".into()),
        lang: Some(TargetLanguage::Rust),
        output: Some(PathBuf::from("out/net.rs")),
        register: true,
        no_format: true,
    };

    let config = resolve_config(None, overrides).unwrap();

    assert_eq!(config.lang, TargetLanguage::Rust);
    assert_eq!(config.output, Some(PathBuf::from("out/net.rs")));
    assert!(config.register);
    assert!(!config.format);
}

// render tests

#[test]
fn render___go_without_format___returns_go_source() {
    let source = render(&ping_file(), &unformatted("net", TargetLanguage::Go)).unwrap();

    assert!(source.contains("package net"));
    assert!(source.contains("\tSeq int32 `sproto:\"integer,1,name=Seq\"`"));
    assert!(source.contains("\tTags []string `sproto:\"string,2,array,name=Tags\"`"));
}

#[test]
fn render___rust_without_format___returns_rust_source() {
    let source = render(&ping_file(), &unformatted("net", TargetLanguage::Rust)).unwrap();

    assert!(source.contains("    pub Tags: Vec<String>,"));
    assert!(source.contains("MessageMeta::of::<Ping>(0x9d7b8dba, \"net.Ping\")"));
}

#[test_case(TargetLanguage::Go, "package net\n")]
#[test_case(TargetLanguage::Rust, "//! sproto messages of the `net` namespace.\n")]
fn render___each_target___names_namespace(lang: TargetLanguage, expected: &str) {
    let source = render(&ping_file(), &unformatted("net", lang)).unwrap();

    assert!(source.contains(expected));
    assert!(source.starts_with("// Generated by sprotogen\n"));
}

#[test]
fn render___duplicate_tag___fails_with_file_name() {
    let mut file = ping_file();
    file.structs[0].fields[1].tag = 1;

    let err = render(&file, &unformatted("net", TargetLanguage::Go)).unwrap_err();

    assert!(err.to_string().starts_with("net.sp: "));
}
