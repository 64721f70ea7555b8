#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___default___targets_go_with_formatting() {
    let config = GeneratorConfig::default();

    assert_eq!(config.lang, TargetLanguage::Go);
    assert!(config.format);
    assert!(!config.register);
    assert!(config.output.is_none());
}

#[test]
fn GeneratorConfig___from_toml___reads_all_fields() {
    let toml = r#"
        namespace = "net"
        lang = "rust"
        register = true
        format = false
        output = "src/net.rs"
    "#;

    let config = GeneratorConfig::from_toml(toml).unwrap();

    assert_eq!(config.namespace, "net");
    assert_eq!(config.lang, TargetLanguage::Rust);
    assert!(config.register);
    assert!(!config.format);
    assert_eq!(config.output, Some(PathBuf::from("src/net.rs")));
}

#[test]
fn GeneratorConfig___from_toml_minimal___uses_defaults() {
    let config = GeneratorConfig::from_toml(r#"namespace = "game""#).unwrap();

    assert_eq!(config.namespace, "game");
    assert_eq!(config.lang, TargetLanguage::Go);
    assert!(config.format);
}

#[test]
fn GeneratorConfig___from_toml_unknown_lang___fails() {
    let result = GeneratorConfig::from_toml(r#"lang = "cobol""#);

    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn GeneratorConfig___from_json_empty___returns_default() {
    let config = GeneratorConfig::from_json(b"").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_json___parses() {
    let config = GeneratorConfig::from_json(br#"{"namespace": "net", "register": true}"#).unwrap();

    assert_eq!(config.namespace, "net");
    assert!(config.register);
}

#[test]
fn GeneratorConfig___validate_empty_namespace___fails() {
    let result = GeneratorConfig::default().validate();

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn GeneratorConfig___validate_whitespace_namespace___fails() {
    let result = GeneratorConfig::new("my net").validate();

    assert!(result.is_err());
}

#[test]
fn GeneratorConfig___validate_namespace___passes() {
    assert!(GeneratorConfig::new("net").validate().is_ok());
}

#[test_case("go", TargetLanguage::Go)]
#[test_case("golang", TargetLanguage::Go)]
#[test_case("Go", TargetLanguage::Go)]
#[test_case("rust", TargetLanguage::Rust)]
#[test_case("rs", TargetLanguage::Rust)]
fn TargetLanguage___from_str___parses(input: &str, expected: TargetLanguage) {
    assert_eq!(input.parse::<TargetLanguage>().unwrap(), expected);
}

#[test]
fn TargetLanguage___from_str_unknown___fails() {
    assert!("lua".parse::<TargetLanguage>().is_err());
}

#[test_case(TargetLanguage::Go, "go")]
#[test_case(TargetLanguage::Rust, "rust")]
fn TargetLanguage___host___matches_display(lang: TargetLanguage, host: &str) {
    assert_eq!(lang.host().name(), host);
    assert_eq!(lang.to_string(), host);
}
