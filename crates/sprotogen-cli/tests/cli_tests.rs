//! Integration tests for the sprotogen binary.
//!
//! Runs the compiled CLI against descriptor files in a temporary directory.
//! Formatting is disabled so the tests do not depend on gofmt or rustfmt.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const NET_SCHEMA: &str = r#"{
    "name": "net.sp",
    "structs": [
        { "name": "Ping", "fields": [
            { "name": "seq", "tag": 1, "type": "int32" },
            { "name": "tags", "tag": 2, "type": "string", "repeated": true }
        ] },
        { "name": "Pong", "fields": [
            { "name": "ping", "tag": 1, "type": "struct", "type_name": "Ping" },
            { "name": "result", "tag": 2, "type": "enum", "type_name": "Result" }
        ] }
    ],
    "enums": [
        { "name": "Result", "fields": [
            { "name": "OK", "tag": 0 },
            { "name": "FAIL", "tag": 1 },
            { "name": "TIMEOUT", "tag": 1 }
        ] }
    ]
}"#;

/// Helper to write a descriptor file.
fn write_schema(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("net.json");
    fs::write(&path, content).unwrap();
    path
}

fn sprotogen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sprotogen"))
        .args(args)
        .env_remove("SPROTOGEN_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =============================================================================
// Generate Tests
// =============================================================================

mod generate {
    use super::*;

    #[test]
    fn generate___go_to_stdout___prints_source() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, NET_SCHEMA);

        let output = sprotogen(&["generate", "-i", path_str(&input), "-n", "net", "--no-format"]);

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("package net"));
        assert!(stdout.contains("\tSeq int32 `sproto:\"integer,1,name=Seq\"`"));
        assert!(stdout.contains("\tTags []string `sproto:\"string,2,array,name=Tags\"`"));
        assert!(stdout.contains("\t1: \"TIMEOUT\",\n"));
        assert!(!stdout.contains("func init()"));
    }

    #[test]
    fn generate___rust_to_file___writes_source() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, NET_SCHEMA);
        let out = dir.path().join("gen").join("net.rs");

        let output = sprotogen(&[
            "generate",
            "-i",
            path_str(&input),
            "-o",
            path_str(&out),
            "-n",
            "net",
            "-l",
            "rust",
            "--register",
            "--no-format",
        ]);

        assert!(output.status.success());
        let source = fs::read_to_string(&out).unwrap();
        assert!(source.contains("pub Ping: Option<Box<Ping>>,"));
        assert!(source.contains("MessageMeta::of::<Ping>(0x9d7b8dba, \"net.Ping\"),"));
        assert!(source.contains("pub fn register() {"));
    }

    #[test]
    fn generate___config_file___supplies_parameters() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, NET_SCHEMA);
        let out = dir.path().join("net.go");
        let config = dir.path().join("sprotogen.toml");
        fs::write(
            &config,
            format!(
                "namespace = \"game\"\nregister = true\nformat = false\noutput = {:?}\n",
                path_str(&out)
            ),
        )
        .unwrap();

        let output = sprotogen(&["generate", "-i", path_str(&input), "-c", path_str(&config)]);

        assert!(output.status.success());
        let source = fs::read_to_string(&out).unwrap();
        assert!(source.contains("package game"));
        assert!(source.contains("sprotocodec.AutoRegisterMessageMeta(SProtoStructs)"));
    }

    #[test]
    fn generate___missing_namespace___fails() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, NET_SCHEMA);

        let output = sprotogen(&["generate", "-i", path_str(&input), "--no-format"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("namespace cannot be empty"));
    }

    #[test]
    fn generate___unknown_field_type___fails_without_output() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, &NET_SCHEMA.replace("\"int32\"", "\"int128\""));
        let out = dir.path().join("net.go");

        let output = sprotogen(&[
            "generate",
            "-i",
            path_str(&input),
            "-o",
            path_str(&out),
            "-n",
            "net",
            "--no-format",
        ]);

        assert!(!output.status.success());
        assert!(!out.exists());
    }

    #[test]
    fn generate___missing_input___fails() {
        let output = sprotogen(&["generate", "-i", "/nonexistent/net.json", "-n", "net"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to load descriptors"));
    }
}

// =============================================================================
// Check Tests
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn check___valid_schema___lists_ids() {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, NET_SCHEMA);

        let output = sprotogen(&["check", "-i", path_str(&input), "-n", "net"]);

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("net.sp: 2 message(s), 1 enum(s)"));
        assert!(stdout.contains("0x9d7b8dba  2642120122  net.Ping"));
    }

    #[test]
    fn check___duplicate_tag___fails() {
        let dir = TempDir::new().unwrap();
        let schema = NET_SCHEMA.replace("\"tag\": 2, \"type\": \"string\"", "\"tag\": 1, \"type\": \"string\"");
        let input = write_schema(&dir, &schema);

        let output = sprotogen(&["check", "-i", path_str(&input), "-n", "net"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Ping: duplicate tag 1"));
    }
}
