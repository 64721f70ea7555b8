#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(FieldType::Int32)]
#[test_case(FieldType::Int64)]
#[test_case(FieldType::UInt32)]
#[test_case(FieldType::UInt64)]
#[test_case(FieldType::Enum)]
fn WireKind___integer_family___collapses_to_integer(ty: FieldType) {
    assert_eq!(WireKind::of(ty), WireKind::Integer);
    assert_eq!(WireKind::of(ty).as_str(), "integer");
}

#[test_case(FieldType::Bool, "boolean")]
#[test_case(FieldType::Float, "double")]
#[test_case(FieldType::String, "string")]
#[test_case(FieldType::Bytes, "bytes")]
#[test_case(FieldType::Struct, "struct")]
fn WireKind___other_types___use_own_name(ty: FieldType, expected: &str) {
    assert_eq!(WireKind::of(ty).to_string(), expected);
}

#[test]
fn encode_metadata___scalar___has_kind_tag_and_name() {
    let field = FieldDescriptor::scalar("seq", 1, FieldType::Int32);

    assert_eq!(encode_metadata(&field, "Seq"), "integer,1,name=Seq");
}

#[test]
fn encode_metadata___repeated___inserts_array_before_name() {
    let field = FieldDescriptor::scalar("tags", 2, FieldType::String).repeated();

    assert_eq!(encode_metadata(&field, "Tags"), "string,2,array,name=Tags");
}

#[test]
fn encode_metadata___enum_reference___uses_integer_kind() {
    let field = FieldDescriptor::enumeration("result", 4, "Result");

    assert_eq!(encode_metadata(&field, "Result"), "integer,4,name=Result");
}

#[test]
fn encode_metadata___repeated_struct___uses_struct_kind() {
    let field = FieldDescriptor::message("peers", 9, "Peer").repeated();

    assert_eq!(encode_metadata(&field, "Peers"), "struct,9,array,name=Peers");
}

#[test]
fn encode_metadata___uses_exported_name_not_schema_name() {
    let field = FieldDescriptor::scalar("self", 3, FieldType::Bool);

    assert_eq!(encode_metadata(&field, "Self_"), "boolean,3,name=Self_");
}

#[test]
fn encode_metadata___never_contains_spaces() {
    let field = FieldDescriptor::scalar("blob", 12, FieldType::Bytes).repeated();

    assert!(!encode_metadata(&field, "Blob").contains(' '));
}
