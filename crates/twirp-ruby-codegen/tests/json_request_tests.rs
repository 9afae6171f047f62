use twirp_ruby_codegen::descriptor::TypeKind;
use twirp_ruby_codegen::{generate, CodeGenRequest, GenerateError};

const REQUEST: &str = r#"{
  "fileToGenerate": ["billing/invoices.proto"],
  "parameter": "skip-empty",
  "compilerVersion": { "major": 25, "minor": 1 },
  "protoFile": [
    {
      "name": "billing/money.proto",
      "package": "billing.types",
      "syntax": "proto3",
      "messageType": [{ "name": "Money", "field": [{ "name": "units", "number": 1 }] }]
    },
    {
      "name": "billing/invoices.proto",
      "package": "billing.v2",
      "dependency": ["billing/money.proto"],
      "options": { "rubyPackage": "Billing::V2", "goPackage": "ignored" },
      "messageType": [
        {
          "name": "Invoice",
          "nestedType": [{ "name": "line_item" }],
          "enumType": [{ "name": "Status", "value": [{ "name": "DRAFT", "number": 0 }] }]
        }
      ],
      "service": [
        {
          "name": "Invoices",
          "method": [
            {
              "name": "AddLineItem",
              "inputType": ".billing.v2.Invoice.line_item",
              "outputType": ".billing.types.Money"
            }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn parses_request_subset_and_ignores_unknown_keys() {
    let req = CodeGenRequest::from_json(REQUEST).expect("parse");

    assert_eq!(req.files_to_generate, ["billing/invoices.proto"]);
    assert_eq!(req.parameter.as_deref(), Some("skip-empty"));
    assert_eq!(req.files.len(), 2);

    let invoices = &req.files[1];
    assert_eq!(invoices.ruby_package.as_deref(), Some("Billing::V2"));
    assert_eq!(invoices.types[0].nested[0].name, "line_item");
    assert_eq!(invoices.types[0].nested[1].kind, TypeKind::Enum);
    assert_eq!(invoices.services[0].methods[0].output_type, ".billing.types.Money");
}

#[test]
fn generates_from_json_request() {
    let req = CodeGenRequest::from_json(REQUEST).expect("parse");
    let out = generate(&req).expect("generate");

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "billing/invoices_twirp.rb");
    assert!(out[0].content.contains("require_relative 'invoices_pb.rb'\n"));
    assert!(out[0].content.contains("module Billing\n  module V2\n"));
    assert!(out[0].content.contains(
        "rpc :AddLineItem, Invoice::LineItem, Billing::Types::Money, :ruby_method => :add_line_item"
    ));
}

#[test]
fn malformed_json_is_reported() {
    let err = CodeGenRequest::from_json("{ \"protoFile\": 3 }").unwrap_err();
    assert!(matches!(err, GenerateError::Json(_)), "err={err}");
}

#[test]
fn unnamed_file_is_reported() {
    let err = CodeGenRequest::from_json(r#"{ "protoFile": [{ "package": "x" }] }"#).unwrap_err();
    assert!(matches!(err, GenerateError::MalformedDescriptor(_)), "err={err}");
}
