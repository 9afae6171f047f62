//! Packing generated files into the protoc response envelope.

use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::CodeGeneratorResponse;

use crate::GeneratedFile;

/// Build the response for a successful run.
///
/// Service bindings never look at field presence, so proto3 `optional`
/// fields are safe to accept and the feature is advertised.
pub fn assemble(files: Vec<GeneratedFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        file: files
            .into_iter()
            .map(|f| File {
                name: Some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
