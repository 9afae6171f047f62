//! Conversion from the JSON rendering of `CodeGeneratorRequest`.
//!
//! Useful for running the generator by hand: the protoc JSON mapping (as
//! printed by `buf` or `protoc --decode`-style tooling converted to JSON)
//! is far easier to write and diff than the binary envelope.
//!
//! Only the fields the generator reads are modelled; everything else in the
//! document is ignored.

use serde::Deserialize;

use super::{
    required_file_name, CodeGenRequest, FileDescriptor, MethodDefinition, ServiceDefinition,
    TypeDescriptor,
};
use crate::error::Result;

impl CodeGenRequest {
    pub fn from_json(text: &str) -> Result<Self> {
        let request: CodeGeneratorRequestJson = serde_json::from_str(text)?;

        let files = request
            .proto_file
            .into_iter()
            .map(FileDescriptorProtoJson::into_descriptor)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            files_to_generate: request.file_to_generate,
            parameter: request.parameter,
            files,
        })
    }
}

// =============================================================================
// Request JSON (subset)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
struct CodeGeneratorRequestJson {
    #[serde(default, rename = "fileToGenerate")]
    file_to_generate: Vec<String>,
    parameter: Option<String>,
    #[serde(default, rename = "protoFile")]
    proto_file: Vec<FileDescriptorProtoJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct FileDescriptorProtoJson {
    name: Option<String>,
    package: Option<String>,
    #[serde(default, rename = "messageType")]
    message_type: Vec<DescriptorProtoJson>,
    #[serde(default, rename = "enumType")]
    enum_type: Vec<EnumDescriptorProtoJson>,
    #[serde(default)]
    service: Vec<ServiceDescriptorProtoJson>,
    #[serde(default)]
    options: Option<FileOptionsJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct FileOptionsJson {
    #[serde(rename = "rubyPackage")]
    ruby_package: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DescriptorProtoJson {
    name: Option<String>,
    #[serde(default, rename = "nestedType")]
    nested_type: Vec<DescriptorProtoJson>,
    #[serde(default, rename = "enumType")]
    enum_type: Vec<EnumDescriptorProtoJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct EnumDescriptorProtoJson {
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceDescriptorProtoJson {
    name: Option<String>,
    #[serde(default)]
    method: Vec<MethodDescriptorProtoJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct MethodDescriptorProtoJson {
    name: Option<String>,
    #[serde(rename = "inputType")]
    input_type: Option<String>,
    #[serde(rename = "outputType")]
    output_type: Option<String>,
}

impl FileDescriptorProtoJson {
    fn into_descriptor(self) -> Result<FileDescriptor> {
        let name = required_file_name(self.name)?;

        let mut types: Vec<TypeDescriptor> = self
            .message_type
            .into_iter()
            .map(DescriptorProtoJson::into_type)
            .collect();
        types.extend(self.enum_type.into_iter().map(EnumDescriptorProtoJson::into_type));

        let services = self
            .service
            .into_iter()
            .map(|svc| ServiceDefinition {
                name: svc.name.unwrap_or_default(),
                methods: svc
                    .method
                    .into_iter()
                    .map(|m| {
                        MethodDefinition::new(
                            m.name.unwrap_or_default(),
                            m.input_type.unwrap_or_default(),
                            m.output_type.unwrap_or_default(),
                        )
                    })
                    .collect(),
            })
            .collect();

        Ok(FileDescriptor {
            name,
            package: self.package.unwrap_or_default(),
            ruby_package: self.options.and_then(|opts| opts.ruby_package),
            types,
            services,
        })
    }
}

impl DescriptorProtoJson {
    fn into_type(self) -> TypeDescriptor {
        let mut out = TypeDescriptor::message(self.name.unwrap_or_default());
        out.nested
            .extend(self.nested_type.into_iter().map(DescriptorProtoJson::into_type));
        out.nested
            .extend(self.enum_type.into_iter().map(EnumDescriptorProtoJson::into_type));
        out
    }
}

impl EnumDescriptorProtoJson {
    fn into_type(self) -> TypeDescriptor {
        TypeDescriptor::enumeration(self.name.unwrap_or_default())
    }
}
