//! In-memory descriptor graph.
//!
//! This is the subset of `google.protobuf.FileDescriptorProto` the generator
//! needs: packages, (nested) type names, services and methods. It is filled
//! from either the protoc wire request ([`wire`]) or its JSON rendering
//! ([`json`]) and is read-only afterwards.

pub mod json;
pub mod wire;

use crate::error::{GenerateError, Result};

/// A plugin invocation: every file protoc parsed (including transitive
/// imports) plus the names of the files that should produce output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeGenRequest {
    pub files_to_generate: Vec<String>,
    /// Raw `--twirp_ruby_opt` value, see [`crate::options`].
    pub parameter: Option<String>,
    pub files: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path relative to the protoc include root, e.g. `hello/service.proto`.
    pub name: String,
    /// Dotted package name; empty when the file declares none.
    pub package: String,
    /// `option ruby_package = "Foo::Bar";`
    pub ruby_package: Option<String>,
    pub types: Vec<TypeDescriptor>,
    pub services: Vec<ServiceDefinition>,
}

/// A message or enum declaration, with the types nested inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    pub nested: Vec<TypeDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Message,
    Enum,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub name: String,
    pub methods: Vec<MethodDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodDefinition {
    pub name: String,
    /// Fully-qualified, e.g. `.hello.world.HelloRequest`.
    pub input_type: String,
    pub output_type: String,
}

impl TypeDescriptor {
    pub fn message(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Message,
            nested: Vec::new(),
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Enum,
            nested: Vec::new(),
        }
    }

    pub fn with_nested(mut self, nested: TypeDescriptor) -> Self {
        self.nested.push(nested);
        self
    }
}

impl MethodDefinition {
    pub fn new(
        name: impl Into<String>,
        input_type: impl Into<String>,
        output_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            output_type: output_type.into(),
        }
    }
}

/// Files without a name cannot be matched against `file_to_generate` or
/// given an output path.
fn required_file_name(name: Option<String>) -> Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(GenerateError::MalformedDescriptor(
            "file descriptor without a name".to_string(),
        )),
    }
}
