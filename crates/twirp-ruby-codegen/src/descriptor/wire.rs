//! Conversion from the protoc plugin wire types (`prost-types`).

use prost_types::compiler::CodeGeneratorRequest;
use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};

use super::{
    required_file_name, CodeGenRequest, FileDescriptor, MethodDefinition, ServiceDefinition,
    TypeDescriptor,
};
use crate::error::Result;

impl CodeGenRequest {
    pub fn from_wire(request: &CodeGeneratorRequest) -> Result<Self> {
        let files = request
            .proto_file
            .iter()
            .map(FileDescriptor::from_wire)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            files_to_generate: request.file_to_generate.clone(),
            parameter: request.parameter.clone(),
            files,
        })
    }
}

impl FileDescriptor {
    pub fn from_wire(file: &FileDescriptorProto) -> Result<Self> {
        let name = required_file_name(file.name.clone())?;

        let mut types: Vec<TypeDescriptor> = file.message_type.iter().map(message_type).collect();
        types.extend(file.enum_type.iter().map(enum_type));

        let services = file
            .service
            .iter()
            .map(|svc| ServiceDefinition {
                name: svc.name().to_string(),
                methods: svc
                    .method
                    .iter()
                    .map(|m| MethodDefinition::new(m.name(), m.input_type(), m.output_type()))
                    .collect(),
            })
            .collect();

        Ok(Self {
            name,
            package: file.package().to_string(),
            ruby_package: file
                .options
                .as_ref()
                .and_then(|opts| opts.ruby_package.clone()),
            types,
            services,
        })
    }
}

fn message_type(m: &DescriptorProto) -> TypeDescriptor {
    let mut out = TypeDescriptor::message(m.name());
    out.nested.extend(m.nested_type.iter().map(message_type));
    out.nested.extend(m.enum_type.iter().map(enum_type));
    out
}

fn enum_type(e: &EnumDescriptorProto) -> TypeDescriptor {
    TypeDescriptor::enumeration(e.name())
}
