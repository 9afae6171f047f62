//! Twirp service/client emission for one proto file.
//!
//! For `hello/world/service.proto` with package `hello.world` and a single
//! `Greeter` service, the output (`hello/world/service_twirp.rb`) is:
//!
//! ```ruby
//! # Code generated by protoc-gen-twirp_ruby 1.0.0, DO NOT EDIT.
//! require 'twirp'
//! require_relative 'service_pb.rb'
//!
//! module Hello
//!   module World
//!     class GreeterService < Twirp::Service
//!       package 'hello.world'
//!       service 'Greeter'
//!       rpc :SayHello, HelloRequest, HelloResponse, :ruby_method => :say_hello
//!     end
//!
//!     class GreeterClient < Twirp::Client
//!       client_for GreeterService
//!     end
//!   end
//! end
//! ```

use crate::descriptor::{FileDescriptor, MethodDefinition, ServiceDefinition};
use crate::error::Result;
use crate::namespace::Namespace;
use crate::naming::{to_camel_case, to_snake_case};
use crate::resolve::TypeResolver;
use crate::writer::{Depth, RubyWriter};

pub const GENERATOR_NAME: &str = "protoc-gen-twirp_ruby";

/// Appended to the proto path (minus extension) for the emitted file.
pub const SERVICE_FILE_SUFFIX: &str = "_twirp.rb";

/// Suffix of the message file emitted by the stock Ruby protobuf generator.
pub const MESSAGE_FILE_SUFFIX: &str = "_pb.rb";

/// `hello/world/service.proto` -> `hello/world/service_twirp.rb`
pub fn output_file_name(proto_name: &str) -> String {
    format!("{}{SERVICE_FILE_SUFFIX}", strip_extension(proto_name))
}

/// `hello/world/service.proto` -> `service_pb.rb`, required relative to the
/// generated service file.
pub fn companion_file_name(proto_name: &str) -> String {
    format!("{}{MESSAGE_FILE_SUFFIX}", strip_extension(base_name(proto_name)))
}

fn base_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, base)| base)
}

/// Drop everything from the last `.` of the final path element.
fn strip_extension(path: &str) -> &str {
    let base_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[base_start..].rfind('.') {
        Some(dot) => &path[..base_start + dot],
        None => path,
    }
}

/// One `rpc` line of a service block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcBinding {
    /// Method name as declared; this is what goes over the wire.
    pub wire_name: String,
    pub input: String,
    pub output: String,
    /// Handler method the Twirp runtime calls (`SayHello` -> `say_hello`).
    pub dispatch_key: String,
}

impl RpcBinding {
    pub fn resolve(method: &MethodDefinition, resolver: &TypeResolver<'_, '_>) -> Result<Self> {
        Ok(Self {
            wire_name: method.name.clone(),
            input: resolver.resolve(&method.input_type)?,
            output: resolver.resolve(&method.output_type)?,
            dispatch_key: to_snake_case(&method.name),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceEmitter<'r, 'a> {
    resolver: TypeResolver<'r, 'a>,
    version: &'r str,
}

impl<'r, 'a> ServiceEmitter<'r, 'a> {
    pub fn new(resolver: TypeResolver<'r, 'a>, version: &'r str) -> Self {
        Self { resolver, version }
    }

    /// Render the whole `_twirp.rb` file. Fails on the first type that
    /// cannot be resolved; nothing is returned for the file in that case.
    pub fn emit_file(&self, file: &FileDescriptor) -> Result<String> {
        tracing::debug!(file = %file.name, services = file.services.len(), "emitting file");

        let mut out = RubyWriter::new();
        out.line(
            Depth::ROOT,
            format_args!("# Code generated by {GENERATOR_NAME} {}, DO NOT EDIT.", self.version),
        );
        out.line(Depth::ROOT, "require 'twirp'");
        out.line(
            Depth::ROOT,
            format_args!("require_relative '{}'", companion_file_name(&file.name)),
        );
        out.blank();

        let namespace = Namespace::for_file(file);
        let depth = namespace.open(&mut out, Depth::ROOT);

        for (i, service) in file.services.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            self.emit_service(&mut out, depth, &file.package, service)?;
        }

        let depth = namespace.close(&mut out, depth);
        debug_assert_eq!(depth, Depth::ROOT, "unbalanced module nesting");

        Ok(out.finish())
    }

    fn emit_service(
        &self,
        out: &mut RubyWriter,
        depth: Depth,
        package: &str,
        service: &ServiceDefinition,
    ) -> Result<()> {
        tracing::debug!(service = %service.name, methods = service.methods.len(), "emitting service");

        let class = to_camel_case(&service.name);
        let body = depth.deeper();

        out.line(depth, format_args!("class {class}Service < Twirp::Service"));
        if !package.is_empty() {
            out.line(body, format_args!("package '{package}'"));
        }
        out.line(body, format_args!("service '{}'", service.name));
        for method in &service.methods {
            let rpc = RpcBinding::resolve(method, &self.resolver)?;
            out.line(
                body,
                format_args!(
                    "rpc :{}, {}, {}, :ruby_method => :{}",
                    rpc.wire_name, rpc.input, rpc.output, rpc.dispatch_key
                ),
            );
        }
        out.line(depth, "end");
        out.blank();

        out.line(depth, format_args!("class {class}Client < Twirp::Client"));
        out.line(body, format_args!("client_for {class}Service"));
        out.line(depth, "end");
        Ok(())
    }
}
