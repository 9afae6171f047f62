//! Twirp bindings for Ruby, generated from protobuf service definitions.
//!
//! This crate is the code generation half of `protoc-gen-twirp_ruby`: it
//! takes the descriptor graph protoc hands to plugins and emits one
//! `<name>_twirp.rb` per requested file, containing a `Twirp::Service` and a
//! `Twirp::Client` class for every service. Message classes are *not*
//! generated here; they come from protoc's built-in Ruby generator
//! (`<name>_pb.rb`), which the emitted file requires.
//!
//! Pipeline:
//! 1. [`select`] splits the request into files to generate and dependencies.
//! 2. [`registry`] indexes every message/enum of every file by full name.
//! 3. [`emit`] walks services and methods of each generated file, using
//!    [`resolve`] to turn `.pkg.Type` references into Ruby constants and
//!    [`namespace`] to wrap everything in the file's modules.
//! 4. [`response`] packs the results into a `CodeGeneratorResponse`.
//!
//! Any error aborts the whole run; there is no partial output.

pub mod descriptor;
pub mod emit;
pub mod error;
pub mod namespace;
pub mod naming;
pub mod options;
pub mod registry;
pub mod resolve;
pub mod response;
pub mod select;
pub mod writer;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

pub use descriptor::CodeGenRequest;
pub use error::{GenerateError, Result};
pub use options::GeneratorOptions;

use emit::{output_file_name, ServiceEmitter};
use registry::Registry;
use resolve::TypeResolver;
use select::select_files;

/// Version stamped into the header of every generated file.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to `--twirp_ruby_out`.
    pub name: String,
    pub content: String,
}

/// Generate the Ruby files for every requested file, in request order.
pub fn generate(request: &CodeGenRequest) -> Result<Vec<GeneratedFile>> {
    let options = GeneratorOptions::parse(request.parameter.as_deref())?;
    let selection = select_files(&request.files, &request.files_to_generate)?;
    let registry = Registry::build(&request.files, selection)?;
    let emitter = ServiceEmitter::new(TypeResolver::new(&registry), VERSION);

    let mut generated = Vec::with_capacity(registry.selection().generate().len());
    for &id in registry.selection().generate() {
        let file = registry.file(id);
        if options.skip_empty && file.services.is_empty() {
            tracing::debug!(file = %file.name, "no services, skipping");
            continue;
        }
        generated.push(GeneratedFile {
            name: output_file_name(&file.name),
            content: emitter.emit_file(file)?,
        });
    }

    Ok(generated)
}

/// Wire-to-wire entrypoint: decoded plugin request in, response out.
pub fn generate_response(request: &CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
    let request = CodeGenRequest::from_wire(request)?;
    Ok(response::assemble(generate(&request)?))
}
