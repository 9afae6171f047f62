//! protoc plugin I/O.
//!
//! protoc writes an encoded `CodeGeneratorRequest` to the plugin's stdin and
//! reads an encoded `CodeGeneratorResponse` from its stdout. Anything else the
//! plugin prints must go to stderr.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use twirp_ruby_codegen::{response, CodeGenRequest, GeneratedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Binary `CodeGeneratorRequest` (what protoc sends).
    Proto,
    /// JSON rendering of `CodeGeneratorRequest`.
    Json,
}

pub fn read_request(mut input: impl Read, format: InputFormat) -> Result<CodeGenRequest> {
    let mut data = Vec::new();
    input.read_to_end(&mut data).context("reading input")?;
    tracing::info!(bytes = data.len(), ?format, "read request");

    let request = match format {
        InputFormat::Proto => {
            let raw = CodeGeneratorRequest::decode(data.as_slice())
                .context("parsing input proto")?;
            CodeGenRequest::from_wire(&raw)?
        }
        InputFormat::Json => {
            let text = std::str::from_utf8(&data).context("input is not UTF-8")?;
            CodeGenRequest::from_json(text)?
        }
    };

    tracing::info!(
        files = request.files.len(),
        generate = request.files_to_generate.len(),
        "decoded request"
    );
    Ok(request)
}

pub fn write_response(mut output: impl Write, files: Vec<GeneratedFile>) -> Result<()> {
    let response: CodeGeneratorResponse = response::assemble(files);
    tracing::info!(files = response.file.len(), "writing response");

    let data = response.encode_to_vec();
    output.write_all(&data).context("writing response")?;
    output.flush().context("writing response")?;
    Ok(())
}

/// Human-readable output for `--dump`.
pub fn dump_files(mut output: impl Write, files: &[GeneratedFile]) -> Result<()> {
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "==> {} <==", file.name)?;
        output.write_all(file.content.as_bytes())?;
    }
    output.flush()?;
    Ok(())
}
