//! JSON output for CLI commands
//!
//! Each client command writes exactly one JSON object, one line, to its
//! output. Diagnostics never share that stream.

use std::io::Write;

use serde_json::{json, Value};

use crate::gateway::GatewayError;

use super::errors::CliResult;

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value, messages: &[String]) -> CliResult<()> {
    write_json(
        out,
        &json!({
            "status": "ok",
            "data": data,
            "messages": messages,
        }),
    )
}

/// Write a failed-operation response; `data` is the fallback
pub fn write_failure<W: Write>(
    out: &mut W,
    data: Value,
    error: &GatewayError,
    messages: &[String],
) -> CliResult<()> {
    write_json(
        out,
        &json!({
            "status": "error",
            "kind": error.kind().as_str(),
            "error": error.message(),
            "data": data,
            "messages": messages,
        }),
    )
}

/// Write one JSON value followed by a newline
pub fn write_json<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
