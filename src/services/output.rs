use crate::domain::error::GlossaryError;
use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;
use std::io::Write;

/// Writes a command report: the `{ok:true, data}` envelope with `--json`,
/// otherwise the one-line `summary` of it.
pub fn write_report<W: Write, T: Serialize>(
    out: &mut W,
    json: bool,
    report: &T,
    summary: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &JsonOut { ok: true, data: report })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary(report))?;
    }
    Ok(())
}

pub fn print_report<T: Serialize>(
    json: bool,
    report: &T,
    summary: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    write_report(&mut std::io::stdout().lock(), json, report, summary)
}

fn error_body(err: &anyhow::Error) -> ErrorBody {
    let (code, stage) = match err.downcast_ref::<GlossaryError>() {
        Some(e) => (e.code(), e.stage()),
        None => ("INTERNAL", "run"),
    };
    ErrorBody {
        code: code.to_string(),
        stage: stage.to_string(),
        message: format!("{err:#}"),
    }
}

/// Reports a fatal error: a JSON envelope on stdout with `--json`,
/// otherwise a single `error [stage]: ...` line on stderr.
pub fn print_error(json: bool, err: &anyhow::Error) {
    let body = error_body(err);
    if json {
        let out = JsonErr {
            ok: false,
            error: body,
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(_) => eprintln!("error [{}]: {}", out.error.stage, out.error.message),
        }
    } else {
        eprintln!("error [{}]: {}", body.stage, body.message);
    }
}
