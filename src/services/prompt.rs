use crate::cli::BlankLinePolicy;
use crate::domain::models::{BuildConfig, DEFAULT_TITLE};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Writes `label` on its own line and reads one answer line, without its
/// line terminator.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> anyhow::Result<String> {
    writeln!(writer, "{label}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("input closed before answering '{}'", label.trim_end_matches(": "));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks for the input file, the output folder and the title, in that order.
pub fn ask_build_config<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> anyhow::Result<BuildConfig> {
    let input = prompt_line(reader, writer, "Input File: ")?;
    if input.is_empty() {
        anyhow::bail!("an input file is required");
    }
    let output = prompt_line(reader, writer, "Output Folder: ")?;
    if output.is_empty() {
        anyhow::bail!("an output folder is required");
    }
    let title = prompt_line(reader, writer, "Glossary Title: ")?
        .trim()
        .to_string();
    Ok(BuildConfig {
        input_path: PathBuf::from(input),
        output_dir: PathBuf::from(output),
        title: if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        },
        blank_lines: BlankLinePolicy::Strict,
    })
}
