use crate::cli::Commands;
use crate::domain::models::{BuildConfig, CheckReport};
use crate::services::config::resolve_build_config;
use crate::services::output::print_report;
use crate::services::parser::read_glossary;
use crate::services::site::{build_site, validate_page_names};
use crate::services::sorter::{duplicate_terms, sorted_terms};

pub fn handle_runtime_commands(json: bool, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Build {
            input,
            output,
            title,
            blank_lines,
            config,
        } => {
            let cfg = resolve_build_config(
                input.clone(),
                output.clone(),
                title.clone(),
                *blank_lines,
                config.as_deref(),
            )?;
            run_build(json, &cfg)?;
        }
        Commands::Check { input, blank_lines } => {
            let glossary = read_glossary(input, *blank_lines)?;
            validate_page_names(&glossary)?;
            let report = CheckReport {
                input: input.to_string_lossy().to_string(),
                term_count: glossary.len(),
                terms: sorted_terms(&glossary)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                duplicates: duplicate_terms(&glossary),
            };
            print_report(json, &report, |r| {
                let mut text = format!("glossary valid: {} terms", r.term_count);
                if !r.duplicates.is_empty() {
                    text.push_str(&format!("\nduplicate terms: {}", r.duplicates.join(", ")));
                }
                text
            })?;
        }
    }
    Ok(())
}

pub fn run_build(json: bool, config: &BuildConfig) -> anyhow::Result<()> {
    let report = build_site(config)?;
    print_report(json, &report, |r| {
        format!(
            "wrote {} and {} term pages to {}",
            r.index,
            r.pages.len(),
            r.output_dir
        )
    })
}
