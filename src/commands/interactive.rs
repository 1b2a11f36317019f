use crate::commands::runtime::run_build;
use crate::services::prompt::ask_build_config;

/// Prompts on the console, then runs the same build as `glossgen build`.
/// With `--json` the prompts go to stderr so stdout stays parseable.
pub fn handle_interactive(json: bool) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let config = if json {
        ask_build_config(&mut reader, &mut std::io::stderr())?
    } else {
        ask_build_config(&mut reader, &mut std::io::stdout())?
    };
    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_dir.display(),
        "interactive build"
    );
    run_build(json, &config)
}
