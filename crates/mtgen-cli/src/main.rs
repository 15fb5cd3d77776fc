mod generate;
mod output;
mod root;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mtgen",
    about = "Generate Salesforce microtrigger metadata, bypass permissions and package.xml from a CSV file",
    version
)]
struct Cli {
    /// Input CSV with DeveloperName and Label columns
    #[arg(long, short = 'f')]
    file: PathBuf,

    /// Base directory for relative paths (default: current directory)
    #[arg(long, env = "MTGEN_ROOT")]
    root: Option<PathBuf>,

    /// Output directory (overrides output_dir from config)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Config file (default: mtgen.yaml under the root, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = generate::run(
        &root,
        generate::GenerateArgs {
            file: &cli.file,
            out: cli.out.as_deref(),
            config: cli.config.as_deref(),
            json: cli.json,
        },
    );

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
