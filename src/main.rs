mod cli;

use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetls::core::render;
use assetls::fs::RealFileSystem;
use assetls::{EnumerateOptions, list_files, plan_uploads};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("assetls: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "assetls=debug" } else { "assetls=warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let raw_root = cli.path.as_deref().unwrap_or(Path::new("."));
    let root = std::path::absolute(raw_root)
        .with_context(|| format!("cannot resolve {}", raw_root.display()))?;

    let options = EnumerateOptions {
        exclude_pattern: cli.exclude.clone(),
        follow_links: cli.follow_links,
    };
    let mut files = list_files(&RealFileSystem, &root, &options)
        .await
        .with_context(|| format!("failed to enumerate {}", root.display()))?;
    tracing::debug!(files = files.len(), "enumeration finished");

    if cli.sort {
        files.sort();
    }

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.wants_plan() {
        let plan = plan_uploads(&root, files, cli.prefix.as_deref())?;
        if cli.json {
            render::write_plan_json(&mut out, &plan)?;
        } else {
            render::write_plan(&mut out, &plan)?;
        }
    } else {
        render::write_paths(&mut out, &files)?;
    }
    out.flush()?;

    Ok(())
}
