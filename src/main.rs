mod cli;

use clap::Parser;
use cli::{Cli, Commands, ConvertArgs};
use harsnip::config::{Config, validate_indent};
use harsnip::observability::init_tracing;
use harsnip::snippet::HttpSnippet;
use harsnip::targets::TargetRegistry;
use std::path::Path;
use tracing::info;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let config = Config::load()?;
    init_tracing(&config.telemetry.log_filter);

    let cli = Cli::parse();
    let registry = TargetRegistry::with_defaults();

    match cli.command {
        Commands::Convert(args) => convert(&config, &registry, args).await?,
        Commands::Targets => {
            println!("{}", serde_json::to_string_pretty(&registry.available_targets())?);
        }
        Commands::Inspect(args) => {
            let snippet = load_snippet(&config, &args.input).await?;
            println!("{}", serde_json::to_string_pretty(snippet.requests())?);
        }
    }

    Ok(())
}

async fn convert(
    config: &Config,
    registry: &TargetRegistry,
    args: ConvertArgs,
) -> Result<(), AnyError> {
    let snippet = load_snippet(config, &args.input).await?;

    let target = args.target.as_deref().unwrap_or(&config.convert.target);
    let client = args.client.as_deref().or(config.convert.client.as_deref());
    let mut options = config.convert.options.clone();
    if let Some(indent) = args.indent {
        validate_indent(&indent)?;
        options.indent = indent;
    }

    let snippets = snippet
        .convert(registry, target, client, Some(&options))
        .ok_or_else(|| format!("unknown target: {target}"))?
        .into_vec();

    match args.output {
        Some(dir) => {
            tokio::fs::create_dir_all(&dir).await?;
            let extname = registry.extname(target);
            for (index, code) in snippets.iter().enumerate() {
                let path = dir.join(format!("{index}{extname}"));
                tokio::fs::write(&path, code).await?;
                info!(path = %path.display(), "wrote snippet");
            }
        }
        None => println!("{}", snippets.join("\n\n")),
    }

    Ok(())
}

async fn load_snippet(config: &Config, path: &Path) -> Result<HttpSnippet, AnyError> {
    let limit = config.input.max_bytes;
    let size = tokio::fs::metadata(path).await?.len();
    if size > limit.as_u64() {
        return Err(format!("{} is {size} bytes, over the {limit} input limit", path.display()).into());
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let input: serde_json::Value = serde_json::from_str(&raw)?;
    Ok(HttpSnippet::new(input).await?)
}
