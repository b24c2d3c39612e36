use clap::{Args, Parser, Subcommand};
use log::debug;
use recipe_ld::config::load_config;
use recipe_ld::{BlockPolicy, ExtractionConfig, Recipe, ServiceConfig};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(
    name = "recipe-ld",
    version,
    about = "Extract schema.org recipes from JSON-LD blocks in web pages"
)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present).
    #[arg(long, global = true, env = "RECIPE_LD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (GET /?url=...).
    Serve {
        /// Address to bind to, overriding the config file.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Fetch a URL and print its recipe as JSON.
    Fetch {
        url: String,
        #[command(flatten)]
        extraction: ExtractionArgs,
    },
    /// Extract a recipe from a local HTML file ("-" for stdin).
    Parse {
        file: PathBuf,
        #[command(flatten)]
        extraction: ExtractionArgs,
    },
}

#[derive(Args, Debug)]
struct ExtractionArgs {
    /// Skip JSON-LD blocks that are not valid JSON instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Also consider members of @graph arrays.
    #[arg(long)]
    expand_graph: bool,
}

impl ExtractionArgs {
    fn apply(&self, mut options: ExtractionConfig) -> ExtractionConfig {
        if self.lenient {
            options.block_policy = BlockPolicy::Lenient;
        }
        if self.expand_graph {
            options.expand_graph = true;
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config: ServiceConfig = load_config(cli.config.as_deref())?;
    debug!("{:#?}", config);

    match cli.command {
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            recipe_ld::server::serve(&config).await?;
        }
        Command::Fetch { url, extraction } => {
            config.extraction = extraction.apply(config.extraction);
            let recipe = recipe_ld::fetch_recipe_with_config(&url, &config).await?;
            print_recipe(&recipe)?;
        }
        Command::Parse { file, extraction } => {
            let options = extraction.apply(config.extraction);
            let html = read_input(&file).await?;
            let source = file.display().to_string();
            let recipe = recipe_ld::pipelines::html::process(&html, &source, &options)?;
            print_recipe(&recipe)?;
        }
    }

    Ok(())
}

async fn read_input(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut html = String::new();
        tokio::io::stdin().read_to_string(&mut html).await?;
        Ok(html)
    } else {
        tokio::fs::read_to_string(file).await
    }
}

fn print_recipe(recipe: &Recipe) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(recipe)?);
    Ok(())
}
