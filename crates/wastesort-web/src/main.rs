use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use wastesort_classifier::{LoadOutcome, ModelLoader};
use wastesort_core::Error;
use wastesort_web::cli::{Cli, Commands};
use wastesort_web::config::{AppConfig, ModelConfig};
use wastesort_web::state::AppState;
use wastesort_web::telemetry::{init_metrics, init_tracing};
use wastesort_web::{commands, content, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            port,
            address,
            model,
            verbose,
        } => {
            init_tracing(verbose);

            let config = AppConfig::load(&config)?.with_overrides(address, port, &model);
            let location = config.model.location()?;
            let addr: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;

            // Load eagerly so problems show up in the startup log; the
            // outcome is cached for every later request.
            let loader = ModelLoader::new(location);
            let model_line = match loader.load() {
                LoadOutcome::Loaded(handle) => format!("{} (loaded)", handle.name()),
                other => other.unavailable_reason().unwrap_or_default(),
            };

            let metrics = init_metrics()?;
            let state = AppState::new(config, loader).with_metrics(metrics);

            println!();
            println!("  {}", content::APP_TITLE);
            println!("  {}", content::APP_TAGLINE);
            println!();
            println!("  Model:   {}", model_line);
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr).await?;
        }

        Commands::Classify {
            image,
            model,
            json,
            verbose,
        } => {
            init_tracing(verbose);

            let location = ModelConfig::default().with_overrides(&model).location()?;
            let loader = Arc::new(ModelLoader::new(location));

            // Model loading and inference are CPU-bound
            let worker = Arc::clone(&loader);
            let output =
                tokio::task::spawn_blocking(move || commands::classify_file(&worker, &image, json))
                    .await?;

            match output {
                Ok(text) => println!("{}", text.trim_end()),
                Err(Error::ModelUnavailable(reason)) => {
                    eprintln!("{} {}", content::MODEL_UNAVAILABLE_MESSAGE, reason);
                    if let LoadOutcome::NotFound {
                        directory_listing, ..
                    } = loader.load()
                    {
                        eprintln!("Files in model directory: {:?}", directory_listing);
                    }
                    std::process::exit(commands::EXIT_MODEL_UNAVAILABLE);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
