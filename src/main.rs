use clap::Parser;
use package_seeder::core::ConfigProvider;
use package_seeder::utils::{logger, validation::Validate};
use package_seeder::{CliConfig, EtlEngine, LocalStorage, SeederError, SeederPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting package-seeder");
    let strict = config.strict;

    match run(&mut config).await {
        Ok(Some(output_path)) => {
            println!("Successfully generated {}", output_path);
        }
        Ok(None) => {
            tracing::info!("Dry run complete, nothing written");
        }
        Err(e) => {
            tracing::error!(
                "❌ Package import failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            println!("Error: {}", e);

            if strict {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Returns the written seeder path, or `None` for a dry run.
async fn run(config: &mut CliConfig) -> Result<Option<String>, SeederError> {
    config.load_config_file()?;
    config.validate()?;
    tracing::debug!("CLI config: {:?}", config);

    let dry_run = config.dry_run();
    let storage = LocalStorage::current_dir();
    let pipeline = SeederPipeline::new(storage, config.clone());
    let output_path = EtlEngine::new(pipeline).run().await?;

    Ok((!dry_run).then_some(output_path))
}
