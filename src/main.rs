use std::path::Path;
use std::time::Duration;

use clap::Parser;
use lift_standards::config::FileConfig;
use lift_standards::core::export::table_to_csv;
use lift_standards::domain::model::TierReport;
use lift_standards::domain::ports::Pipeline;
use lift_standards::utils::{logger, validation::Validate};
use lift_standards::{
    select_table, CliConfig, HttpDocumentSource, LookupPipeline, StandardsEngine, StandardsError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lift-standards lookup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match FileConfig::load(&path) {
            Ok(file) => config.apply_file(&file),
            Err(e) => fail(&e, "Config file loading failed"),
        }
    }

    if let Err(e) = config.validate() {
        fail(&e, "Configuration validation failed");
    }

    let source = match HttpDocumentSource::new(
        &config.user_agent,
        Duration::from_secs(config.timeout_seconds),
    ) {
        Ok(source) => source,
        Err(e) => fail(&e, "HTTP client setup failed"),
    };
    let pipeline = LookupPipeline::new(source, config.clone());

    if let Some(path) = config.dump_table.clone() {
        match dump_table(&pipeline, &config, &path).await {
            Ok(()) => println!("✅ Table written to {}", path.display()),
            Err(e) => fail(&e, "Table dump failed"),
        }
        return Ok(());
    }

    let engine = StandardsEngine::new(pipeline);
    match engine.run().await {
        Ok(result) => {
            let report = TierReport::new(
                config.exercise.clone(),
                config.gender,
                config.unit,
                config.body_weight,
                config.one_rep_max,
                result,
            );
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("✅ {}", report.summary());
            }
        }
        Err(e) => fail(&e, "Lookup failed"),
    }

    Ok(())
}

/// Fetch and extract only, then write the selected gender's table as CSV.
async fn dump_table<P: Pipeline>(
    pipeline: &P,
    config: &CliConfig,
    path: &Path,
) -> lift_standards::Result<()> {
    let document = pipeline.fetch().await?;
    let tables = pipeline.extract(&document)?;
    let table = select_table(&tables, config.gender)?;
    std::fs::write(path, table_to_csv(table)?)?;
    Ok(())
}

fn fail(error: &StandardsError, context: &str) -> ! {
    tracing::error!("❌ {}: {}", context, error);
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(1);
}
