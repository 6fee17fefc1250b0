use dotenvy::dotenv;
use pggen::{
    codegen::{
        build_generation_run_service,
        domain::services::generation_run_command_service::GenerationRunCommandService,
        run_generation_command,
    },
    config::app_config::AppConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pggen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();

    let command = run_generation_command(&config).expect("invalid generation settings");
    let service = build_generation_run_service(&config)
        .await
        .expect("failed to connect to catalog");

    let report = match service.handle_run(command).await {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(%error, "generation failed");
            std::process::exit(1);
        }
    };

    for artifact in &report.artifacts {
        println!(
            "-- {} [{}]",
            artifact.table.qualified_name(),
            artifact.template_name
        );
        println!("{}", artifact.contents);
    }

    for skipped in &report.skipped_tables {
        tracing::warn!(
            table = %skipped.table.qualified_name(),
            reason = %skipped.reason,
            "table skipped"
        );
    }

    tracing::info!(
        generated = report.generated_table_count(),
        skipped = report.skipped_tables.len(),
        "done"
    );
}
