use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use shipment_wizard::config::AppConfig;
use shipment_wizard::error::AppError;
use shipment_wizard::telemetry;
use shipment_wizard::workflows::shipment::calculations::format_calculated;
use shipment_wizard::workflows::shipment::{
    shipment_router, step_views, CalculatedValueKind, Country, LineItemImporter, Mode,
    ReviewSummary, ShipmentRecord, ShipmentWizardBlueprint,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "shipment-wizard",
    about = "Shipment data-entry wizard: step planning, validation and review",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the wizard steps and inputs for a mode and destination
    Steps(StepsArgs),
    /// Summarize a saved shipment record as the review step shows it
    Review(ReviewArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct StepsArgs {
    /// Transport mode (Air or Sea)
    #[arg(long)]
    mode: Option<Mode>,
    /// Destination country, e.g. Japan or "Costa Rica"
    #[arg(long)]
    country: Option<Country>,
}

#[derive(Args, Debug)]
struct ReviewArgs {
    /// JSON file holding the shipment record
    #[arg(long)]
    record: PathBuf,
    /// CSV export of product line items to append to the record
    #[arg(long)]
    line_items_csv: Option<PathBuf>,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let mut config = AppConfig::load()?;
    if let Command::Serve(args) = &command {
        apply_serve_overrides(&mut config, args);
    }
    telemetry::init(&config.telemetry)?;

    let blueprint = ShipmentWizardBlueprint::standard();
    blueprint.verify()?;

    match command {
        Command::Serve(_) => run_server(blueprint, config).await,
        Command::Steps(args) => {
            render_steps(&blueprint, args);
            Ok(())
        }
        Command::Review(args) => run_review(&blueprint, args),
    }
}

fn apply_serve_overrides(config: &mut AppConfig, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

async fn run_server(blueprint: ShipmentWizardBlueprint, config: AppConfig) -> Result<(), AppError> {
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(shipment_router(blueprint))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "shipment wizard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_review(blueprint: &ShipmentWizardBlueprint, args: ReviewArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.record)?;
    let mut record: ShipmentRecord = serde_json::from_str(&raw)?;

    if let Some(path) = args.line_items_csv {
        record.extend_line_items(LineItemImporter::from_path(path)?);
    }

    let summary = ReviewSummary::build(blueprint, &record);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_review(&summary);
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn selection_label<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "not selected".to_string())
}

fn render_steps(blueprint: &ShipmentWizardBlueprint, args: StepsArgs) {
    let StepsArgs { mode, country } = args;
    let steps = step_views(blueprint, mode, country);

    println!("Shipment wizard steps");
    println!(
        "Mode: {}, destination: {} ({} steps)",
        selection_label(mode),
        selection_label(country),
        steps.len()
    );

    for (index, step) in steps.iter().enumerate() {
        let conditional = if step.conditional { " [conditional]" } else { "" };
        println!(
            "\n{}. {} (step {}){}",
            index + 1,
            step.title,
            step.number,
            conditional
        );
        println!("   {}", step.description);

        for field in &step.fields {
            let required = if field.required { " *" } else { "" };
            println!(
                "   - {}{} [{}] ({})",
                field.label,
                required,
                field.category.label(),
                field.placeholder
            );
        }
    }
}

fn render_review(summary: &ReviewSummary) {
    println!("Shipment review");
    println!(
        "Mode: {}, destination: {}, line items: {}",
        selection_label(summary.mode),
        selection_label(summary.destination_country),
        summary.line_item_count
    );

    for step in &summary.steps {
        let marker = if step.complete { "complete" } else { "incomplete" };
        println!("\n{} ({})", step.title, marker);
        for field in &step.fields {
            println!("- {}: {}", field.label, field.value);
        }
    }

    let derived = &summary.derived;
    println!("\nCalculated values");
    println!(
        "- Total cases: {}",
        format_calculated(Some(derived.total_cases), CalculatedValueKind::Number)
    );
    println!(
        "- Total sticks: {}",
        format_calculated(Some(derived.total_sticks), CalculatedValueKind::Number)
    );
    println!(
        "- Gross weight: {}",
        format_calculated(Some(derived.total_gross_kilos), CalculatedValueKind::Weight)
    );
    println!(
        "- Net weight: {}",
        format_calculated(Some(derived.total_net_kilos), CalculatedValueKind::Weight)
    );
    println!(
        "- Lead time: {}",
        format_calculated(
            derived.lead_time_days.map(|days| days as f64),
            CalculatedValueKind::Days
        )
    );
    println!(
        "- Price per unit: {}",
        format_calculated(derived.price_per_unit, CalculatedValueKind::Currency)
    );
    println!(
        "- Percent pilfered: {}",
        format_calculated(derived.percent_pilfered, CalculatedValueKind::Percentage)
    );
    println!(
        "- Value of stolen items: {}",
        format_calculated(derived.value_of_stolen_items, CalculatedValueKind::Currency)
    );
    println!(
        "- Sticks pilfered: {}",
        format_calculated(
            derived.sticks_pilfered.map(|sticks| sticks as f64),
            CalculatedValueKind::Number
        )
    );

    if summary.validation.valid {
        println!("\nReady to submit");
    } else {
        println!("\nNot ready: {}", summary.error_summary);
        for error in &summary.validation.errors {
            println!("- {}: {}", error.field, error.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    #[test]
    fn cli_parses_selection_flags() {
        let cli = Cli::try_parse_from([
            "shipment-wizard",
            "steps",
            "--mode",
            "sea",
            "--country",
            "Costa Rica",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Steps(args)) => {
                assert_eq!(args.mode, Some(Mode::Sea));
                assert_eq!(args.country, Some(Country::CostaRica));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_flags_override_configured_address() {
        let mut config = AppConfig::from_lookup(|_| None).expect("defaults load");
        let cli = Cli::try_parse_from(["shipment-wizard", "serve", "--port", "9090"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Serve(args)) => apply_serve_overrides(&mut config, &args),
            other => panic!("unexpected command: {other:?}"),
        }

        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.server.host,
            AppConfig::from_lookup(|_| None).expect("defaults load").server.host
        );
    }

    #[test]
    fn cli_defaults_to_serve() {
        let cli = Cli::try_parse_from(["shipment-wizard"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: PrometheusBuilder::new().build_recorder().handle(),
        };
        let app = Router::new()
            .route("/ready", get(readiness_endpoint))
            .with_state(state);

        let response = app
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
