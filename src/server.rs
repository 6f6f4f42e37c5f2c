use crate::cli::ServeArgs;
use crate::routes::{with_ghost_job_routes, AppState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ghost_job_analyzer::config::AppConfig;
use ghost_job_analyzer::error::AppError;
use ghost_job_analyzer::telemetry;
use ghost_job_analyzer::workflows::ghost_jobs::BatchClassifier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let scoring = config.scoring.load()?;
    let classifier = Arc::new(BatchClassifier::new(scoring));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_ghost_job_routes(classifier)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        scoring = ?config.scoring.path,
        "ghost job analyzer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
