use clap::{Arg, Command};
use std::sync::Arc;
use tracing::info;

use notice_mt::{InferenceApiBackend, MockBackend, MockMode, ModelBackend, TranslationService};

mod routes;

use routes::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("notice-mt-web")
        .version(env!("CARGO_PKG_VERSION"))
        .about("English → Hindi public notice translation server")
        .arg(
            Arg::new("host")
                .long("host")
                .help("Address to bind")
                .default_value("0.0.0.0"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .short('p')
                .help("Port to listen on")
                .value_parser(clap::value_parser!(u16))
                .default_value("8000"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Serve with an echo mock backend instead of the model endpoint")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let host = matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or("0.0.0.0");
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8000);

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    // Build the backend once; a bad model location stops startup here
    let backend: Arc<dyn ModelBackend> = if matches.get_flag("mock") {
        Arc::new(MockBackend::new(MockMode::Echo))
    } else {
        let backend = InferenceApiBackend::from_env()
            .map_err(|e| format!("Failed to initialize translator: {}", e))?;
        Arc::new(backend)
    };
    info!(
        "✅ Translator initialized (model: {}, device: {})",
        backend.model_name(),
        backend.device()
    );

    let state = AppState {
        service: Arc::new(TranslationService::new(backend)),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
