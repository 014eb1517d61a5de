use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ex_translator_gateway::config::Args;
use ex_translator_gateway::cors::OriginPolicy;
use ex_translator_gateway::provider::GrokProvider;
use ex_translator_gateway::rate_limit::RateLimiter;
use ex_translator_gateway::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState {
        provider: Arc::new(GrokProvider::new(
            args.provider_url.clone(),
            args.api_key.clone(),
            args.model.clone(),
        )),
        origin_policy: OriginPolicy::from_list(&args.allowed_origins, &args.origin_suffix),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
    });

    let app = ex_translator_gateway::app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("gateway running on http://localhost:{}", args.port);
    info!(
        "forwarding to provider at {} (model {})",
        args.provider_url, args.model
    );
    info!(
        "rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    axum::serve(listener, app).await.unwrap();
}
