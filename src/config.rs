use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "ex-translator-gateway")]
#[command(about = "Edge gateway for the Toxic Ex-Translator")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Chat-completion provider base URL
    #[arg(long, default_value = "https://api.x.ai")]
    pub provider_url: String,

    // Provider API key (kept out of argv in deployments)
    #[arg(long, env = "GROK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    // Model to request from the provider
    #[arg(long, default_value = "grok-4-1-fast-reasoning")]
    pub model: String,

    // Allowed origins (comma-separated)
    #[arg(
        long,
        default_value = "http://localhost:3000,http://127.0.0.1:3000,https://extranslator.samolab.com"
    )]
    pub allowed_origins: String,

    // Trusted origin suffix for preview deployments
    #[arg(long, default_value = ".ex-translate.pages.dev")]
    pub origin_suffix: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 9)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,
}
