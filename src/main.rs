//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the profile → plan flow lives in PlanService.

use dotenv::dotenv;
use nutriai::adapters::ai::{MockGenerationAdapter, OpenAiAdapter};
use nutriai::adapters::ui::tui::TuiInputPort;
use nutriai::ports::{GenerationPort, InputPort};
use nutriai::usecases::PlanService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    nutriai::adapters::ui::init_ui();

    let cfg = nutriai::shared::config::AppConfig::load().unwrap_or_default();

    let data_dir = cfg.data_dir_or_default();
    let reports_dir = PathBuf::from(&data_dir).join("reports");
    info!(path = %reports_dir.display(), "reports directory");

    // --- Generation adapter: real provider when a key is set, mock otherwise ---
    let generator: Arc<dyn GenerationPort> = if cfg.is_ai_configured() {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "plan generation enabled with OpenAI-compatible adapter"
        );
        Arc::new(OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default(),
            cfg.ai_model_or_default(),
            cfg.ai_temperature_or_default(),
        ))
    } else {
        warn!("NUTRIAI_AI_API_KEY not set, using mock generation adapter");
        Arc::new(MockGenerationAdapter::new())
    };

    // --- Service + UI ---
    let plan_service = Arc::new(PlanService::new(generator, reports_dir));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(plan_service));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
