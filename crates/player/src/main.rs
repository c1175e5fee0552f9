//! Reelfolio - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelfolio_domain::Site;
use reelfolio_player::AppConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelfolio_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Reelfolio");

    let config = AppConfig::from_env();

    // Manifest is validated once; a broken manifest never reaches the UI
    let site = match Site::builtin(config.base_path.clone()) {
        Ok(site) => Arc::new(site),
        Err(e) => {
            tracing::error!(error = %e, "Site manifest is invalid");
            return;
        }
    };
    tracing::info!(
        owner = %site.owner,
        base_path = %site.resolver().base(),
        rows = site.rows.len(),
        routes = site.routes().len(),
        remote_assets = site.resolver().remote_len(),
        "Site manifest loaded"
    );
    if site.routes().is_empty() {
        tracing::warn!("Site manifest declares no detail routes");
    }
    for entry in site.routes().iter() {
        tracing::debug!(slug = %entry.slug, document = %entry.document_url, "Detail route");
    }

    let platform = reelfolio_player::infrastructure::platform::create_platform();

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!(
            "<title>{}</title><style>{}</style>",
            site.default_title,
            load_player_css()
        );
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title(&site.default_title));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(site)
        .launch(reelfolio_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
