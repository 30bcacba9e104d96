use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use arvore::interface::FamilyInterface;
use arvore::server::{AppState, router};
use arvore::settings::Settings;
use arvore::source::load_dir;
use arvore::store::EntityStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "arvore=info,tower_http=info".into()))
        .with(fmt::layer())
        .init();

    let settings = Settings::load()?;
    let store = match load_dir(Path::new(&settings.data_dir)) {
        Ok(store) => store,
        Err(e) => {
            // the tree stays empty until a successful reload
            warn!(error = %e, data_dir = %settings.data_dir, "starting with an empty store");
            EntityStore::new()
        }
    };
    let interface = Arc::new(FamilyInterface::with_data_dir(store, &settings.data_dir));
    let app = router(AppState { interface, default_viewport: settings.default_viewport });

    let listener = TcpListener::bind(&settings.bind).await?;
    info!(bind = %settings.bind, viewport = settings.default_viewport.as_str(), "arvore listening");
    axum::serve(listener, app).await?;
    Ok(())
}
