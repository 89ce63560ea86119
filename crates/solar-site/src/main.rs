//! Solar Landing Site server
//!
//! Renders the landing page with Leptos SSR and serves the hydration bundle.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use solar_site::{app::App, site::Site};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "solar_site=info,solar_core=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let site = Site::load().context("invalid business configuration")?;
    info!(
        business = %site.config.business_name,
        coverage = %site.config.coverage,
        "Loaded site configuration"
    );

    let conf = get_configuration(None).await.context("failed to read leptos options")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_fn = move || {
        provide_context(site.clone());
        view! { <App/> }
    };
    let routes = generate_route_list(app_fn.clone());

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, app_fn.clone())
        .fallback(leptos_axum::file_and_error_handler(app_fn))
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Landing page listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The wasm bundle starts from `solar_site::hydrate`.
}
