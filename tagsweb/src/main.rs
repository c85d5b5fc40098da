use std::{thread, time::Duration};

use api::handlers::render_tags;
use args::parse_args;
use asset::static_handler;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
use views::{
    demo::demo_view,
    preview::{preview_form, preview_submit},
};

mod api;
mod args;
mod asset;
mod components;
mod error;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    let app = router();

    // Port 0 lets the OS pick a free port. If asked to, a background thread
    // opens the correct URL in the browser once axum has had a moment to
    // start up.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");
    if args.auto_open {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here. Closing the browser window does
    // not shut down the app.
    axum::serve(listener, app).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/", get(demo_view))
        .route("/preview", get(preview_form).post(preview_submit))
        .route("/api/tags", post(render_tags))
        .route("/assets/*file", get(static_handler))
}

/// Logs at info by default, RUST_LOG overrides that. Records from tags_core
/// go through the `log` facade and are picked up here as well.
fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .with_env_filter(filter)
        .init();
}
