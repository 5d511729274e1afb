use std::net::SocketAddr;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use smb_previews::web::AppState;
use smb_previews::widget::InterestCard;
use smb_previews::views;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let state = AppState::new().await?;
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/preview/:prospect_id/interested", post(interested))
        .route("/:slug", get(preview_page))
        .fallback(not_found)
        .with_state(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    info!("Starting smb-previews server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

async fn healthz() -> &'static str {
    "ok"
}

async fn preview_page(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    match state.records.load(&slug).await {
        Some(record) => {
            info!(slug = %slug, "rendering preview");
            Html(views::render_preview_page(&record, state.notifier.base())).into_response()
        }
        None => not_found().await.into_response(),
    }
}

async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::render_not_found()))
}

/// Context the interest card posts along with the click, so the response
/// fragment can keep the personalized copy and fallback links.
#[derive(Debug, Deserialize)]
struct InterestContext {
    business_name: String,
    #[serde(default)]
    decision_maker_name: Option<String>,
}

async fn interested(
    Path(prospect_id): Path<String>,
    State(state): State<AppState>,
    Form(context): Form<InterestContext>,
) -> Html<String> {
    let success = match state.notifier.notify_interested(&prospect_id).await {
        Ok(()) => {
            info!(prospect_id = %prospect_id, "interest confirmed");
            true
        }
        Err(err) => {
            error!(prospect_id = %prospect_id, ?err, "interest submission failed");
            false
        }
    };
    let outcome = if success { "confirmed" } else { "error" };
    state.record_interest(&prospect_id, outcome).await;

    // Drive the card model through the same transitions the visitor saw.
    let mut card = InterestCard::new(
        context.business_name,
        Some(prospect_id),
        context.decision_maker_name,
    );
    card.begin_submit();
    card.complete_submit(success);
    Html(views::render_card_body(&card))
}
