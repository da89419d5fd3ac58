//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use folio_topology::Theme;
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::api;
use crate::api::topology::{parse_hover, parse_qubit_list};
use crate::dto::PageQuery;
use crate::error::ApiError;
use crate::render::{self, Figures};
use crate::state::{AppState, SiteConfig};

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/topology", get(api::topology::get_topology))
        .route("/topology/path", get(api::topology::shortest_path))
        .route("/topology/svg", get(api::topology::topology_svg))
        .route("/benchmarks", get(api::benchmarks::overview))
        .route("/benchmarks/win-rate", get(api::benchmarks::win_rate))
        .route(
            "/benchmarks/{regime}/{circuit}",
            get(api::benchmarks::get_record),
        )
        .route("/animation", get(api::animation::current_step))
        .route("/animation/step/{step}", post(api::animation::jump_to))
        .route("/animation/toggle", post(api::animation::toggle_playing));

    let page_routes = Router::new()
        .route("/", get(landing))
        .route("/index.html", get(landing))
        .route("/blog/{slug}", get(blog_post));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Load the dataset, start the animation and serve until the listener fails.
pub async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_address;
    let state = Arc::new(AppState::load(config)?);
    let _ticker = state.start_animation();

    let app = create_router(state);

    info!("Starting folio site at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Theme-only query for pages without figures.
#[derive(Debug, Default, Deserialize)]
struct ThemeQuery {
    theme: Option<Theme>,
}

async fn landing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ThemeQuery>,
) -> Html<String> {
    Html(render::landing_page(state.palette(query.theme)))
}

async fn blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let palette = state.palette(query.theme);
    let Some(post) = state.post(&slug) else {
        debug!(slug, "unknown post");
        return Ok((StatusCode::NOT_FOUND, Html(render::not_found_page(palette))).into_response());
    };

    let mut figures = Figures::initial(&state.config);
    if let Some(raw) = &query.selected {
        figures.topology.select_all(&parse_qubit_list(raw)?)?;
    }
    if let Some(choice) = query.path {
        figures.cost.select(choice);
    }
    if query.expanded {
        figures.swap.toggle();
    }
    if let Some(raw) = &query.hover {
        figures.topology.hover_target(Some(parse_hover(raw)?))?;
    }
    if let Some(gates) = query.gates {
        figures.calculator.set_gate_count(gates);
    }
    if let Some(fidelity) = query.fidelity {
        figures.calculator.set_gate_fidelity(fidelity);
    }

    figures.animation = {
        let mut animation = state.animation.lock().await;
        if let Some(step) = query.step {
            animation.jump_to(step);
        }
        if let Some(playing) = query.playing {
            if animation.is_playing() != playing {
                animation.toggle_playing();
            }
        }
        *animation
    };

    let html = render::post_page(&state, post, &figures, palette)?;
    Ok(Html(html).into_response())
}

async fn not_found(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(state.palette(None))),
    )
}
