use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};

use crate::api::{
    required_text, ApiAnalyzeRequest, ApiAnalyzeResponse, ApiLibraryCreateRequest,
    ApiLibraryQuery, ApiLibraryResponse, ApiPersonaQuery, ApiRespondRequest, ApiRespondResponse,
    ApiSelectionRequest, ApiSimulateRequest, ApiSimulateResponse, ApiTransformRequest,
    ApiTransformResponse, ApiVariationsRequest, ApiVariationsResponse,
};
use persona_playback::config::{LatencyConfig, PlaybackConfig};
use persona_playback::library::{ContentLibrary, LibraryFilter};
use persona_playback::persona::{
    all_personas, clear_selected_persona, find_persona, load_selected_persona, resolve_persona,
    save_selected_persona, search_personas, Persona, SelectedPersona,
};
use persona_playback::progress::{now_ms, send_event, ProgressChannels};
use persona_playback::response::assemble_response;
use persona_playback::scoring::analyze_content;
use persona_playback::store::LocalStore;
use persona_playback::transform::{transform_tagged, Style};
use persona_playback::variation::generate_variations;
use persona_playback::{PlaybackEngine, PreviewError};

#[derive(Clone)]
struct AppState {
    engine: Arc<PlaybackEngine>,
    latency: LatencyConfig,
    store: Arc<LocalStore>,
    channels: ProgressChannels,
}

#[derive(serde::Deserialize)]
struct StreamQuery {
    request_id: String,
}

type ApiError = (StatusCode, String);

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: PlaybackConfig) -> Result<(), String> {
    let store = LocalStore::load(config.storage.state_path.clone()).await;
    let state = AppState {
        engine: Arc::new(PlaybackEngine::from_config(&config)),
        latency: config.latency.clone(),
        store: Arc::new(store),
        channels: ProgressChannels::default(),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/personas", get(personas_handler))
        .route("/api/simulate", post(simulate_handler))
        .route("/api/simulate/stream", get(stream_handler))
        .route("/api/transform", post(transform_handler))
        .route("/api/variations", post(variations_handler))
        .route("/api/respond", post(respond_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/library", get(library_list_handler).post(library_create_handler))
        .route("/api/library/:id", delete(library_delete_handler))
        .route(
            "/api/selection",
            get(selection_get_handler)
                .put(selection_put_handler)
                .delete(selection_delete_handler),
        )
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "persona playback server listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        format!("failed to bind server: {}", err)
    })?, app)
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn personas_handler(Query(query): Query<ApiPersonaQuery>) -> Json<Vec<Persona>> {
    let personas = all_personas();
    match query.q.as_deref() {
        Some(q) => Json(search_personas(&personas, q)),
        None => Json(personas),
    }
}

async fn simulate_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiSimulateRequest>,
) -> Result<Json<ApiSimulateResponse>, ApiError> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let text = request.text().map_err(bad_request)?;
    let persona = resolve_persona(&state.store, request.persona_id.as_deref())
        .await
        .map_err(bad_request)?;

    let sender = state.channels.open(&request_id).await;
    send_event(&sender, "start", &format!("Simulating {}", persona.name));
    tokio::time::sleep(state.latency.delay(state.latency.reaction_ms)).await;

    let mut source = state.engine.source();
    let reaction = state
        .engine
        .reactions()
        .react(&persona, &text, &mut source)
        .map_err(bad_request)?;
    send_event(&sender, "reaction", "Persona feedback ready");

    tokio::time::sleep(state.latency.delay(state.latency.insights_ms)).await;
    send_event(&sender, "insights", "Engagement insights ready");
    send_event(&sender, "done", "Simulation complete");

    tracing::info!(persona = %persona.id, sentiment = reaction.sentiment, "simulated reaction");
    Ok(Json(ApiSimulateResponse::new(request_id, persona, reaction)))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>, StatusCode>
{
    let sender = state.channels.open(&query.request_id).await;
    let receiver = sender.subscribe();
    let stream = BroadcastStream::new(receiver).filter_map(|event| {
        match event {
            Ok(event) => {
                let data = serde_json::to_string(&event).unwrap_or_default();
                Some(Ok(Event::default().data(data)))
            }
            Err(_) => None,
        }
    });

    send_event(&sender, "connected", "Streaming simulation status");
    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(8))))
}

async fn transform_handler(
    Json(request): Json<ApiTransformRequest>,
) -> Result<Json<ApiTransformResponse>, ApiError> {
    let text = required_text(request.text.as_deref()).map_err(bad_request)?;
    Ok(Json(ApiTransformResponse {
        style: Style::from_str(&request.style),
        content: transform_tagged(&text, &request.style),
    }))
}

async fn variations_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiVariationsRequest>,
) -> Result<Json<ApiVariationsResponse>, ApiError> {
    let text = required_text(request.text.as_deref()).map_err(bad_request)?;
    let axis = request.axis().map_err(bad_request)?;
    let persona = resolve_persona(&state.store, request.persona_id.as_deref())
        .await
        .map_err(bad_request)?;

    tokio::time::sleep(state.latency.delay(state.latency.variations_ms)).await;
    let mut source = state.engine.source();
    let variations = generate_variations(&text, axis, state.engine.metrics(), &mut source)
        .map_err(bad_request)?;

    Ok(Json(ApiVariationsResponse {
        persona_id: persona.id,
        axis,
        variations,
    }))
}

async fn respond_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiRespondRequest>,
) -> Result<Json<ApiRespondResponse>, ApiError> {
    let text = required_text(request.text.as_deref()).map_err(bad_request)?;
    let kind = request.kind().map_err(bad_request)?;
    let persona = resolve_persona(&state.store, request.persona_id.as_deref())
        .await
        .map_err(bad_request)?;

    tokio::time::sleep(state.latency.delay(state.latency.response_ms)).await;
    Ok(Json(ApiRespondResponse {
        response: assemble_response(&persona.name, kind, &text),
        persona_id: persona.id,
        kind,
    }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, ApiError> {
    required_text(request.text.as_deref()).map_err(bad_request)?;
    tokio::time::sleep(state.latency.delay(state.latency.analyze_ms)).await;
    let mut source = state.engine.source();
    Ok(Json(ApiAnalyzeResponse {
        analysis: analyze_content(&mut source),
    }))
}

async fn library_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ApiLibraryQuery>,
) -> Result<Json<ApiLibraryResponse>, ApiError> {
    let kind = match query.kind.as_deref() {
        Some("all") | None => None,
        Some(value) => Some(crate::api::parse_kind(Some(value)).map_err(bad_request)?),
    };
    let filter = LibraryFilter { kind, query: query.q };
    let items = ContentLibrary::new(&state.store).search(&filter).await;
    Ok(Json(ApiLibraryResponse { items }))
}

async fn library_create_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiLibraryCreateRequest>,
) -> Result<(StatusCode, Json<persona_playback::library::ContentItem>), ApiError> {
    let persona = resolve_persona(&state.store, request.persona_id.as_deref())
        .await
        .map_err(bad_request)?;
    let item = request
        .into_new_item()
        .and_then(|new_item| new_item.into_item(&persona, Utc::now()))
        .map_err(bad_request)?;
    let saved = ContentLibrary::new(&state.store)
        .add(item)
        .await
        .map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn library_delete_handler(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = ContentLibrary::new(&state.store)
        .delete(&item_id)
        .await
        .map_err(internal_error)?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("library item not found: {}", item_id)))
    }
}

async fn selection_get_handler(
    State(state): State<AppState>,
) -> Result<Json<SelectedPersona>, StatusCode> {
    load_selected_persona(&state.store)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn selection_put_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiSelectionRequest>,
) -> Result<Json<SelectedPersona>, ApiError> {
    let persona = find_persona(&request.persona_id)
        .ok_or_else(|| bad_request(PreviewError::UnknownPersona(request.persona_id.clone())))?;
    let selected = SelectedPersona::from_persona(&persona);
    save_selected_persona(&state.store, &selected)
        .await
        .map_err(internal_error)?;
    Ok(Json(selected))
}

async fn selection_delete_handler(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    clear_selected_persona(&state.store)
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

fn bad_request(err: PreviewError) -> ApiError {
    (StatusCode::BAD_REQUEST, err.to_string())
}

fn internal_error(err: String) -> ApiError {
    tracing::error!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err)
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}
