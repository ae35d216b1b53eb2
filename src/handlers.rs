use crate::errors::AppError;
use crate::models::{FuelType, KeyRequest, KeyResponse, QuoteRequest, QuoteResponse};
use crate::state::AppState;
use crate::ui::render_index;
use crate::widget::{Transition, WidgetEvent};
use axum::{extract::State, response::Html, Json};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.widget().view();
    Html(render_index(state.catalog.fuels(), state.authenticated, &view))
}

pub async fn get_fuels(State(state): State<AppState>) -> Json<Vec<FuelType>> {
    Json(state.catalog.fuels().to_vec())
}

// replays one form snapshot through a fresh widget
pub async fn quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let mut widget = state.widget();

    let fuel_id = payload.fuel_id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    if let Some(id) = fuel_id {
        let fuel = state
            .catalog
            .find(id)
            .ok_or_else(|| AppError::bad_request(format!("unknown fuel type: {id}")))?;
        widget.apply(WidgetEvent::SelectFuel(fuel.to_selection()));
    }

    widget.apply(WidgetEvent::SwitchMode(payload.mode));

    let typed_caret = payload
        .caret
        .unwrap_or_else(|| payload.raw_input.chars().count());
    let caret = match widget.apply(WidgetEvent::Input {
        text: payload.raw_input,
        caret: typed_caret,
    }) {
        Transition::InputEdited { caret, .. } => caret,
        _ => typed_caret,
    };

    let view = widget.view();
    debug!(
        mode = ?payload.mode,
        input = %view.input,
        valid = view.submit_enabled,
        "quote computed"
    );

    Ok(Json(QuoteResponse {
        input: view.input.clone(),
        caret,
        view,
    }))
}

pub async fn key(State(state): State<AppState>, Json(payload): Json<KeyRequest>) -> Json<KeyResponse> {
    let rejected = state.widget().key_down(&payload.key) == Transition::KeyRejected;
    Json(KeyResponse { rejected })
}
