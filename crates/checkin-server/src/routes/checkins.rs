//! Check-in submission endpoint
//!
//! Validation here runs independently of whatever the client did: the same
//! field rules from checkin-core, paired with the server's own message
//! catalog. Only POST is accepted on this route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Form, Json, Router};

use checkin_core::validate::failing_fields;
use checkin_core::{CheckinRecord, SubmitResponse};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/checkins", post(submit_checkin).fallback(method_not_allowed))
}

/// Server-side message for a field that failed re-validation.
fn server_error(identity: &str) -> &'static str {
    match identity {
        "plateNumber" => "Некорректный гос-номер",
        "passportSeries" => "Некорректная серия паспорта",
        "passportNumber" => "Некорректный номер паспорта",
        "arrivalDate" => "Не указана дата прибытия",
        "driverName" => "Не указано ФИО водителя",
        "vehicle" => "Не указано транспортное средство",
        "issuedBy" => "Не указано, кем выдан паспорт",
        "issueDate" => "Не указана дата выдачи паспорта",
        _ => "Некорректные данные",
    }
}

/// Accept one check-in record: re-validate, then append to the record store.
pub async fn submit_checkin(
    State(state): State<AppState>,
    Form(record): Form<CheckinRecord>,
) -> Json<SubmitResponse> {
    let errors: Vec<String> = failing_fields(|spec| record.value(spec.identity))
        .into_iter()
        .map(|identity| server_error(identity).to_string())
        .collect();

    if !errors.is_empty() {
        tracing::info!(plate = %record.plate_number, count = errors.len(), "submission rejected");
        return Json(SubmitResponse::rejected(errors));
    }

    match state.store.append(&record) {
        Ok(()) => {
            tracing::info!(plate = %record.plate_number, "check-in recorded");
            Json(SubmitResponse::accepted("Данные успешно сохранены"))
        }
        Err(err) => {
            tracing::error!(%err, path = %state.store.path().display(), "record append failed");
            Json(SubmitResponse::rejected(vec!["Ошибка при сохранении данных".to_string()]))
        }
    }
}

/// Fixed answer for any non-POST method on the checkins route.
async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Метод не разрешен")
}
