use crate::dtos::{InsertReceipt, PersonRequest, PersonResponse};
use crate::services::UpdateOutcome;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service_core::envelope::Envelope;
use service_core::error::AppError;
use validator::Validate;

const NOT_FOUND_MESSAGE: &str = "Person with specified ID not found!";
const DELETED_MESSAGE: &str = "Person successfully deleted!";

fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!(NOT_FOUND_MESSAGE))
}

/// Unwraps the JSON body and checks the required fields.
fn parse_body(
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<PersonRequest, AppError> {
    let Json(request) = payload
        .map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;
    request.validate()?;
    Ok(request)
}

pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Envelope<InsertReceipt>, AppError> {
    let deadline = state.deadline();
    let request = parse_body(payload)?;

    let inserted_id = deadline.run(state.store.insert(request.into())).await?;

    tracing::info!(person_id = %inserted_id, "Person created");

    Ok(Envelope::success(StatusCode::CREATED, InsertReceipt { inserted_id }))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Envelope<PersonResponse>, AppError> {
    let deadline = state.deadline();

    let person = deadline
        .run(state.store.find_by_id(&person_id))
        .await?
        .ok_or_else(not_found)?;

    Ok(Envelope::success(StatusCode::OK, PersonResponse::from(person)))
}

pub async fn get_all_people(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<PersonResponse>>, AppError> {
    let deadline = state.deadline();

    let people = deadline.run(state.store.find_all()).await?;

    tracing::debug!(count = people.len(), "Listed people");

    Ok(Envelope::success(
        StatusCode::OK,
        people.into_iter().map(PersonResponse::from).collect(),
    ))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Envelope<PersonResponse>, AppError> {
    let deadline = state.deadline();
    let request = parse_body(payload)?;

    let outcome = deadline
        .run(state.store.update_by_id(&person_id, request.into()))
        .await?;

    if outcome == UpdateOutcome::Unmatched {
        tracing::warn!(person_id = %person_id, "Update matched nothing and created nothing");
        return Err(not_found());
    }

    // Upserts are created under `person_id`, so one lookup serves both cases.
    let person = deadline
        .run(state.store.find_by_id(&person_id))
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(person_id = %person_id, outcome = ?outcome, "Person updated");

    Ok(Envelope::success(StatusCode::OK, PersonResponse::from(person)))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Envelope<String>, AppError> {
    let deadline = state.deadline();

    let deleted = deadline.run(state.store.delete_by_id(&person_id)).await?;
    if deleted < 1 {
        return Err(not_found());
    }

    tracing::info!(person_id = %person_id, "Person deleted");

    Ok(Envelope::success(StatusCode::OK, DELETED_MESSAGE.to_string()))
}
