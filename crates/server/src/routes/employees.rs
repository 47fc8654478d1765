use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::errors::{ErrorBody, JsonApiError};
use crate::mapper::{EmployeeRequest, EmployeeResponse};
use crate::metrics::record;
use crate::routes::{json_rejection, query_rejection, ListQuery};
use crate::state::AppState;

const RESOURCE: &str = "employee";

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    params(ListQuery),
    responses((status = 200, body = [EmployeeResponse]), (status = 400, body = ErrorBody))
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<EmployeeResponse>>, JsonApiError> {
    let Query(q) = query.map_err(query_rejection)?;
    let pagination = q.pagination()?;
    let res = state.directory.employees.list_all(q.gender.as_deref(), pagination).await;
    record(RESOURCE, "list", &res);
    Ok(Json(res?.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "employee id")),
    responses((status = 200, body = EmployeeResponse), (status = 404, body = ErrorBody))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<EmployeeResponse>, JsonApiError> {
    let res = state.directory.employees.get_by_id(&id).await;
    record(RESOURCE, "get", &res);
    Ok(Json(res?.into()))
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, body = EmployeeResponse),
        (status = 400, body = ErrorBody),
        (status = 404, description = "referenced company does not exist", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(req) = body.map_err(json_rejection)?;
    let res = match req.into_draft() {
        Ok(draft) => state.directory.employees.add(draft).await,
        Err(e) => Err(e),
    };
    record(RESOURCE, "add", &res);
    let created = EmployeeResponse::from(res?);
    let location = format!("/employees/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, body = EmployeeResponse),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, JsonApiError> {
    let Json(req) = body.map_err(json_rejection)?;
    let res = match req.into_draft() {
        Ok(draft) => state.directory.employees.replace(&id, draft).await,
        Err(e) => Err(e),
    };
    record(RESOURCE, "replace", &res);
    Ok(Json(res?.into()))
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = String, Path, description = "employee id")),
    responses((status = 204, description = "deleted"), (status = 404, body = ErrorBody))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let res = state.directory.employees.delete(&id).await;
    record(RESOURCE, "delete", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
