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
use crate::mapper::{self, CompanyRequest, CompanyResponse, EmployeeResponse};
use crate::metrics::record;
use crate::routes::{json_rejection, query_rejection, ListQuery};
use crate::state::AppState;

const RESOURCE: &str = "company";

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(ListQuery),
    responses(
        (status = 200, body = [CompanyResponse]),
        (status = 400, body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<CompanyResponse>>, JsonApiError> {
    let Query(q) = query.map_err(query_rejection)?;
    let pagination = q.pagination()?;
    let companies = &state.directory.companies;
    let res = companies.list_all(pagination).await;
    record(RESOURCE, "list", &res);
    Ok(Json(mapper::company_responses(companies, res?).await?))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "company id")),
    responses((status = 200, body = CompanyResponse), (status = 404, body = ErrorBody))
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<CompanyResponse>, JsonApiError> {
    let companies = &state.directory.companies;
    let res = companies.get_by_id(&id).await;
    record(RESOURCE, "get", &res);
    Ok(Json(mapper::company_response(companies, res?).await?))
}

#[utoipa::path(
    get, path = "/companies/{id}/employees", tag = "companies",
    params(("id" = String, Path, description = "company id")),
    responses((status = 200, body = [EmployeeResponse]), (status = 404, body = ErrorBody))
)]
pub async fn employees(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<EmployeeResponse>>, JsonApiError> {
    let res = state.directory.companies.get_employees_by_id(&id).await;
    record(RESOURCE, "employees", &res);
    Ok(Json(res?.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = CompanyRequest,
    responses((status = 201, body = CompanyResponse), (status = 400, body = ErrorBody))
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(req) = body.map_err(json_rejection)?;
    let companies = &state.directory.companies;
    let res = match req.into_draft() {
        Ok(draft) => companies.add(draft).await,
        Err(e) => Err(e),
    };
    record(RESOURCE, "add", &res);
    let created = mapper::company_response(companies, res?).await?;
    let location = format!("/companies/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "company id")),
    request_body = CompanyRequest,
    responses(
        (status = 200, body = CompanyResponse),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, JsonApiError> {
    let Json(req) = body.map_err(json_rejection)?;
    let companies = &state.directory.companies;
    let res = match req.into_draft() {
        Ok(draft) => companies.replace(&id, draft).await,
        Err(e) => Err(e),
    };
    record(RESOURCE, "replace", &res);
    Ok(Json(mapper::company_response(companies, res?).await?))
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "company id")),
    responses((status = 204, description = "deleted"), (status = 404, body = ErrorBody))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    let res = state.directory.companies.delete(&id).await;
    record(RESOURCE, "delete", &res);
    res?;
    Ok(StatusCode::NO_CONTENT)
}
