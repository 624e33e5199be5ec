use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::server::AppState;
use crate::server::dto::{
    CompaniesResponse, CompanyDetailResponse, CompanyResponse, CreateCompanyRequest,
    DeletedResponse, UpdateCompanyRequest,
};
use crate::server::extract::JsonBody;
use crate::server::response::{ApiError, StoreOptionExt};
use crate::server::validation::require_fields;
use crate::types::CompanyWithInvoices;

pub fn companies_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        )
}

fn company_not_found(code: &str) -> ApiError {
    ApiError::not_found(format!("Company not found: {code}"))
}

pub async fn list_companies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let companies = state.store.list_companies()?;

    Ok::<_, ApiError>(Json(CompaniesResponse { companies }))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();

    let company = store
        .get_company(&code)?
        .ok_or_else(|| company_not_found(&code))?;
    let invoices = store.list_company_invoice_ids(&code)?;

    Ok::<_, ApiError>(Json(CompanyDetailResponse {
        company: CompanyWithInvoices { company, invoices },
    }))
}

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCompanyRequest>,
) -> impl IntoResponse {
    let company = require_fields(req.fields())?;

    let company = state.store.create_company(&company)?;
    tracing::debug!("Created company {}", company.code);

    Ok::<_, ApiError>((StatusCode::CREATED, Json(CompanyResponse { company })))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    JsonBody(req): JsonBody<UpdateCompanyRequest>,
) -> impl IntoResponse {
    let (name, description) = require_fields(req.fields())?;

    let company = state
        .store
        .update_company(&code, &name, &description)?
        .or_not_found(format!("Company not found: {code}"))?;

    Ok::<_, ApiError>(Json(CompanyResponse { company }))
}

pub async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    if !state.store.delete_company(&code)? {
        return Err(company_not_found(&code));
    }
    tracing::debug!("Deleted company {code}");

    Ok::<_, ApiError>(Json(DeletedResponse::new()))
}
