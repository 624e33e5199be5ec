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
    CreateInvoiceRequest, CreateInvoiceResponse, CreatedInvoice, DeletedResponse,
    InvoiceDetailResponse, InvoiceResponse, InvoicesResponse, UpdateInvoiceRequest,
};
use crate::server::extract::JsonBody;
use crate::server::response::{ApiError, StoreOptionExt};
use crate::server::validation::{parse_invoice_id, require_fields};
use crate::types::InvoiceWithCompany;

pub fn invoices_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

pub async fn list_invoices(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let invoices = state.store.list_invoices()?;

    Ok::<_, ApiError>(Json(InvoicesResponse { invoices }))
}

pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let id = parse_invoice_id(&id)?;

    let invoice = store
        .get_invoice(id)?
        .or_not_found(format!("Can't find invoice: {id}"))?;

    // The foreign key guarantees this row; a miss means the store is inconsistent.
    let company = store.get_company(&invoice.comp_code)?.ok_or_else(|| {
        tracing::error!(
            "Invoice {} references missing company {}",
            invoice.id,
            invoice.comp_code
        );
        ApiError::internal()
    })?;

    Ok::<_, ApiError>(Json(InvoiceDetailResponse {
        invoice: InvoiceWithCompany::new(invoice, company),
    }))
}

pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateInvoiceRequest>,
) -> impl IntoResponse {
    let (comp_code, amt) = require_fields(req.fields())?;

    let invoice = state
        .store
        .create_invoice(&comp_code, amt)?
        .or_not_found("Company code not found")?;
    tracing::debug!("Created invoice {} for {}", invoice.id, invoice.comp_code);

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(CreateInvoiceResponse {
            company: CreatedInvoice {
                comp_code: invoice.comp_code,
                amt: invoice.amt,
            },
        }),
    ))
}

pub async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateInvoiceRequest>,
) -> impl IntoResponse {
    let id = parse_invoice_id(&id)?;
    let amt = require_fields(req.amt)?;

    let invoice = state
        .store
        .update_invoice_amount(id, amt)?
        .or_not_found("Invoice not found")?;

    Ok::<_, ApiError>(Json(InvoiceResponse { invoice }))
}

pub async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = parse_invoice_id(&id)?;

    if !state.store.delete_invoice(id)? {
        return Err(ApiError::not_found("Not Found"));
    }
    tracing::debug!("Deleted invoice {id}");

    Ok::<_, ApiError>(Json(DeletedResponse::new()))
}
