use serde::{Deserialize, Serialize};

use crate::types::{
    Company, CompanySummary, CompanyWithInvoices, Invoice, InvoiceSummary, InvoiceWithCompany,
    serialize_amount,
};

// Request bodies

#[derive(Debug, Default, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCompanyRequest {
    pub fn fields(self) -> Option<Company> {
        Some(Company {
            code: self.code?,
            name: self.name?,
            description: self.description?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateCompanyRequest {
    pub fn fields(self) -> Option<(String, String)> {
        Some((self.name?, self.description?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateInvoiceRequest {
    #[serde(default)]
    pub comp_code: Option<String>,
    #[serde(default)]
    pub amt: Option<f64>,
}

impl CreateInvoiceRequest {
    pub fn fields(self) -> Option<(String, f64)> {
        Some((self.comp_code?, self.amt?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(default)]
    pub amt: Option<f64>,
}

// Response envelopes

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyWithInvoices,
}

#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceWithCompany,
}

#[derive(Debug, Serialize)]
pub struct CreatedInvoice {
    pub comp_code: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amt: f64,
}

/// Body of `POST /invoices`; the invoice sits under the `company` key.
#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
    pub company: CreatedInvoice,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    #[must_use]
    pub fn new() -> Self {
        Self { status: "deleted" }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
