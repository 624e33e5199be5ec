use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Projection returned by the company listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// A company together with the ids of the invoices that reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyWithInvoices {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

/// Projection returned by the invoice listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: i64,
    pub comp_code: String,
}

/// An invoice with its owning company nested in place of `comp_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceWithCompany {
    pub id: i64,
    #[serde(serialize_with = "serialize_amount")]
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub company: Company,
}

impl InvoiceWithCompany {
    #[must_use]
    pub fn new(invoice: Invoice, company: Company) -> Self {
        Self {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

// Largest magnitude below which every integral f64 is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole amounts as JSON integers (`200`, not `200.0`).
pub fn serialize_amount<S: Serializer>(amt: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amt.fract() == 0.0 && amt.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amt as i64)
    } else {
        serializer.serialize_f64(*amt)
    }
}
