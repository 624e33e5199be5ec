mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface handed to every request handler.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    /// Loads demo data. Returns false without touching anything if companies already exist.
    fn seed(&self) -> Result<bool>;

    // Company operations
    fn list_companies(&self) -> Result<Vec<CompanySummary>>;
    fn get_company(&self, code: &str) -> Result<Option<Company>>;
    fn list_company_invoice_ids(&self, code: &str) -> Result<Vec<i64>>;
    fn create_company(&self, company: &Company) -> Result<Company>;
    fn update_company(&self, code: &str, name: &str, description: &str)
    -> Result<Option<Company>>;
    fn delete_company(&self, code: &str) -> Result<bool>;

    // Invoice operations
    fn list_invoices(&self) -> Result<Vec<InvoiceSummary>>;
    fn get_invoice(&self, id: i64) -> Result<Option<Invoice>>;
    /// Inserts an invoice for `comp_code`. Returns `None` when the company does not exist.
    fn create_invoice(&self, comp_code: &str, amt: f64) -> Result<Option<Invoice>>;
    fn update_invoice_amount(&self, id: i64, amt: f64) -> Result<Option<Invoice>>;
    fn delete_invoice(&self, id: i64) -> Result<bool>;
}
