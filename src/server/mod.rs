mod companies;
pub mod dto;
mod extract;
mod invoices;
pub mod response;
mod router;
pub mod validation;

pub use companies::companies_router;
pub use extract::JsonBody;
pub use invoices::invoices_router;
pub use router::{AppState, create_router};
