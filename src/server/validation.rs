use std::num::{IntErrorKind, ParseIntError};

use crate::server::response::ApiError;

pub const MISSING_FIELDS: &str = "Request must include all required fields";

/// Unwraps the set of required fields pulled from a request body.
/// Any absent field (or JSON `null`) yields a bad request.
pub fn require_fields<T>(fields: Option<T>) -> Result<T, ApiError> {
    fields.ok_or_else(|| ApiError::bad_request(MISSING_FIELDS))
}

/// Digit strings that overflow `i64` are reported as not found.
pub fn parse_invoice_id(raw: &str) -> Result<i64, ApiError> {
    let raw = raw.trim();
    raw.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ApiError::not_found(format!("Can't find invoice: {raw}"))
        }
        _ => ApiError::bad_request("Invoice id must be an integer"),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::server::dto::{CreateCompanyRequest, UpdateCompanyRequest};

    #[test]
    fn test_empty_strings_count_as_present() {
        let req: CreateCompanyRequest =
            serde_json::from_str(r#"{"code": "", "name": "", "description": ""}"#).unwrap();
        let company = require_fields(req.fields()).unwrap();
        assert_eq!(company.code, "");
    }

    #[test]
    fn test_missing_field_is_bad_request() {
        let req: UpdateCompanyRequest = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        let err = require_fields(req.fields()).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, MISSING_FIELDS);
    }

    #[test]
    fn test_null_field_is_absent() {
        let req: CreateCompanyRequest =
            serde_json::from_str(r#"{"code": "x", "name": null, "description": "d"}"#).unwrap();
        assert!(require_fields(req.fields()).is_err());
    }

    #[test]
    fn test_parse_invoice_id() {
        assert_eq!(parse_invoice_id("42").unwrap(), 42);
        assert_eq!(
            parse_invoice_id("abc").unwrap_err().status,
            StatusCode::BAD_REQUEST
        );
        assert!(parse_invoice_id("4.5").is_err());
    }

    #[test]
    fn test_overflowing_invoice_id_is_not_found() {
        let err = parse_invoice_id("99999999999999999999").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Can't find invoice: 99999999999999999999");

        let err = parse_invoice_id("-99999999999999999999").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
