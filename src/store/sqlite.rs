use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::{SCHEMA, SEED};
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database. Mostly useful for tests.
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    Ok(Company {
        code: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

fn invoice_from_row(row: &Row<'_>) -> rusqlite::Result<Invoice> {
    Ok(Invoice {
        id: row.get(0)?,
        comp_code: row.get(1)?,
        amt: row.get(2)?,
        paid: row.get(3)?,
        add_date: parse_datetime(&row.get::<_, String>(4)?),
        paid_date: row.get::<_, Option<String>>(5)?.map(|s| parse_datetime(&s)),
    })
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn seed(&self) -> Result<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let count: i64 = tx.query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(false);
        }

        tx.execute_batch(SEED)?;
        tx.commit()?;
        Ok(true)
    }

    // Company operations

    fn list_companies(&self) -> Result<Vec<CompanySummary>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT code, name FROM companies ORDER BY code")?;

        let rows = stmt.query_map([], |row| {
            Ok(CompanySummary {
                code: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_company(&self, code: &str) -> Result<Option<Company>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT code, name, description FROM companies WHERE code = ?1",
            params![code],
            company_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn list_company_invoice_ids(&self, code: &str) -> Result<Vec<i64>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id FROM invoices WHERE comp_code = ?1 ORDER BY id")?;

        let rows = stmt.query_map(params![code], |row| row.get(0))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_company(&self, company: &Company) -> Result<Company> {
        let conn = self.conn();
        conn.query_row(
            "INSERT INTO companies (code, name, description) VALUES (?1, ?2, ?3)
             RETURNING code, name, description",
            params![company.code, company.name, company.description],
            company_from_row,
        )
        .map_err(Error::from)
    }

    fn update_company(
        &self,
        code: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<Company>> {
        let conn = self.conn();
        conn.query_row(
            "UPDATE companies SET name = ?1, description = ?2 WHERE code = ?3
             RETURNING code, name, description",
            params![name, description, code],
            company_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_company(&self, code: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM companies WHERE code = ?1", params![code])?;
        Ok(rows > 0)
    }

    // Invoice operations

    fn list_invoices(&self) -> Result<Vec<InvoiceSummary>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, comp_code FROM invoices ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(InvoiceSummary {
                id: row.get(0)?,
                comp_code: row.get(1)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_invoice(&self, id: i64) -> Result<Option<Invoice>> {
        let conn = self.conn();
        conn.query_row(
            &format!("SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?1"),
            params![id],
            invoice_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_invoice(&self, comp_code: &str, amt: f64) -> Result<Option<Invoice>> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let company_exists = tx
            .query_row(
                "SELECT 1 FROM companies WHERE code = ?1",
                params![comp_code],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        if !company_exists {
            return Ok(None);
        }

        let inserted = tx.query_row(
            &format!(
                "INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date)
                 VALUES (?1, ?2, 0, ?3, NULL)
                 RETURNING {INVOICE_COLUMNS}"
            ),
            params![comp_code, amt, format_datetime(&Utc::now())],
            invoice_from_row,
        );

        let invoice = match inserted {
            Ok(invoice) => invoice,
            Err(e) if is_foreign_key_violation(&e) => return Ok(None),
            Err(e) => return Err(Error::from(e)),
        };

        tx.commit()?;
        Ok(Some(invoice))
    }

    fn update_invoice_amount(&self, id: i64, amt: f64) -> Result<Option<Invoice>> {
        let conn = self.conn();
        conn.query_row(
            &format!("UPDATE invoices SET amt = ?1 WHERE id = ?2 RETURNING {INVOICE_COLUMNS}"),
            params![amt, id],
            invoice_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn delete_invoice(&self, id: i64) -> Result<bool> {
        let conn = self.conn();
        let deleted: Option<i64> = conn
            .query_row(
                "DELETE FROM invoices WHERE id = ?1 RETURNING id",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(deleted.is_some())
    }
}
