pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);

-- No ON DELETE action: a company with invoices cannot be deleted
CREATE TABLE IF NOT EXISTS invoices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    comp_code TEXT NOT NULL REFERENCES companies(code),
    amt REAL NOT NULL,
    paid INTEGER NOT NULL DEFAULT 0,
    add_date TEXT NOT NULL DEFAULT (datetime('now')),
    paid_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_invoices_comp_code ON invoices(comp_code);
"#;

/// Demo rows loaded by `biztime init --seed`.
pub const SEED: &str = r#"
INSERT INTO companies (code, name, description) VALUES
    ('apple', 'Apple Computer', 'Maker of OSX.'),
    ('ibm', 'IBM', 'Big blue.');

INSERT INTO invoices (comp_code, amt, paid, paid_date) VALUES
    ('apple', 100, 0, NULL),
    ('apple', 200, 0, NULL),
    ('apple', 300, 1, '2018-01-01 00:00:00'),
    ('ibm', 400, 0, NULL);
"#;
