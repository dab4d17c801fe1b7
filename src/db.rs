use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::models::{Company, CustomStatus, SelectionEvent};

/// File-backed SQLite store. Schema is created idempotently on open, so a
/// database from any prior run can be reopened as-is.
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    pub fn open() -> Result<Self> {
        let path = Self::default_path()?;
        Self::open_at(&path)
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        // Cascade delete of selection events relies on the FK being enforced.
        conn.pragma_update(None, "foreign_keys", "ON")?;
        let db = Self {
            conn,
            path: path.to_path_buf(),
        };
        db.init()?;
        Ok(db)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn default_path() -> Result<PathBuf> {
        // Use XDG data directory or fallback
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "shukatsu") {
            Ok(proj_dirs.data_dir().join("shukatsu.db"))
        } else {
            Ok(PathBuf::from("shukatsu.db"))
        }
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id TEXT PRIMARY KEY NOT NULL,
                companyName TEXT NOT NULL,
                myPageUrl TEXT,
                entryDate TEXT,
                nextInterviewDate TEXT,
                position TEXT,
                esContent TEXT,
                motivation TEXT,
                notes TEXT,
                status TEXT NOT NULL DEFAULT '未エントリー',
                sortOrder INTEGER NOT NULL DEFAULT 0,
                createdAt TEXT NOT NULL,
                updatedAt TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS custom_statuses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                color TEXT NOT NULL,
                sortOrder INTEGER NOT NULL DEFAULT 0,
                createdAt TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS selection_events (
                id TEXT PRIMARY KEY NOT NULL,
                companyId TEXT NOT NULL,
                eventType TEXT NOT NULL,
                eventDate TEXT,
                result TEXT NOT NULL DEFAULT '結果待ち',
                notes TEXT,
                createdAt TEXT NOT NULL,
                FOREIGN KEY (companyId) REFERENCES companies(id) ON DELETE CASCADE
            );
            "#,
        )?;

        // Databases created before these columns existed need them added.
        // SQLite has no ADD COLUMN IF NOT EXISTS; a duplicate-column error
        // just means the migration already ran.
        let _ = self.conn.execute(
            "ALTER TABLE companies ADD COLUMN sortOrder INTEGER NOT NULL DEFAULT 0",
            [],
        );
        let _ = self
            .conn
            .execute("ALTER TABLE companies ADD COLUMN loginId TEXT", []);

        Ok(())
    }

    // --- Company rows ---

    pub fn insert_company(&self, company: &Company) -> Result<()> {
        self.conn.execute(
            "INSERT INTO companies (
                id, companyName, loginId, myPageUrl, entryDate, nextInterviewDate,
                position, esContent, motivation, notes, status, sortOrder, createdAt, updatedAt
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                company.id,
                company.company_name,
                company.login_id,
                company.my_page_url,
                company.entry_date,
                company.next_interview_date,
                company.position,
                company.es_content,
                company.motivation,
                company.notes,
                company.status,
                company.sort_order,
                company.created_at,
                company.updated_at,
            ],
        )?;
        Ok(())
    }

    pub fn get_company(&self, id: &str) -> Result<Option<Company>> {
        let result = self.conn.query_row(
            &format!("{COMPANY_SELECT} WHERE id = ?1"),
            [id],
            Self::row_to_company,
        );
        match result {
            Ok(company) => Ok(Some(company)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Full-table scan with a caller-chosen ORDER BY clause (a constant,
    /// never user input).
    pub fn all_companies(&self, order_by: &str) -> Result<Vec<Company>> {
        let sql = format!("{COMPANY_SELECT} ORDER BY {order_by}");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::row_to_company)?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to list companies")
    }

    pub fn companies_by_status(&self, status: &str) -> Result<Vec<Company>> {
        let sql = format!("{COMPANY_SELECT} WHERE status = ?1 ORDER BY updatedAt DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([status], Self::row_to_company)?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to list companies by status")
    }

    pub fn count_companies(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn max_company_sort_order(&self) -> Result<Option<i64>> {
        let max: Option<i64> =
            self.conn
                .query_row("SELECT MAX(sortOrder) FROM companies", [], |row| row.get(0))?;
        Ok(max)
    }

    /// Rewrites every mutable column; `id`, `sortOrder` and `createdAt` are
    /// never touched here.
    pub fn update_company(&self, company: &Company) -> Result<()> {
        self.conn.execute(
            "UPDATE companies SET
                companyName = ?1,
                loginId = ?2,
                myPageUrl = ?3,
                entryDate = ?4,
                nextInterviewDate = ?5,
                position = ?6,
                esContent = ?7,
                motivation = ?8,
                notes = ?9,
                status = ?10,
                updatedAt = ?11
            WHERE id = ?12",
            params![
                company.company_name,
                company.login_id,
                company.my_page_url,
                company.entry_date,
                company.next_interview_date,
                company.position,
                company.es_content,
                company.motivation,
                company.notes,
                company.status,
                company.updated_at,
                company.id,
            ],
        )?;
        Ok(())
    }

    pub fn set_company_sort_order(&self, id: &str, sort_order: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE companies SET sortOrder = ?1 WHERE id = ?2",
            params![sort_order, id],
        )?;
        Ok(())
    }

    pub fn delete_company(&self, id: &str) -> Result<bool> {
        let changes = self
            .conn
            .execute("DELETE FROM companies WHERE id = ?1", [id])?;
        Ok(changes > 0)
    }

    fn row_to_company(row: &rusqlite::Row) -> rusqlite::Result<Company> {
        Ok(Company {
            id: row.get(0)?,
            company_name: row.get(1)?,
            login_id: row.get(2)?,
            my_page_url: row.get(3)?,
            entry_date: row.get(4)?,
            next_interview_date: row.get(5)?,
            position: row.get(6)?,
            es_content: row.get(7)?,
            motivation: row.get(8)?,
            notes: row.get(9)?,
            status: row.get(10)?,
            sort_order: row.get(11)?,
            created_at: row.get(12)?,
            updated_at: row.get(13)?,
        })
    }

    // --- Custom status rows ---

    /// Insert a custom status; the UNIQUE constraint on `name` surfaces as a
    /// raw rusqlite constraint error, interpreted one level up.
    pub fn insert_custom_status(
        &self,
        name: &str,
        color: &str,
        sort_order: i64,
        created_at: &str,
    ) -> rusqlite::Result<i64> {
        self.conn.execute(
            "INSERT INTO custom_statuses (name, color, sortOrder, createdAt)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, color, sort_order, created_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn all_custom_statuses(&self) -> Result<Vec<CustomStatus>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, color, sortOrder, createdAt
             FROM custom_statuses ORDER BY sortOrder ASC",
        )?;
        let rows = stmt.query_map([], Self::row_to_custom_status)?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to list custom statuses")
    }

    pub fn max_custom_status_sort_order(&self) -> Result<Option<i64>> {
        let max: Option<i64> = self.conn.query_row(
            "SELECT MAX(sortOrder) FROM custom_statuses",
            [],
            |row| row.get(0),
        )?;
        Ok(max)
    }

    pub fn delete_custom_status(&self, id: i64) -> Result<bool> {
        let changes = self
            .conn
            .execute("DELETE FROM custom_statuses WHERE id = ?1", [id])?;
        Ok(changes > 0)
    }

    fn row_to_custom_status(row: &rusqlite::Row) -> rusqlite::Result<CustomStatus> {
        Ok(CustomStatus {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
            sort_order: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    // --- Selection event rows ---

    pub fn insert_event(&self, event: &SelectionEvent) -> Result<()> {
        self.conn.execute(
            "INSERT INTO selection_events (id, companyId, eventType, eventDate, result, notes, createdAt)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                event.id,
                event.company_id,
                event.event_type,
                event.event_date,
                event.result,
                event.notes,
                event.created_at,
            ],
        )?;
        Ok(())
    }

    pub fn get_event(&self, id: &str) -> Result<Option<SelectionEvent>> {
        let result = self.conn.query_row(
            &format!("{EVENT_SELECT} WHERE id = ?1"),
            [id],
            Self::row_to_event,
        );
        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Most recent first; a NULL eventDate sorts after every dated row
    /// (NULL is smallest under SQLite ordering, so DESC puts it last).
    pub fn events_by_company(&self, company_id: &str) -> Result<Vec<SelectionEvent>> {
        let sql = format!(
            "{EVENT_SELECT} WHERE companyId = ?1 ORDER BY eventDate DESC, createdAt DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([company_id], Self::row_to_event)?;
        rows.collect::<Result<Vec<_>, _>>()
            .context("Failed to list selection events")
    }

    pub fn update_event(&self, event: &SelectionEvent) -> Result<()> {
        self.conn.execute(
            "UPDATE selection_events SET eventType = ?1, eventDate = ?2, result = ?3, notes = ?4
             WHERE id = ?5",
            params![
                event.event_type,
                event.event_date,
                event.result,
                event.notes,
                event.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_event(&self, id: &str) -> Result<bool> {
        let changes = self
            .conn
            .execute("DELETE FROM selection_events WHERE id = ?1", [id])?;
        Ok(changes > 0)
    }

    fn row_to_event(row: &rusqlite::Row) -> rusqlite::Result<SelectionEvent> {
        Ok(SelectionEvent {
            id: row.get(0)?,
            company_id: row.get(1)?,
            event_type: row.get(2)?,
            event_date: row.get(3)?,
            result: row.get(4)?,
            notes: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

const COMPANY_SELECT: &str = "SELECT id, companyName, loginId, myPageUrl, entryDate, nextInterviewDate,
        position, esContent, motivation, notes, status, sortOrder, createdAt, updatedAt
 FROM companies";

const EVENT_SELECT: &str =
    "SELECT id, companyId, eventType, eventDate, result, notes, createdAt FROM selection_events";
