// Copyright (c) 2025 - Cowboy AI, Inc.
//! SQLite company repository
//!
//! Name exclusivity is enforced by a `UNIQUE` column, so a racing writer that
//! slipped past the orchestrator's probe still fails with
//! [`RepositoryError::DuplicateName`]. Each call runs a single statement
//! under the connection lock and commits atomically.

use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use super::{CompanyRepository, RepositoryError, RepositoryResult};
use crate::domain::{Company, CompanyType};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    employees   INTEGER NOT NULL CHECK (employees >= 0),
    registered  INTEGER NOT NULL,
    type        TEXT NOT NULL
);
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, description, employees, registered, type FROM companies";

/// Columns as stored, before conversion into domain types
type CompanyRow = (String, String, Option<String>, i64, bool, String);

/// Company repository backed by a SQLite database
#[derive(Clone)]
pub struct SqliteCompanyRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCompanyRepository {
    /// Open (or create) a database file
    pub fn open<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Opened SQLite company store");
        Ok(Self::from_connection(conn))
    }

    /// Private database that disappears with the repository
    pub fn in_memory() -> RepositoryResult<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create the schema if it does not exist yet
    pub async fn migrate(&self) -> RepositoryResult<()> {
        self.conn.lock().await.execute_batch(SCHEMA)?;
        debug!("Company schema ready");
        Ok(())
    }
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

/// Map a write failure, recognising violations of the unique name column
fn write_error(err: rusqlite::Error, name: &str) -> RepositoryError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, Some(message))
            if failure.code == ErrorCode::ConstraintViolation
                && message.contains("companies.name") =>
        {
            RepositoryError::DuplicateName(name.to_string())
        }
        _ => RepositoryError::from(err),
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CompanyRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn into_company(row: CompanyRow) -> RepositoryResult<Company> {
    let (id, name, description, employees, registered, company_type) = row;

    let id = Uuid::parse_str(&id)
        .map_err(|e| RepositoryError::Storage(format!("corrupt company id {}: {}", id, e)))?;
    let company_type: CompanyType = company_type
        .parse()
        .map_err(|raw| RepositoryError::Storage(format!("corrupt company type: {}", raw)))?;

    Ok(Company {
        id,
        name,
        description,
        employees,
        registered,
        company_type,
    })
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &Company) -> RepositoryResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO companies (id, name, description, employees, registered, type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                company.id.to_string(),
                company.name,
                company.description,
                company.employees,
                company.registered,
                company.company_type.as_str(),
            ],
        )
        .map_err(|e| write_error(e, &company.name))?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Company> {
        let row = {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.to_string()],
                read_row,
            )
            .optional()?
        };

        row.map(into_company)
            .transpose()?
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Company>> {
        let row = {
            let conn = self.conn.lock().await;
            conn.query_row(
                &format!("{} WHERE name = ?1", SELECT_COLUMNS),
                params![name],
                read_row,
            )
            .optional()?
        };

        row.map(into_company).transpose()
    }

    async fn update(&self, company: &Company) -> RepositoryResult<()> {
        let conn = self.conn.lock().await;

        let affected = conn
            .execute(
                "UPDATE companies
                 SET name = ?1, description = ?2, employees = ?3, registered = ?4, type = ?5
                 WHERE id = ?6",
                params![
                    company.name,
                    company.description,
                    company.employees,
                    company.registered,
                    company.company_type.as_str(),
                    company.id.to_string(),
                ],
            )
            .map_err(|e| write_error(e, &company.name))?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(company.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let conn = self.conn.lock().await;

        let affected = conn.execute("DELETE FROM companies WHERE id = ?1", params![id.to_string()])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}
