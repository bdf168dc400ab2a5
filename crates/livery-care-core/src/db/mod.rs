//! SQLite storage for submitted care plans.
//!
//! This is the persistence collaborator behind the editor's submit hook: it
//! stores [`CarePlanPayload`](crate::payload::CarePlanPayload)s and loads them
//! back as [`CarePlan`](crate::models::CarePlan)s for editing.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod phase_queries;
pub mod plan_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
