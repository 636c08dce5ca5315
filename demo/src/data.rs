//! Demo dataset: an admin-style user list embedded in the binary.

use egui::Id;
use serde::Deserialize;
use tablegen::RowKey;

const RECORDS_JSON: &str = include_str!("records.json");

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl RowKey for User {
    fn row_id(&self) -> Id {
        Id::new(self.id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to parse embedded records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the embedded user list.
pub fn load_users() -> Result<Vec<User>, DataError> {
    let users: Vec<User> = serde_json::from_str(RECORDS_JSON)?;
    log::debug!("loaded {} demo users", users.len());
    Ok(users)
}
