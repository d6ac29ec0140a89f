//! Loading a catalog from a JSON file.
//!
//! Format: a JSON array of dish records
//!
//! ```json
//! [
//!   {
//!     "name": "Kartoffelsuppe",
//!     "ingredients": [{ "name": "Kartoffeln", "amount_grams": 500 }],
//!     "preparation": "1. Gemüse würfeln. 2. Kochen und pürieren."
//!   }
//! ]
//! ```
//!
//! Records go through the same validation as any other catalog input.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::DishRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

impl Catalog {
    /// Parse and validate a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<DishRecord> = serde_json::from_str(json)?;
        debug!("Parsed {} dish records", records.len());
        Self::from_records(records)
    }

    /// Read, parse and validate a catalog file
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
