use crate::identifier::Identifier;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A row of the durable compromised-address table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompromisedRecord {
    pub id: Option<i64>,
    pub identifier: Identifier,
    pub breach_date: Option<NaiveDateTime>,
    pub breach_source: Option<String>,
}
