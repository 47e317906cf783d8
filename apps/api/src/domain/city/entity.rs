use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A persisted city row. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub photo: String,
}

impl City {
    pub fn apply_update(&mut self, name: String, photo: String) {
        self.name = name;
        self.photo = photo;
    }
}
