use serde::Serialize;

/// A physical shop where staff stamp in and out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Seeded store used by `init --seed`.
pub const DEFAULT_STORE_ID: &str = "default-store";
