use super::role::Role;

/// An employee account. `code` is what people type at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub pin: String,
    pub home_store_id: String,
    pub role: Role,
}

impl User {
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }
}
