use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Role {
    #[value(name = "hq", alias = "headquarters")]
    Headquarters,
    #[value(name = "manager", alias = "store-manager")]
    StoreManager,
    #[value(name = "staff")]
    Staff,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Headquarters => "HEADQUARTERS",
            Role::StoreManager => "STORE_MANAGER",
            Role::Staff => "STAFF",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "HEADQUARTERS" => Some(Role::Headquarters),
            "STORE_MANAGER" => Some(Role::StoreManager),
            "STAFF" => Some(Role::Staff),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Headquarters => "Headquarters",
            Role::StoreManager => "Store manager",
            Role::Staff => "Staff",
        }
    }
}
