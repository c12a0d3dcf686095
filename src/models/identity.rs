//! Authenticated caller, resolved once per invocation and passed by reference
//! to every operation that needs to know who is asking.

use super::role::Role;
use super::user::User;

/// Fields every authenticated user carries regardless of role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub code: String,
    pub name: String,
    /// Store selected at login; stamps are attributed to it.
    pub working_store_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Reads and corrects every store, administers stores and users.
    Headquarters(Principal),
    /// Reads and corrects the logs of its home store.
    StoreManager {
        principal: Principal,
        home_store_id: String,
    },
    /// Reads only its own records.
    Staff(Principal),
}

/// Which attendance rows an identity may list or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreScope {
    AllStores,
    Store(String),
    OwnRecords(i64),
}

impl Identity {
    pub fn from_user(user: &User, working_store_id: &str) -> Self {
        let principal = Principal {
            user_id: user.id,
            code: user.code.clone(),
            name: user.name.clone(),
            working_store_id: working_store_id.to_string(),
        };

        match user.role {
            Role::Headquarters => Identity::Headquarters(principal),
            Role::StoreManager => Identity::StoreManager {
                principal,
                home_store_id: user.home_store_id.clone(),
            },
            Role::Staff => Identity::Staff(principal),
        }
    }

    pub fn principal(&self) -> &Principal {
        match self {
            Identity::Headquarters(p) | Identity::Staff(p) => p,
            Identity::StoreManager { principal, .. } => principal,
        }
    }

    pub fn user_id(&self) -> i64 {
        self.principal().user_id
    }

    pub fn role(&self) -> Role {
        match self {
            Identity::Headquarters(_) => Role::Headquarters,
            Identity::StoreManager { .. } => Role::StoreManager,
            Identity::Staff(_) => Role::Staff,
        }
    }

    pub fn store_scope(&self) -> StoreScope {
        match self {
            Identity::Headquarters(_) => StoreScope::AllStores,
            Identity::StoreManager { home_store_id, .. } => StoreScope::Store(home_store_id.clone()),
            Identity::Staff(p) => StoreScope::OwnRecords(p.user_id),
        }
    }

    /// Only headquarters manages the store and user master data.
    pub fn can_administer(&self) -> bool {
        matches!(self, Identity::Headquarters(_))
    }

    /// Corrections: headquarters anywhere, managers inside their home store.
    pub fn can_correct(&self, event_store_id: &str) -> bool {
        match self {
            Identity::Headquarters(_) => true,
            Identity::StoreManager { home_store_id, .. } => home_store_id == event_store_id,
            Identity::Staff(_) => false,
        }
    }

    /// Whose timesheet may be read.
    pub fn can_view_user(&self, user: &User) -> bool {
        match self {
            Identity::Headquarters(_) => true,
            Identity::StoreManager {
                principal,
                home_store_id,
            } => principal.user_id == user.id || *home_store_id == user.home_store_id,
            Identity::Staff(p) => p.user_id == user.id,
        }
    }
}
