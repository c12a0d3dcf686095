use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{stores, users};
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::models::store::{DEFAULT_STORE_ID, Store};
use crate::models::user::User;
use tracing::info;

/// `(code, pin, name, role)` of the demo accounts.
const SEED_USERS: &[(&str, &str, &str, Role)] = &[
    ("admin", "admin", "Headquarters Admin", Role::Headquarters),
    ("manager", "manager", "Store Manager", Role::StoreManager),
    ("9999", "1234", "Test Staff", Role::Staff),
];

/// Demo data for a fresh installation; safe to run repeatedly.
pub struct SeedLogic;

impl SeedLogic {
    pub fn apply(pool: &DbPool) -> AppResult<()> {
        let tx = pool.conn.unchecked_transaction()?;

        stores::upsert_store(
            &tx,
            &Store {
                id: DEFAULT_STORE_ID.to_string(),
                name: "Head Office".to_string(),
                address: String::new(),
            },
        )?;

        for (code, pin, name, role) in SEED_USERS {
            users::upsert_user(
                &tx,
                &User {
                    id: 0,
                    code: code.to_string(),
                    name: name.to_string(),
                    pin: pin.to_string(),
                    home_store_id: DEFAULT_STORE_ID.to_string(),
                    role: *role,
                },
            )?;
        }

        ttlog(&tx, "seed", DEFAULT_STORE_ID, "Default store and demo users created")?;
        tx.commit()?;

        info!(users = SEED_USERS.len(), "seed data applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_twice_keeps_one_copy() {
        let pool = DbPool::open_in_memory().unwrap();
        crate::db::initialize::init_db(&pool.conn).unwrap();

        SeedLogic::apply(&pool).unwrap();
        SeedLogic::apply(&pool).unwrap();

        assert_eq!(stores::list_stores(&pool.conn).unwrap().len(), 1);
        let all = users::list_users(&pool.conn).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().any(|u| u.code == "manager" && u.role == Role::StoreManager));
    }
}
