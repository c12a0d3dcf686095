//! Store and user master data, reserved to headquarters.

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::{stores, users};
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use crate::models::role::Role;
use crate::models::store::Store;
use crate::models::user::User;
use tracing::info;

fn require_headquarters(identity: &Identity) -> AppResult<()> {
    if identity.can_administer() {
        Ok(())
    } else {
        Err(AppError::Unauthorized(format!(
            "{} accounts cannot manage stores or users",
            identity.role().label()
        )))
    }
}

/// Lowercase ASCII slug used when a store is added without an explicit id.
pub fn slugify(name: &str) -> String {
    let mut out = String::new();
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

pub struct StoreAdmin;

impl StoreAdmin {
    pub fn add(pool: &DbPool, identity: &Identity, id: Option<&str>, name: &str, address: &str) -> AppResult<Store> {
        require_headquarters(identity)?;

        let id = match id {
            Some(id) => id.to_string(),
            None => slugify(name),
        };
        if id.is_empty() {
            return Err(AppError::Other(format!("cannot derive a store id from '{name}'; pass --id")));
        }

        let store = Store {
            id,
            name: name.to_string(),
            address: address.to_string(),
        };
        stores::insert_store(&pool.conn, &store)?;

        ttlog_soft(&pool.conn, "store_add", &store.id, &format!("Store '{}' created", store.name));
        info!(store = %store.id, "store created");
        Ok(store)
    }

    pub fn list(pool: &DbPool, identity: &Identity) -> AppResult<Vec<Store>> {
        require_headquarters(identity)?;
        stores::list_stores(&pool.conn)
    }

    pub fn edit(
        pool: &DbPool,
        identity: &Identity,
        id: &str,
        name: Option<&str>,
        address: Option<&str>,
    ) -> AppResult<Store> {
        require_headquarters(identity)?;

        let mut store = stores::load_store(&pool.conn, id)?.ok_or_else(|| AppError::not_found(format!("Store '{id}'")))?;
        if let Some(n) = name {
            store.name = n.to_string();
        }
        if let Some(a) = address {
            store.address = a.to_string();
        }
        stores::update_store(&pool.conn, &store)?;

        ttlog_soft(&pool.conn, "store_edit", id, &format!("Store '{}' updated", store.name));
        Ok(store)
    }

    pub fn delete(pool: &DbPool, identity: &Identity, id: &str) -> AppResult<()> {
        require_headquarters(identity)?;
        stores::delete_store(&pool.conn, id)?;
        ttlog_soft(&pool.conn, "store_del", id, "Store deleted");
        info!(store = id, "store deleted");
        Ok(())
    }
}

/// Fields of `user add`.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub pin: &'a str,
    pub home_store_id: &'a str,
    pub role: Role,
}

/// Optional fields of `user edit`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges<'a> {
    pub code: Option<&'a str>,
    pub name: Option<&'a str>,
    pub pin: Option<&'a str>,
    pub home_store_id: Option<&'a str>,
    pub role: Option<Role>,
}

pub struct UserAdmin;

impl UserAdmin {
    pub fn add(pool: &DbPool, identity: &Identity, new: &NewUser<'_>) -> AppResult<User> {
        require_headquarters(identity)?;

        if new.code.trim().is_empty() || new.pin.is_empty() {
            return Err(AppError::Other("employee code and PIN must not be empty".into()));
        }

        let mut user = User {
            id: 0,
            code: new.code.trim().to_string(),
            name: new.name.to_string(),
            pin: new.pin.to_string(),
            home_store_id: new.home_store_id.to_string(),
            role: new.role,
        };
        user.id = users::insert_user(&pool.conn, &user)?;

        ttlog_soft(
            &pool.conn,
            "user_add",
            &user.code,
            &format!("{} '{}' created in {}", user.role.label(), user.name, user.home_store_id),
        );
        info!(code = %user.code, role = user.role.to_db_str(), "user created");
        Ok(user)
    }

    pub fn list(pool: &DbPool, identity: &Identity) -> AppResult<Vec<User>> {
        require_headquarters(identity)?;
        users::list_users(&pool.conn)
    }

    pub fn edit(pool: &DbPool, identity: &Identity, code: &str, changes: &UserChanges<'_>) -> AppResult<User> {
        require_headquarters(identity)?;

        let mut user =
            users::load_user_by_code(&pool.conn, code)?.ok_or_else(|| AppError::not_found(format!("User '{code}'")))?;

        if let Some(c) = changes.code {
            user.code = c.trim().to_string();
        }
        if let Some(n) = changes.name {
            user.name = n.to_string();
        }
        if let Some(p) = changes.pin {
            user.pin = p.to_string();
        }
        if let Some(s) = changes.home_store_id {
            user.home_store_id = s.to_string();
        }
        if let Some(r) = changes.role {
            user.role = r;
        }
        users::update_user(&pool.conn, &user)?;

        ttlog_soft(&pool.conn, "user_edit", code, &format!("User '{}' updated", user.code));
        Ok(user)
    }

    pub fn delete(pool: &DbPool, identity: &Identity, code: &str) -> AppResult<()> {
        require_headquarters(identity)?;
        if identity.principal().code == code {
            return Err(AppError::Conflict("you cannot delete your own account".into()));
        }
        users::delete_user(&pool.conn, code)?;
        ttlog_soft(&pool.conn, "user_del", code, "User deleted");
        info!(code, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::AuthLogic;
    use crate::core::seed::SeedLogic;

    fn setup() -> (DbPool, Identity) {
        let pool = DbPool::open_in_memory().unwrap();
        crate::db::initialize::init_db(&pool.conn).unwrap();
        SeedLogic::apply(&pool).unwrap();
        let hq = AuthLogic::login(&pool, "admin", "admin", None).unwrap();
        (pool, hq)
    }

    #[test]
    fn slug_from_store_name() {
        assert_eq!(slugify("  Shibuya  East #2 "), "shibuya-east-2");
        assert_eq!(slugify("本店"), "");
    }

    #[test]
    fn only_headquarters_administers() {
        let (pool, _) = setup();
        let manager = AuthLogic::login(&pool, "manager", "manager", None).unwrap();

        assert!(matches!(StoreAdmin::list(&pool, &manager), Err(AppError::Unauthorized(_))));
        assert!(matches!(
            StoreAdmin::add(&pool, &manager, None, "North", ""),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn duplicate_employee_code_is_a_conflict() {
        let (pool, hq) = setup();
        let new = NewUser {
            code: "9999",
            name: "Someone",
            pin: "1",
            home_store_id: "default-store",
            role: Role::Staff,
        };
        assert!(matches!(UserAdmin::add(&pool, &hq, &new), Err(AppError::Conflict(_))));
    }

    #[test]
    fn store_lifecycle() {
        let (pool, hq) = setup();

        let s = StoreAdmin::add(&pool, &hq, None, "North Side", "1 Main St").unwrap();
        assert_eq!(s.id, "north-side");

        let s = StoreAdmin::edit(&pool, &hq, "north-side", Some("North"), None).unwrap();
        assert_eq!(s.name, "North");
        assert_eq!(s.address, "1 Main St");

        StoreAdmin::delete(&pool, &hq, "north-side").unwrap();
        assert!(matches!(
            StoreAdmin::delete(&pool, &hq, "north-side"),
            Err(AppError::NotFound(_))
        ));
        // users still live in the default store
        assert!(matches!(
            StoreAdmin::delete(&pool, &hq, "default-store"),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn user_edit_changes_only_given_fields() {
        let (pool, hq) = setup();
        let changes = UserChanges {
            pin: Some("4321"),
            role: Some(Role::StoreManager),
            ..Default::default()
        };

        let u = UserAdmin::edit(&pool, &hq, "9999", &changes).unwrap();
        assert_eq!(u.pin, "4321");
        assert_eq!(u.role, Role::StoreManager);
        assert_eq!(u.name, "Test Staff");

        assert!(AuthLogic::login(&pool, "9999", "4321", None).is_ok());
        assert!(matches!(
            UserAdmin::delete(&pool, &hq, "admin"),
            Err(AppError::Conflict(_))
        ));
    }
}
