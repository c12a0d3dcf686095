use crate::db::pool::DbPool;
use crate::db::{stores, users};
use crate::errors::{AppError, AppResult};
use crate::models::identity::Identity;
use tracing::{debug, warn};

/// Resolves `code + pin + working store` into an [`Identity`].
pub struct AuthLogic;

impl AuthLogic {
    /// `store` defaults to the user's home store. An unknown code and a
    /// wrong PIN fail the same way.
    pub fn login(pool: &DbPool, code: &str, pin: &str, store: Option<&str>) -> AppResult<Identity> {
        let user = match users::load_user_by_code(&pool.conn, code)? {
            Some(u) if u.pin_matches(pin) => u,
            _ => {
                warn!(code, "authentication failed");
                return Err(AppError::AuthenticationFailed);
            }
        };

        let store_id = store.unwrap_or(&user.home_store_id);
        if stores::load_store(&pool.conn, store_id)?.is_none() {
            return Err(AppError::not_found(format!("Store '{store_id}'")));
        }

        let identity = Identity::from_user(&user, store_id);
        debug!(code, role = identity.role().label(), store = store_id, "authenticated");
        Ok(identity)
    }
}
