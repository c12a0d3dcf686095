pub mod backup;
pub mod config;
pub mod correct;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod logs;
pub mod stamp;
pub mod store;
pub mod user;

use crate::cli::parser::AuthArgs;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::identity::Identity;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Open the database and authenticate the caller for this invocation.
pub(crate) fn open_authenticated(cfg: &Config, auth: &AuthArgs) -> AppResult<(DbPool, Identity)> {
    let pool = open_db(cfg)?;
    let identity = AuthLogic::login(&pool, &auth.code, &auth.pin, auth.store.as_deref())?;
    Ok((pool, identity))
}
