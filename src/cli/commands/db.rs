use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    info("Running integrity check…");
    let report: String = pool.conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if report == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {report}"));
    }
    Ok(())
}

/// `db --migrate --info --check --vacuum`, in that order, on one connection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        let applied = run_pending_migrations(&pool.conn)?;
        success(format!("Migration completed ({applied} applied)."));
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        integrity_check(&pool)?;
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
