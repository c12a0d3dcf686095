use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::seed::SeedLogic;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with every pending migration
///  - the demo store and accounts when `--seed` is given
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let seed = matches!(cli.command, Commands::Init { seed: true });

    println!("⚙️  Initializing rTimeclock…");
    cfg.init_all(cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", cfg.database));

    if seed {
        SeedLogic::apply(&pool)?;
        success("Demo store and accounts created (admin/admin, manager/manager, 9999/1234)");
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        if seed {
            "Database initialized with demo data"
        } else {
            "Database initialized"
        },
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rTimeclock initialization completed!");
    Ok(())
}
