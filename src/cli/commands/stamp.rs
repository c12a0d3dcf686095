use crate::cli::commands::open_authenticated;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stamp::StampLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

/// Stamp at the current local wall-clock time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stamp { auth, kind, note } = cmd {
        let (pool, identity) = open_authenticated(cfg, auth)?;

        let now = Local::now().naive_local();
        let ev = StampLogic::apply(&pool, &identity, *kind, now, note.clone())?;

        success(format!(
            "{} recorded for {} at {} (log #{})",
            kind.label(),
            identity.principal().name,
            ev.timestamp_str(),
            ev.id
        ));
    }

    Ok(())
}
