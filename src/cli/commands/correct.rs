use crate::cli::commands::open_authenticated;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::correct::CorrectionLogic;
use crate::errors::AppResult;
use crate::models::stamp_event::TIMESTAMP_FMT;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Correct { auth, id, at } = cmd {
        let new_ts = parse_timestamp(at)?;
        let (pool, identity) = open_authenticated(cfg, auth)?;

        let ev = CorrectionLogic::apply(&pool, &identity, *id, new_ts)?;
        let was = ev
            .original_timestamp
            .map(|t| t.format(TIMESTAMP_FMT).to_string())
            .unwrap_or_default();

        success(format!(
            "Attendance log #{} corrected to {} (original {})",
            ev.id,
            ev.timestamp_str(),
            was
        ));
    }

    Ok(())
}
