use crate::cli::commands::open_authenticated;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { auth, month, recent } = cmd {
        let (pool, identity) = open_authenticated(cfg, auth)?;
        let me = identity.principal();

        if *recent {
            let events = HistoryLogic::recent(&pool, me.user_id, cfg.history_limit)?;
            if events.is_empty() {
                info("No stamps recorded yet.");
                return Ok(());
            }
            header(format!("Latest stamps of {} ({})", me.name, me.code));
            print!("{}", HistoryLogic::render_recent(&events));
            return Ok(());
        }

        let (start, end) = resolve_month(month.as_deref())?;
        let days = HistoryLogic::monthly(&pool, me.user_id, start, end, cfg.break_minutes)?;

        header(format!("Attendance of {} ({}) {}..{}", me.name, me.code, start, end));
        print!("{}", HistoryLogic::render_monthly(&days));
    }

    Ok(())
}
