use crate::cli::commands::open_authenticated;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listing::ListingLogic;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs {
        auth,
        user,
        range,
        limit,
    } = cmd
    {
        let (pool, identity) = open_authenticated(cfg, auth)?;

        let bounds = range.as_deref().map(parse_range).transpose()?;
        let limit = (*limit).unwrap_or(cfg.admin_list_limit);

        let rows = ListingLogic::latest(&pool, &identity, user.as_deref(), bounds, limit)?;
        if rows.is_empty() {
            info("No attendance logs found.");
            return Ok(());
        }

        print!("{}", ListingLogic::render(&rows));
    }

    Ok(())
}
