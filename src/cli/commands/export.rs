use crate::cli::commands::open_authenticated;
use crate::cli::parser::{Commands, ExportTarget};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::{LogsRequest, SheetRequest};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { auth, target } = cmd {
        let (pool, identity) = open_authenticated(cfg, auth)?;

        match target {
            ExportTarget::Sheet {
                user,
                range,
                file,
                force,
            } => {
                let req = SheetRequest {
                    user_code: user.as_deref(),
                    range: range.as_deref(),
                    file: file.as_deref(),
                    force: *force,
                };
                ExportLogic::export_sheet(&pool, cfg, &identity, &req)?;
            }
            ExportTarget::Logs {
                format,
                file,
                range,
                store_id,
                force,
            } => {
                let req = LogsRequest {
                    format: *format,
                    file,
                    range: range.as_deref(),
                    store_id: store_id.as_deref(),
                    force: *force,
                };
                ExportLogic::export_logs(&pool, &identity, &req)?;
            }
        }
    }

    Ok(())
}
