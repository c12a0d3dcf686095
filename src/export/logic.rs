// src/export/logic.rs

use crate::config::Config;
use crate::core::aggregate::aggregate_for_user;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::repository::AttendanceRepository;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::export::delimited::format_delimited_text;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::format_json;
use crate::export::range::parse_range;
use crate::export::xlsx::{SheetOptions, format_spreadsheet};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::identity::{Identity, StoreScope};
use crate::ui::messages::warning;
use crate::utils::date::resolve_month;
use crate::utils::path::require_absolute;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// `None` or `all` means no date filter.
fn optional_range(range: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match range {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

/// Final output path: an existing directory receives the suggested name,
/// no `--file` means the current directory.
fn resolve_target(file: Option<&str>, suggested: &str) -> AppResult<PathBuf> {
    match file {
        None => Ok(std::env::current_dir()?.join(suggested)),
        Some(f) => {
            let p = require_absolute(f)?;
            if p.is_dir() { Ok(p.join(suggested)) } else { Ok(p) }
        }
    }
}

fn write_output(path: &Path, bytes: &[u8], force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Parameters of `export sheet`.
#[derive(Debug, Clone, Default)]
pub struct SheetRequest<'a> {
    /// Employee whose timesheet is rendered; `None` means the caller.
    pub user_code: Option<&'a str>,
    /// `--range` expression; `None` means the current month.
    pub range: Option<&'a str>,
    pub file: Option<&'a str>,
    pub force: bool,
}

/// Parameters of `export logs`.
#[derive(Debug, Clone)]
pub struct LogsRequest<'a> {
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: Option<&'a str>,
    /// Restrict headquarters dumps to one store.
    pub store_id: Option<&'a str>,
    pub force: bool,
}

/// High-level export flows: authorization, data fetch, rendering, writing.
pub struct ExportLogic;

impl ExportLogic {
    /// Timesheet workbook for one employee.
    pub fn export_sheet(
        pool: &DbPool,
        cfg: &Config,
        identity: &Identity,
        req: &SheetRequest<'_>,
    ) -> AppResult<PathBuf> {
        let (user_id, subject) = match req.user_code {
            None => (identity.user_id(), identity.principal().code.clone()),
            Some(code) => {
                let user = users::load_user_by_code(&pool.conn, code)?
                    .ok_or_else(|| AppError::not_found(format!("User '{code}'")))?;
                if !identity.can_view_user(&user) {
                    return Err(AppError::Unauthorized(format!(
                        "the timesheet of '{code}' is outside your scope"
                    )));
                }
                (user.id, user.code)
            }
        };

        let (start, end) = match req.range {
            Some(r) => parse_range(r)?,
            None => resolve_month(None)?,
        };

        let days = aggregate_for_user(pool, user_id, start, end, cfg.break_minutes)?;

        let opts = SheetOptions {
            lock_editing: cfg.lock_editing,
            password: cfg.sheet_password.as_deref(),
            statuses: &cfg.leave_statuses,
        };
        let (bytes, filename) = format_spreadsheet(&days, &subject, &opts)?;

        let path = resolve_target(req.file, &filename)?;
        write_output(&path, &bytes, req.force)?;

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Timesheet of {subject} for {start}..{end}"),
        );
        info!(subject = %subject, %start, %end, path = %path.display(), "timesheet exported");
        notify_export_success("XLSX", &path);

        Ok(path)
    }

    /// Flat dump of raw stamps in the caller's scope.
    pub fn export_logs(pool: &DbPool, identity: &Identity, req: &LogsRequest<'_>) -> AppResult<Option<PathBuf>> {
        let store = match (identity.store_scope(), req.store_id) {
            (StoreScope::AllStores, s) => s.map(str::to_string),
            (StoreScope::Store(home), None) => Some(home),
            (StoreScope::Store(home), Some(s)) if s == home => Some(home),
            (StoreScope::Store(_), Some(s)) => {
                return Err(AppError::Unauthorized(format!("store '{s}' is outside your scope")));
            }
            (StoreScope::OwnRecords(_), _) => {
                return Err(AppError::Unauthorized("staff accounts cannot export attendance logs".into()));
            }
        };

        let bounds = optional_range(req.range)?;
        let path = require_absolute(req.file)?;

        let rows = pool
            .fetch_for_store(store.as_deref(), bounds.map(|b| b.0), bounds.map(|b| b.1))
            .map_err(|e| AppError::UpstreamFetchFailed(Box::new(e)))?;

        if rows.is_empty() {
            warning("No attendance logs found for the selected range.");
            return Ok(None);
        }

        let bytes = match req.format {
            ExportFormat::Csv => format_delimited_text(&rows)?,
            ExportFormat::Json => format_json(&rows)?,
        };
        write_output(&path, &bytes, req.force)?;

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} attendance logs ({})", rows.len(), req.format.as_str()),
        );
        info!(rows = rows.len(), format = req.format.as_str(), "attendance logs exported");
        notify_export_success(&req.format.as_str().to_uppercase(), &path);

        Ok(Some(path))
    }
}
