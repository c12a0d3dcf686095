use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Fixed break deducted from every closed work period.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
    /// Choices offered in the Status column of no-attendance days.
    #[serde(default = "default_leave_statuses")]
    pub leave_statuses: Vec<String>,
    #[serde(default = "default_lock_editing")]
    pub lock_editing: bool,
    #[serde(default)]
    pub sheet_password: Option<String>,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_admin_list_limit")]
    pub admin_list_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_break_minutes() -> i64 {
    60
}
fn default_leave_statuses() -> Vec<String> {
    vec![
        "Scheduled holiday".to_string(),
        "Paid leave".to_string(),
        "Compensatory leave".to_string(),
    ]
}
fn default_lock_editing() -> bool {
    true
}
fn default_history_limit() -> usize {
    20
}
fn default_admin_list_limit() -> usize {
    100
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            break_minutes: default_break_minutes(),
            leave_statuses: default_leave_statuses(),
            lock_editing: default_lock_editing(),
            sheet_password: None,
            history_limit: default_history_limit(),
            admin_list_limit: default_admin_list_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeclock")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.break_minutes < 0 {
            return Err(AppError::Config(format!(
                "break_minutes must not be negative (got {})",
                self.break_minutes
            )));
        }
        if self.leave_statuses.iter().any(|s| s.contains(',')) {
            return Err(AppError::Config(
                "leave_statuses entries must not contain commas".to_string(),
            ));
        }
        Ok(())
    }

    /// Write the configuration file (unless `is_test`) and make sure the
    /// database file exists.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(self)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let db_path = Path::new(&self.database);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_files_load_with_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();

        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.break_minutes, 60);
        assert!(cfg.lock_editing);
        assert_eq!(cfg.leave_statuses.len(), 3);
        assert_eq!(cfg.history_limit, 20);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn custom_values_are_kept() {
        let cfg = Config::from_yaml(
            "break_minutes: 45\nlock_editing: false\nleave_statuses: [Sick, Training]\nsheet_password: s3cret\n",
        )
        .unwrap();

        assert_eq!(cfg.break_minutes, 45);
        assert!(!cfg.lock_editing);
        assert_eq!(cfg.leave_statuses, vec!["Sick", "Training"]);
        assert_eq!(cfg.sheet_password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn negative_break_is_rejected() {
        let err = Config::from_yaml("break_minutes: -5\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
