use crate::export::ExportFormat;
use crate::models::role::Role;
use crate::models::stamp_kind::StampKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// Employee time clock: stamps, monthly timesheets and store administration on SQLite
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "An employee time clock: stamp in/out per store, review monthly history and export timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Credentials re-checked on every privileged invocation.
#[derive(Args, Debug, Clone)]
pub struct AuthArgs {
    /// Employee code
    #[arg(long = "code", value_name = "CODE")]
    pub code: String,

    /// PIN of the employee
    #[arg(long = "pin", value_name = "PIN")]
    pub pin: String,

    /// Working store id (defaults to the employee's home store)
    #[arg(long = "store", value_name = "STORE_ID")]
    pub store: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Create the default store and the demo accounts
        #[arg(long = "seed")]
        seed: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage stores (headquarters only)
    ///
    /// Credentials go before the action: `store --code C --pin P add --name N`
    Store {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(subcommand)]
        action: StoreAction,
    },

    /// Manage employees (headquarters only)
    ///
    /// Credentials go before the action: `user --code C --pin P list`
    User {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(subcommand)]
        action: UserAction,
    },

    /// Record a clock-in, clock-out or break stamp at the current time
    Stamp {
        #[command(flatten)]
        auth: AuthArgs,

        /// in, out, break-start or break-end
        #[arg(value_enum)]
        kind: StampKind,

        /// Free text attached to the stamp
        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Show your own attendance
    History {
        #[command(flatten)]
        auth: AuthArgs,

        /// Month to show (YYYY-MM, default: current month)
        #[arg(long = "month", value_name = "YYYY-MM", conflicts_with = "recent")]
        month: Option<String>,

        /// Show the latest raw stamps instead of the monthly table
        #[arg(long = "recent")]
        recent: bool,
    },

    /// List the latest stamps visible to your role
    Logs {
        #[command(flatten)]
        auth: AuthArgs,

        /// Filter by employee code (substring)
        #[arg(long = "user", value_name = "CODE")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,

        /// Maximum rows (default: admin_list_limit from the configuration)
        #[arg(long = "limit")]
        limit: Option<usize>,
    },

    /// Correct the timestamp of a stamp (headquarters, store managers)
    Correct {
        #[command(flatten)]
        auth: AuthArgs,

        /// Id of the attendance log, as shown by `logs`
        #[arg(long = "id")]
        id: i64,

        /// New timestamp (YYYY-MM-DD HH:MM)
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: String,
    },

    /// Export attendance data
    Export {
        #[command(flatten)]
        auth: AuthArgs,

        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,

        /// Overwrite an existing file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only the latest N rows
        #[arg(long = "limit")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum StoreAction {
    /// Create a store
    Add {
        /// Store id (default: derived from the name)
        #[arg(long = "id")]
        id: Option<String>,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "address", default_value = "")]
        address: String,
    },

    /// List stores
    List,

    /// Rename a store or change its address
    Edit {
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "address")]
        address: Option<String>,
    },

    /// Delete a store without users or stamps
    Del { id: String },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Create an employee
    Add {
        /// Employee code used to log in
        employee_code: String,

        #[arg(long = "name")]
        name: String,

        #[arg(long = "user-pin", value_name = "PIN")]
        user_pin: String,

        /// Home store id
        #[arg(long = "home", value_name = "STORE_ID")]
        home: String,

        #[arg(long = "role", value_enum, default_value = "staff")]
        role: Role,
    },

    /// List employees
    List,

    /// Change employee fields; omitted options keep their value
    Edit {
        employee_code: String,

        #[arg(long = "new-code")]
        new_code: Option<String>,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "user-pin", value_name = "PIN")]
        user_pin: Option<String>,

        #[arg(long = "home", value_name = "STORE_ID")]
        home: Option<String>,

        #[arg(long = "role", value_enum)]
        role: Option<Role>,
    },

    /// Delete an employee without stamps
    Del { employee_code: String },
}

#[derive(Subcommand)]
pub enum ExportTarget {
    /// Monthly timesheet workbook (xlsx)
    Sheet {
        /// Employee code (default: yourself)
        #[arg(long = "user", value_name = "CODE")]
        user: Option<String>,

        /// Period (YYYY, YYYY-MM, YYYY-MM-DD or start:end); default current month
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Output file or directory (absolute path); default current directory
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Flat dump of raw stamps (csv or json)
    Logs {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period (YYYY, YYYY-MM, YYYY-MM-DD, start:end or `all`)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Only this store (headquarters)
        #[arg(long = "store-id", value_name = "STORE_ID")]
        store_id: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
