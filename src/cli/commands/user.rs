use crate::cli::commands::open_authenticated;
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::admin::{NewUser, UserAdmin, UserChanges};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User { auth, action } = cmd {
        let (pool, identity) = open_authenticated(cfg, auth)?;

        match action {
            UserAction::Add {
                employee_code,
                name,
                user_pin,
                home,
                role,
            } => {
                let user = UserAdmin::add(
                    &pool,
                    &identity,
                    &NewUser {
                        code: employee_code,
                        name,
                        pin: user_pin,
                        home_store_id: home,
                        role: *role,
                    },
                )?;
                success(format!("{} '{}' created with code {}", user.role.label(), user.name, user.code));
            }
            UserAction::List => {
                let users = UserAdmin::list(&pool, &identity)?;
                if users.is_empty() {
                    info("No users defined.");
                    return Ok(());
                }
                let mut table = Table::new(&["Code", "Name", "Role", "Home store"]);
                for u in users {
                    table.add_row(vec![u.code, u.name, u.role.label().to_string(), u.home_store_id]);
                }
                print!("{}", table.render());
            }
            UserAction::Edit {
                employee_code,
                new_code,
                name,
                user_pin,
                home,
                role,
            } => {
                let changes = UserChanges {
                    code: new_code.as_deref(),
                    name: name.as_deref(),
                    pin: user_pin.as_deref(),
                    home_store_id: home.as_deref(),
                    role: *role,
                };
                let user = UserAdmin::edit(&pool, &identity, employee_code, &changes)?;
                success(format!("User '{}' updated", user.code));
            }
            UserAction::Del { employee_code } => {
                UserAdmin::delete(&pool, &identity, employee_code)?;
                success(format!("User '{employee_code}' deleted"));
            }
        }
    }

    Ok(())
}
