use crate::cli::commands::open_authenticated;
use crate::cli::parser::{Commands, StoreAction};
use crate::config::Config;
use crate::core::admin::StoreAdmin;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Store { auth, action } = cmd {
        let (pool, identity) = open_authenticated(cfg, auth)?;

        match action {
            StoreAction::Add { id, name, address } => {
                let store = StoreAdmin::add(&pool, &identity, id.as_deref(), name, address)?;
                success(format!("Store '{}' created with id '{}'", store.name, store.id));
            }
            StoreAction::List => {
                let stores = StoreAdmin::list(&pool, &identity)?;
                if stores.is_empty() {
                    info("No stores defined.");
                    return Ok(());
                }
                let mut table = Table::new(&["ID", "Name", "Address"]);
                for s in stores {
                    table.add_row(vec![s.id, s.name, s.address]);
                }
                print!("{}", table.render());
            }
            StoreAction::Edit { id, name, address } => {
                let store = StoreAdmin::edit(&pool, &identity, id, name.as_deref(), address.as_deref())?;
                success(format!("Store '{}' updated", store.id));
            }
            StoreAction::Del { id } => {
                StoreAdmin::delete(&pool, &identity, id)?;
                success(format!("Store '{id}' deleted"));
            }
        }
    }

    Ok(())
}
