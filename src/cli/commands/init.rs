use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteAdapter;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let path_str = db_path.to_string_lossy().to_string();

    // Creates the file and brings the schema up to date.
    SqliteAdapter::open(&path_str)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Database:    {:?}", db_path));

    Ok(())
}
