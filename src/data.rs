use rocket::fairing::AdHoc;
use rusqlite::{params, Connection};
use tracing::{error, info};

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::config::TodoConfig;
use crate::internal_error::InternalResult;

pub type DBConnection = Arc<Mutex<Connection>>;

pub fn open_db_connection(path: &Path) -> InternalResult<DBConnection> {
    let connection = Connection::open(path)?;
    init_schema(&connection)?;

    Ok(Arc::new(Mutex::new(connection)))
}

pub fn init_schema(connection: &Connection) -> InternalResult<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS todo (
            id INTEGER PRIMARY KEY,
            todo TEXT,
            category TEXT,
            priority TEXT,
            status TEXT,
            due_date TEXT
        )",
        params![],
    )?;

    Ok(())
}

/// Opens the store at ignition and hands it to Rocket as managed state.
/// A store that cannot be opened aborts the launch.
pub fn stage() -> AdHoc {
    AdHoc::try_on_ignite("SQLite Todo Store", |rocket| async move {
        let config = match TodoConfig::from_figment(rocket.figment()) {
            Ok(config) => config,
            Err(e) => {
                error!("DB Error: {}", e);
                return Err(rocket);
            }
        };

        match open_db_connection(&config.database) {
            Ok(connection) => {
                info!(path = %config.database.display(), "opened todo store");
                Ok(rocket.manage(connection))
            }
            Err(e) => {
                error!(path = %config.database.display(), "DB Error: {}", e);
                Err(rocket)
            }
        }
    })
}

/// Lets SQLite persist its query planner statistics before the process
/// exits. The connection closes when the last handle is dropped.
pub fn close_db_connection(db_connection: &DBConnection) -> InternalResult<()> {
    let connection = db_connection.lock()?;
    connection.execute_batch("PRAGMA optimize;")?;

    Ok(())
}

pub fn shutdown() -> AdHoc {
    AdHoc::on_shutdown("Close Todo Store", |rocket| {
        Box::pin(async move {
            if let Some(db_connection) = rocket.state::<DBConnection>() {
                match close_db_connection(db_connection) {
                    Ok(()) => info!("todo store optimized for shutdown"),
                    Err(e) => error!("failed to optimize todo store on shutdown: {}", e),
                }
            }
        })
    })
}
