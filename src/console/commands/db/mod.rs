mod reset;
mod seed;

pub use reset::*;
pub use seed::*;

use crate::configuration::Settings;
use sqlx::PgPool;

/// Connects and brings the schema up to date before any command touches it.
async fn connect(settings: &Settings) -> Result<PgPool, Box<dyn std::error::Error>> {
    let db_pool = PgPool::connect(&settings.database.connection_string()).await?;
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    Ok(db_pool)
}
