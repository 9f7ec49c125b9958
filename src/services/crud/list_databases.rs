use crate::services::db::MongoConnection;
use anyhow::Result;
use tracing::info;

/**
 * connectivity check, prints every database on the server
 */
pub async fn list_databases(conn: &MongoConnection) -> Result<Vec<String>> {
    let names = conn.list_database_names().await?;
    info!("Server reports {} databases", names.len());
    for name in &names {
        println!("{}", name);
    }
    Ok(names)
}
