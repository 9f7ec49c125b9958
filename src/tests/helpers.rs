use crate::config::Config;
use crate::services::db::MongoConnection;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

/**
 * keeps the container alive for as long as the connection is used
 */
pub struct TestMongo {
    pub conn: MongoConnection,
    _container: ContainerAsync<Mongo>,
}

pub async fn start_mongo() -> TestMongo {
    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start mongo container");
    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get mongo port");

    let config = Config {
        mongodb_uri: format!("mongodb://127.0.0.1:{port}"),
        database_name: "crud_test".to_string(),
        connect_timeout: Duration::from_secs(10),
    };
    let conn = MongoConnection::open(&config)
        .await
        .expect("Failed to connect to test mongo");

    TestMongo {
        conn,
        _container: container,
    }
}
