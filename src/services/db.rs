pub mod connect_db;

pub use connect_db::MongoConnection;
