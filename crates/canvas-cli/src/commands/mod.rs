pub mod init;
pub mod migrate;
pub mod schema;
pub mod sql;
pub mod validate;

pub use init::cmd_init;
pub use migrate::cmd_migrate;
pub use schema::cmd_schema;
pub use sql::cmd_sql;
pub use validate::cmd_validate;
