use crate::sql::{
    base::{
        adapter::{DatabaseKind, SqlAdapter},
        error::ConnectorError,
    },
    mysql::adapter::MySqlAdapter,
    postgres::adapter::PgAdapter,
};

#[derive(Clone)]
pub enum Adapter {
    MySql(MySqlAdapter),
    Postgres(PgAdapter),
}

impl Adapter {
    /// Open the adapter matching the connection string's scheme.
    pub async fn connect(conn_str: &str) -> Result<Self, ConnectorError> {
        match DatabaseKind::from_url(conn_str)? {
            DatabaseKind::MySql => {
                let adapter = MySqlAdapter::connect(conn_str).await?;
                Ok(Adapter::MySql(adapter))
            }
            DatabaseKind::Postgres => {
                let adapter = PgAdapter::connect(conn_str).await?;
                Ok(Adapter::Postgres(adapter))
            }
        }
    }

    pub fn get_sql(&self) -> &(dyn SqlAdapter + Send + Sync) {
        match self {
            Adapter::MySql(adapter) => adapter,
            Adapter::Postgres(adapter) => adapter,
        }
    }
}
