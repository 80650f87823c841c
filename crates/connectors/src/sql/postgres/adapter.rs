use crate::sql::{
    base::{
        adapter::{DatabaseKind, SqlAdapter},
        error::{ConnectorError, DbError},
        row::DbRow,
    },
    postgres::utils::connect_client,
};
use async_trait::async_trait;
use model::records::row::RowData;
use std::sync::Arc;
use tokio_postgres::Client;
use tracing::debug;

#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<Client>,
}

const LIST_TABLES_SQL: &str = include_str!("sql/list_tables.sql");
const SERVER_VERSION_SQL: &str = "SHOW server_version";

impl PgAdapter {
    fn quote_ident(table: &str) -> String {
        format!("\"{}\"", table.replace('"', "\"\""))
    }
}

#[async_trait]
impl SqlAdapter for PgAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let client = connect_client(url).await?;
        Ok(PgAdapter {
            client: Arc::new(client),
        })
    }

    async fn query_rows(&self, sql: &str) -> Result<Vec<RowData>, DbError> {
        debug!("Executing query: {sql}");
        let rows = self.client.query(sql, &[]).await?;
        Ok(rows
            .iter()
            .map(|row| DbRow::Postgres(row).to_row_data(""))
            .collect())
    }

    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let rows = self.client.query(LIST_TABLES_SQL, &[]).await?;
        rows.iter()
            .map(|row| row.try_get::<_, String>(0).map_err(DbError::from))
            .collect()
    }

    async fn head_rows(&self, table: &str, limit: usize) -> Result<Vec<RowData>, DbError> {
        let sql = format!("SELECT * FROM {} LIMIT {limit}", Self::quote_ident(table));
        debug!("Executing preview query: {sql}");
        let rows = self.client.query(&sql, &[]).await?;
        Ok(rows
            .iter()
            .map(|row| DbRow::Postgres(row).to_row_data(table))
            .collect())
    }

    async fn server_version(&self) -> Result<String, DbError> {
        let row = self.client.query_one(SERVER_VERSION_SQL, &[]).await?;
        Ok(row.try_get(0)?)
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_escapes_double_quotes() {
        assert_eq!(PgAdapter::quote_ident("users"), "\"users\"");
        assert_eq!(PgAdapter::quote_ident("odd\"name"), "\"odd\"\"name\"");
    }
}
