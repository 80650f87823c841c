use crate::sql::base::{
    adapter::{DatabaseKind, SqlAdapter},
    error::{ConnectorError, DbError},
    row::DbRow,
};
use async_trait::async_trait;
use model::records::row::RowData;
use mysql_async::{Opts, Pool, Row as MySqlRow, prelude::Queryable};
use tracing::debug;

#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
}

const LIST_TABLES_SQL: &str = "SHOW TABLES";
const SERVER_VERSION_SQL: &str = "SELECT VERSION()";

impl MySqlAdapter {
    fn quote_ident(table: &str) -> String {
        format!("`{}`", table.replace('`', "``"))
    }
}

#[async_trait]
impl SqlAdapter for MySqlAdapter {
    async fn connect(url: &str) -> Result<Self, ConnectorError> {
        // the driver only accepts the mysql:// scheme; mariadb:// is an alias
        let url = match url.strip_prefix("mariadb://") {
            Some(rest) => format!("mysql://{rest}"),
            None => url.to_string(),
        };
        let opts = Opts::from_url(&url).map_err(mysql_async::Error::Url)?;
        Ok(MySqlAdapter {
            pool: Pool::new(opts),
        })
    }

    async fn query_rows(&self, sql: &str) -> Result<Vec<RowData>, DbError> {
        let mut conn = self.pool.get_conn().await?;
        debug!("Executing query: {sql}");
        let rows: Vec<MySqlRow> = conn.query(sql).await?;
        Ok(rows
            .iter()
            .map(|row| DbRow::MySql(row).to_row_data(""))
            .collect())
    }

    async fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let tables: Vec<String> = conn.query(LIST_TABLES_SQL).await?;
        Ok(tables)
    }

    async fn head_rows(&self, table: &str, limit: usize) -> Result<Vec<RowData>, DbError> {
        let sql = format!("SELECT * FROM {} LIMIT {limit}", Self::quote_ident(table));
        let mut conn = self.pool.get_conn().await?;
        debug!("Executing preview query: {sql}");
        let rows: Vec<MySqlRow> = conn.query(sql).await?;
        Ok(rows
            .iter()
            .map(|row| DbRow::MySql(row).to_row_data(table))
            .collect())
    }

    async fn server_version(&self) -> Result<String, DbError> {
        let mut conn = self.pool.get_conn().await?;
        let version: Option<String> = conn.query_first(SERVER_VERSION_SQL).await?;
        version.ok_or_else(|| DbError::Unknown("server returned no version".to_string()))
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::MySql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_escapes_backticks() {
        assert_eq!(MySqlAdapter::quote_ident("users"), "`users`");
        assert_eq!(MySqlAdapter::quote_ident("odd`name"), "`odd``name`");
    }
}
