use sqlx::mysql::{MySqlArguments, MySqlPoolOptions, MySqlQueryResult};
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool};

use crate::{BoxFuture, CreateFoodPayload, FoodStore, Result};

const INSERT_FOOD: &str = r#"
    INSERT INTO foods (ITEM_NAME, ITEM_UNIT, COMPANY_ID)
    VALUES (?, ?, ?);
"#;

const UPDATE_FOOD: &str = r#"
    UPDATE foods
    SET ITEM_NAME = ?, ITEM_UNIT = ?, COMPANY_ID = ?
    WHERE ITEM_ID = ?;
"#;

const DELETE_FOOD: &str = r#"
    DELETE FROM foods
    WHERE ITEM_ID = ?;
"#;

/// Opens a pool holding at most `max_connections` connections and checks that the database is
/// reachable.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Runs a single statement on a pooled connection.
///
/// Callers beyond the pool capacity wait here until a connection is released. The connection goes
/// back to the pool when it is dropped, whether the statement succeeded or not.
pub async fn execute(
    pool: &MySqlPool,
    query: Query<'_, MySql, MySqlArguments>,
) -> Result<MySqlQueryResult> {
    let mut conn = pool.acquire().await?;
    let result = query.execute(conn.as_mut()).await?;
    Ok(result)
}

#[derive(Debug, Clone)]
pub struct MySqlFoodStore {
    pool: MySqlPool,
}

impl MySqlFoodStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Waits for checked out connections to come back, then closes every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl FoodStore for MySqlFoodStore {
    #[tracing::instrument(skip_all)]
    fn create<'a>(&'a self, payload: CreateFoodPayload<'a>) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let query = sqlx::query(INSERT_FOOD)
                .bind(payload.name)
                .bind(payload.unit)
                .bind(payload.company_id);

            let result = execute(&self.pool, query).await?;
            tracing::debug!(id = result.last_insert_id(), "food inserted");

            Ok(result.last_insert_id())
        })
    }

    #[tracing::instrument(skip(self, payload))]
    fn update<'a>(
        &'a self,
        id: &'a str,
        payload: CreateFoodPayload<'a>,
    ) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let query = sqlx::query(UPDATE_FOOD)
                .bind(payload.name)
                .bind(payload.unit)
                .bind(payload.company_id)
                .bind(id);

            let result = execute(&self.pool, query).await?;
            Ok(result.rows_affected())
        })
    }

    #[tracing::instrument(skip(self))]
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let query = sqlx::query(DELETE_FOOD).bind(id);

            let result = execute(&self.pool, query).await?;
            Ok(result.rows_affected())
        })
    }
}
