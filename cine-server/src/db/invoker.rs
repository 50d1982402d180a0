//! Stored-procedure invocation
//!
//! All database access goes through this module. Each call checks one
//! connection out of the pool, runs inside a single transaction and
//! commits on success; dropping the transaction on any error path
//! rolls back and returns the connection to the pool.
//!
//! MySQL returns OUT parameters through session variables, so the
//! follow-up `SELECT` that reads them must run on the same connection
//! as the `CALL`. Callers never see that mechanism: they receive the
//! ordered OUT values as text.
//!
//! When a procedure produces more than one result set only the first
//! is returned. No current procedure returns more than one; if one is
//! ever extended to, this is a data-loss point to revisit.

use chrono::NaiveDate;
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, Row};

use crate::utils::{AppError, AppResult};

/// Positional input parameter for a procedure, function or query
#[derive(Debug, Clone)]
pub enum ProcParam {
    Int(i64),
    Text(String),
    Date(NaiveDate),
}

impl ProcParam {
    fn bind<'q>(&self, query: Query<'q, MySql, MySqlArguments>) -> Query<'q, MySql, MySqlArguments> {
        match self {
            Self::Int(v) => query.bind(*v),
            Self::Text(v) => query.bind(v.clone()),
            Self::Date(v) => query.bind(*v),
        }
    }

    fn bind_as<'q, T>(
        &self,
        query: QueryAs<'q, MySql, T, MySqlArguments>,
    ) -> QueryAs<'q, MySql, T, MySqlArguments> {
        match self {
            Self::Int(v) => query.bind(*v),
            Self::Text(v) => query.bind(v.clone()),
            Self::Date(v) => query.bind(*v),
        }
    }
}

/// Build `CALL name(?, ?, @out…)` with positional placeholders for the
/// inputs followed by the session variables for the OUT slots.
fn call_sql(name: &str, in_count: usize, out_vars: &[String]) -> String {
    let mut slots: Vec<String> = vec!["?".to_string(); in_count];
    slots.extend(out_vars.iter().cloned());
    format!("CALL {name}({})", slots.join(", "))
}

/// Session variable names for the OUT slots of a procedure call.
///
/// Indexed after the inputs, matching the positional parameter order
/// of the procedure signature.
fn out_var_names(name: &str, in_count: usize, out_count: usize) -> Vec<String> {
    (in_count..in_count + out_count)
        .map(|i| format!("@_{name}_{i}"))
        .collect()
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    AppError::database(format!("Failed to execute {context}: {e}"))
}

/// Invoke a procedure with no OUT parameters and decode the rows of
/// its first result set.
pub async fn call_procedure<T>(
    pool: &MySqlPool,
    name: &str,
    params: &[ProcParam],
) -> AppResult<Vec<T>>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = call_sql(name, params.len(), &[]);

    let mut tx = pool.begin().await.map_err(|e| db_error(name, e))?;

    let mut query = sqlx::query_as::<MySql, T>(&sql);
    for param in params {
        query = param.bind_as(query);
    }
    let rows = query
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| db_error(name, e))?;

    tx.commit().await.map_err(|e| db_error(name, e))?;
    Ok(rows)
}

/// Invoke a procedure that returns values through OUT parameters.
///
/// Returns the rows of the first result set (often empty) and the OUT
/// values in declaration order, rendered as text. A failed or empty
/// read of the session variables yields `out_count` `None`s rather
/// than an error; absence of a value is a state the callers must
/// already handle.
pub async fn call_procedure_with_out(
    pool: &MySqlPool,
    name: &str,
    in_params: &[ProcParam],
    out_count: usize,
) -> AppResult<(Vec<MySqlRow>, Vec<Option<String>>)> {
    let out_vars = out_var_names(name, in_params.len(), out_count);
    let sql = call_sql(name, in_params.len(), &out_vars);

    let mut tx = pool.begin().await.map_err(|e| db_error(name, e))?;

    let mut query = sqlx::query(&sql);
    for param in in_params {
        query = param.bind(query);
    }
    let rows = query
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| db_error(name, e))?;

    let out_values = if out_count > 0 {
        // CAST AS CHAR gives a uniform text rendering; repositories
        // parse numeric OUT values from it
        let casts: Vec<String> = out_vars
            .iter()
            .map(|var| format!("CAST({var} AS CHAR)"))
            .collect();
        let select_sql = format!("SELECT {}", casts.join(", "));

        match sqlx::query(&select_sql).fetch_optional(tx.as_mut()).await {
            Ok(Some(row)) => (0..out_count)
                .map(|i| row.try_get::<Option<String>, _>(i).ok().flatten())
                .collect(),
            Ok(None) | Err(_) => vec![None; out_count],
        }
    } else {
        Vec::new()
    };

    tx.commit().await.map_err(|e| db_error(name, e))?;
    Ok((rows, out_values))
}

/// Invoke a scalar database function via `SELECT name(…)`.
pub async fn call_function(
    pool: &MySqlPool,
    name: &str,
    params: &[ProcParam],
) -> AppResult<Option<String>> {
    let placeholders = vec!["?"; params.len()].join(", ");
    let sql = format!("SELECT CAST({name}({placeholders}) AS CHAR) AS result");

    let mut tx = pool.begin().await.map_err(|e| db_error(name, e))?;

    let mut query = sqlx::query(&sql);
    for param in params {
        query = param.bind(query);
    }
    let row = query
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| db_error(name, e))?;

    tx.commit().await.map_err(|e| db_error(name, e))?;
    Ok(row.and_then(|r| r.try_get::<Option<String>, _>("result").ok().flatten()))
}

/// Run a parameterized query and decode every row.
pub async fn fetch_all<T>(pool: &MySqlPool, sql: &str, params: &[ProcParam]) -> AppResult<Vec<T>>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let mut tx = pool.begin().await.map_err(|e| db_error(sql, e))?;

    let mut query = sqlx::query_as::<MySql, T>(sql);
    for param in params {
        query = param.bind_as(query);
    }
    let rows = query
        .fetch_all(tx.as_mut())
        .await
        .map_err(|e| db_error(sql, e))?;

    tx.commit().await.map_err(|e| db_error(sql, e))?;
    Ok(rows)
}

/// Run a parameterized query and decode at most one row.
pub async fn fetch_optional<T>(
    pool: &MySqlPool,
    sql: &str,
    params: &[ProcParam],
) -> AppResult<Option<T>>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let mut tx = pool.begin().await.map_err(|e| db_error(sql, e))?;

    let mut query = sqlx::query_as::<MySql, T>(sql);
    for param in params {
        query = param.bind_as(query);
    }
    let row = query
        .fetch_optional(tx.as_mut())
        .await
        .map_err(|e| db_error(sql, e))?;

    tx.commit().await.map_err(|e| db_error(sql, e))?;
    Ok(row)
}

/// Run a parameterized statement without fetching rows.
pub async fn execute(pool: &MySqlPool, sql: &str, params: &[ProcParam]) -> AppResult<u64> {
    let mut tx = pool.begin().await.map_err(|e| db_error(sql, e))?;

    let mut query = sqlx::query(sql);
    for param in params {
        query = param.bind(query);
    }
    let result = query
        .execute(tx.as_mut())
        .await
        .map_err(|e| db_error(sql, e))?;

    tx.commit().await.map_err(|e| db_error(sql, e))?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_sql_inputs_only() {
        assert_eq!(
            call_sql("SP_ReservasPorDNI", 1, &[]),
            "CALL SP_ReservasPorDNI(?)"
        );
        assert_eq!(call_sql("SP_Sin_Parametros", 0, &[]), "CALL SP_Sin_Parametros()");
    }

    #[test]
    fn test_call_sql_with_out_slots() {
        let out_vars = out_var_names("SP_DeterminarPrecioEntrada", 1, 2);
        assert_eq!(
            out_vars,
            vec![
                "@_SP_DeterminarPrecioEntrada_1".to_string(),
                "@_SP_DeterminarPrecioEntrada_2".to_string(),
            ]
        );
        assert_eq!(
            call_sql("SP_DeterminarPrecioEntrada", 1, &out_vars),
            "CALL SP_DeterminarPrecioEntrada(?, @_SP_DeterminarPrecioEntrada_1, @_SP_DeterminarPrecioEntrada_2)"
        );
    }

    #[test]
    fn test_out_var_names_follow_input_positions() {
        let vars = out_var_names("SP_ReservarButacaConValidacionDNI", 3, 1);
        assert_eq!(vars, vec!["@_SP_ReservarButacaConValidacionDNI_3".to_string()]);
    }
}
