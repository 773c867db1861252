//! Parameterized statement execution.
//!
//! Every call prepares its own statement and drops it before returning, on
//! both the success and the failure path. Parameters are always bound to
//! `?` placeholders, never formatted into the SQL text.
//!
//! Outcomes are normalized into three shapes:
//!
//! | call               | found            | nothing matched | execution failed        |
//! |--------------------|------------------|-----------------|-------------------------|
//! | [`fetch_one`]      | `Ok(Some(row))`  | `Ok(None)`      | `Err(DataAccessError)`  |
//! | [`fetch_many`]     | `Ok(vec![..])`   | `Ok(vec![])`    | `Err(DataAccessError)`  |
//! | [`execute_mutation`] | `Ok(n)`        | `Ok(0)`         | `Err(DataAccessError)`  |

use rusqlite::{Connection, Params, Row};
use thiserror::Error;

const LABEL_MAX: usize = 60;

/// A statement failed to prepare, bind, execute, or commit.
///
/// Already logged by the time the caller sees it.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("{op} failed: {source}")]
    Sqlite {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl DataAccessError {
    /// The underlying SQLite error.
    pub fn sqlite(&self) -> &rusqlite::Error {
        match self {
            Self::Sqlite { source, .. } => source,
        }
    }
}

/// Run a statement expected to produce at most one row.
///
/// Rows past the first are ignored.
pub fn fetch_one<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Option<T>, DataAccessError>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    let result = (|| -> rusqlite::Result<T> {
        let mut stmt = conn.prepare(sql)?;
        stmt.query_row(params, map)
    })();

    match result {
        Ok(row) => {
            log::debug!("fetch_one: 1 row [{}]", statement_label(sql));
            Ok(Some(row))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            log::debug!("fetch_one: no rows [{}]", statement_label(sql));
            Ok(None)
        }
        Err(e) => Err(failure("fetch_one", sql, e)),
    }
}

/// Run a statement and collect every row, in the order SQLite returns them.
pub fn fetch_many<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Vec<T>, DataAccessError>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let result = (|| -> rusqlite::Result<Vec<T>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, map)?;
        rows.collect::<Result<Vec<_>, _>>()
    })();

    match result {
        Ok(rows) => {
            log::debug!("fetch_many: {} row(s) [{}]", rows.len(), statement_label(sql));
            Ok(rows)
        }
        Err(e) => Err(failure("fetch_many", sql, e)),
    }
}

/// Run an INSERT/UPDATE/DELETE in its own transaction and commit it.
///
/// Returns the number of rows changed; `0` is not an error. On failure the
/// transaction is rolled back when it drops.
pub fn execute_mutation<P>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<usize, DataAccessError>
where
    P: Params,
{
    let result = (|| -> rusqlite::Result<usize> {
        let tx = conn.unchecked_transaction()?;
        let changed = tx.execute(sql, params)?;
        tx.commit()?;
        Ok(changed)
    })();

    match result {
        Ok(changed) => {
            log::debug!(
                "execute_mutation: {} row(s) changed [{}]",
                changed,
                statement_label(sql)
            );
            Ok(changed)
        }
        Err(e) => Err(failure("execute_mutation", sql, e)),
    }
}

fn failure(op: &'static str, sql: &str, source: rusqlite::Error) -> DataAccessError {
    log::error!("{} failed: {} [{}]", op, source, statement_label(sql));
    DataAccessError::Sqlite { op, source }
}

/// Whitespace-collapsed statement text, shortened for log context.
fn statement_label(sql: &str) -> String {
    let flat = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > LABEL_MAX {
        let head: String = flat.chars().take(LABEL_MAX - 3).collect();
        format!("{head}...")
    } else {
        flat
    }
}
