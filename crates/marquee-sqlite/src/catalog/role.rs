//! Role record statements
//!
//! Table and column names come from [`RoleKind::binding`], never from
//! request input, so formatting them into SQL is safe.

use marquee_core::{RoleAssignment, RoleHolder, RoleKind, RoleUpdate};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{is_foreign_key_violation, SqliteError, SqliteResult};

/// Insert a role record for `person_id` and return its id
pub fn insert_role_record(
    conn: &Connection,
    person_id: i64,
    role: &RoleAssignment,
) -> SqliteResult<i64> {
    let binding = role.kind.binding();
    let sql = format!(
        "INSERT INTO {} (person_id, {}) VALUES (?1, ?2)",
        binding.table,
        binding.detail.column()
    );

    conn.execute(&sql, params![person_id, role.value])
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                SqliteError::ForeignKey(format!("Person {} does not exist", person_id))
            } else {
                SqliteError::Rusqlite(e)
            }
        })?;

    let record_id = conn.last_insert_rowid();
    debug!(kind = %role.kind, person_id, record_id, "Inserted role record");
    Ok(record_id)
}

/// Stored descriptive value of the person's record of `kind`.
///
/// Outer `None` means the person holds no such record; inner `None` means the
/// record exists with a NULL value.
pub fn role_value(
    conn: &Connection,
    kind: RoleKind,
    person_id: i64,
) -> SqliteResult<Option<Option<String>>> {
    let binding = kind.binding();
    let sql = format!(
        "SELECT {} FROM {} WHERE person_id = ?1 ORDER BY {} LIMIT 1",
        binding.detail.column(),
        binding.table,
        binding.id_column
    );

    Ok(conn
        .query_row(&sql, [person_id], |row| row.get::<_, Option<String>>(0))
        .optional()?)
}

/// Rewrite the person's record of `update.kind`.
///
/// Reads first: when no record exists nothing is written and `false` is
/// returned. An omitted value keeps the stored one.
pub fn update_role_record(
    conn: &Connection,
    person_id: i64,
    update: &RoleUpdate,
) -> SqliteResult<bool> {
    let Some(stored) = role_value(conn, update.kind, person_id)? else {
        debug!(kind = %update.kind, person_id, "No role record to update");
        return Ok(false);
    };

    let value = match &update.value {
        Some(value) => Some(value.clone()),
        None => stored,
    };

    let binding = update.kind.binding();
    let sql = format!(
        "UPDATE {} SET {} = ?2 WHERE person_id = ?1",
        binding.table,
        binding.detail.column()
    );
    conn.execute(&sql, params![person_id, value])?;

    debug!(kind = %update.kind, person_id, "Updated role record");
    Ok(true)
}

/// Holders of `kind` joined with their names
pub fn list_role_holders(conn: &Connection, kind: RoleKind) -> SqliteResult<Vec<RoleHolder>> {
    let binding = kind.binding();
    let sql = format!(
        r#"
        SELECT r.{id}, r.person_id, r.{detail}, p.first_name, p.last_name
        FROM {table} r
        JOIN person p ON r.person_id = p.person_id
        ORDER BY r.{id}
        "#,
        id = binding.id_column,
        detail = binding.detail.column(),
        table = binding.table,
    );

    let mut stmt = conn.prepare(&sql)?;
    let holders = stmt
        .query_map([], |row| {
            Ok(RoleHolder {
                kind,
                record_id: row.get(0)?,
                person_id: row.get(1)?,
                detail: row.get(2)?,
                first_name: row.get(3)?,
                last_name: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(holders)
}

pub(crate) fn delete_role_records(
    conn: &Connection,
    kind: RoleKind,
    person_id: i64,
) -> SqliteResult<usize> {
    let sql = format!("DELETE FROM {} WHERE person_id = ?1", kind.table());
    Ok(conn.execute(&sql, [person_id])?)
}
