//! Person statements

use marquee_core::{NewPerson, Person, RoleKind};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use tracing::debug;

use super::{link, role};
use crate::error::{is_unique_violation, SqliteError, SqliteResult};

pub(crate) const PERSON_COLUMNS: &str = "p.person_id, p.first_name, p.last_name, p.pay";

/// Insert a person; a taken `(first_name, last_name)` is `DuplicatePerson`
pub fn insert_person(conn: &Connection, person: &NewPerson) -> SqliteResult<i64> {
    conn.execute(
        "INSERT INTO person (first_name, last_name, pay) VALUES (?1, ?2, ?3)",
        params![person.first_name, person.last_name, person.pay],
    )
    .map_err(|e| duplicate_or(e, person))?;

    let person_id = conn.last_insert_rowid();
    debug!(person_id, "Inserted person");
    Ok(person_id)
}

pub fn get_person(conn: &Connection, person_id: i64) -> SqliteResult<Option<Person>> {
    let person = conn
        .query_row(
            &format!("SELECT {PERSON_COLUMNS} FROM person p WHERE p.person_id = ?1"),
            [person_id],
            row_to_person,
        )
        .optional()?;
    Ok(person)
}

pub fn list_persons(conn: &Connection) -> SqliteResult<Vec<Person>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PERSON_COLUMNS} FROM person p ORDER BY p.person_id"
    ))?;
    let people = stmt
        .query_map([], row_to_person)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(people)
}

/// Replace name and pay; renaming onto an existing name is `DuplicatePerson`
pub fn update_person(conn: &Connection, person_id: i64, person: &NewPerson) -> SqliteResult<()> {
    let rows_affected = conn
        .execute(
            "UPDATE person SET first_name = ?2, last_name = ?3, pay = ?4 WHERE person_id = ?1",
            params![person_id, person.first_name, person.last_name, person.pay],
        )
        .map_err(|e| duplicate_or(e, person))?;

    if rows_affected == 0 {
        return Err(SqliteError::NotFound(format!(
            "Person {} does not exist",
            person_id
        )));
    }
    Ok(())
}

/// Delete every role record the person holds, their links, then the person.
///
/// All seven statements run in order inside `tx`; the first failure aborts
/// and the caller's transaction rolls the rest back. Returns whether a person
/// row existed.
pub fn delete_person(tx: &Transaction<'_>, person_id: i64) -> SqliteResult<bool> {
    let mut role_records = 0;
    for kind in RoleKind::ALL {
        role_records += role::delete_role_records(tx, kind, person_id)?;
    }
    let links = link::delete_links_for_person(tx, person_id)?;
    let rows = tx.execute("DELETE FROM person WHERE person_id = ?1", [person_id])?;

    debug!(
        person_id,
        role_records,
        links,
        deleted = rows > 0,
        "Deleted person"
    );
    Ok(rows > 0)
}

pub(crate) fn row_to_person(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        person_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        pay: row.get(3)?,
    })
}

fn duplicate_or(err: rusqlite::Error, person: &NewPerson) -> SqliteError {
    if is_unique_violation(&err) {
        SqliteError::DuplicatePerson {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
        }
    } else {
        SqliteError::Rusqlite(err)
    }
}
