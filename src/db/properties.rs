use crate::db::connection::Database;
use crate::domain::property::Property;
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension, Row};

fn row_to_property(row: &Row) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        address: row.get(1)?,
        city: row.get(2)?,
        state: row.get(3)?,
        zip: row.get(4)?,
        price: row.get(5)?,
    })
}

/// Persists a new property and returns the id the store assigned to it.
pub fn insert_property(db: &Database, property: &Property) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO properties (address, city, state, zip, price) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                property.address,
                property.city,
                property.state,
                property.zip,
                property.price
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Every stored property, oldest first.
pub fn list_properties(db: &Database) -> Result<Vec<Property>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt =
            conn.prepare("SELECT id, address, city, state, zip, price FROM properties ORDER BY id")?;
        let rows = stmt.query_map([], row_to_property)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

/// The matching property, or `None` when no record has that id.
pub fn find_property_by_id(db: &Database, id: i64) -> Result<Option<Property>, ServerError> {
    db.with_conn(|conn| {
        let found = conn
            .query_row(
                "SELECT id, address, city, state, zip, price FROM properties WHERE id = ?1",
                params![id],
                row_to_property,
            )
            .optional()?;
        Ok(found)
    })
}

/// Removes the matching record if present. An id with no matching record is
/// a success, not an error.
pub fn delete_property_by_id(db: &Database, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM properties WHERE id = ?1", params![id])?;
        Ok(())
    })
}

/// Removes every record in the collection.
pub fn delete_all_properties(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM properties", [])?;
        Ok(())
    })
}
