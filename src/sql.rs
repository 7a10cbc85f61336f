//! Read-only lookups against the Chinook sample database.
//!
//! Every query binds its arguments as parameters, so a title such as `' OR '1'='1` is compared
//! as a literal string.

use std::path::Path;

use rusqlite::{params, Connection, OpenFlags};
use tracing::debug;

use crate::error::Result;

/// Where the Chinook database is looked for unless configured otherwise.
pub const DEFAULT_DB_PATH: &str = "data/chinook.db";

/// Number of rows [`Database::top_invoices`] returns.
pub const TOP_INVOICES: usize = 10;

/// One track with the album it is on and the album's artist.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumTrack {
    /// Name of the track.
    pub track: String,
    /// Title of the album.
    pub album: String,
    /// Name of the artist.
    pub artist: String,
}

/// An invoice and its total.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotal {
    /// Id of the invoice.
    pub invoice_id: i64,
    /// Id of the customer billed.
    pub customer_id: i64,
    /// Invoice total.
    pub total: f64,
}

/// A connection to a database with the Chinook `Album`, `Artist`, `Track` and `Invoice`
/// tables.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the database at `path` read-only. A missing file is an error rather than a new
    /// empty database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened database");

        Ok(Self { conn })
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Whether an album titled exactly `title` exists.
    pub fn query_album(&self, title: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT EXISTS(SELECT 1 FROM Album WHERE Title = ?1)")?;
        let found = stmt.query_row(params![title], |row| row.get(0))?;

        Ok(found)
    }

    /// Every track joined with its album and artist, in track order.
    pub fn join_albums(&self) -> Result<Vec<AlbumTrack>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT t.Name, a.Title, ar.Name \
             FROM Album a \
             JOIN Artist ar ON ar.ArtistId = a.ArtistId \
             JOIN Track t ON t.AlbumId = a.AlbumId \
             ORDER BY t.TrackId",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AlbumTrack {
                track: row.get(0)?,
                album: row.get(1)?,
                artist: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    /// The [`TOP_INVOICES`] largest invoices, largest first. Equal totals are ordered by id.
    pub fn top_invoices(&self) -> Result<Vec<InvoiceTotal>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT InvoiceId, CustomerId, Total \
             FROM Invoice \
             ORDER BY Total DESC, InvoiceId \
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![TOP_INVOICES as i64], |row| {
            Ok(InvoiceTotal {
                invoice_id: row.get(0)?,
                customer_id: row.get(1)?,
                total: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }
}

/// A small database with the Chinook schema, for tests.
#[cfg(test)]
pub(crate) const FIXTURE: &str = "
    CREATE TABLE Artist (ArtistId INTEGER PRIMARY KEY, Name TEXT);
    CREATE TABLE Album (AlbumId INTEGER PRIMARY KEY, Title TEXT NOT NULL,
                        ArtistId INTEGER NOT NULL REFERENCES Artist(ArtistId));
    CREATE TABLE Track (TrackId INTEGER PRIMARY KEY, Name TEXT NOT NULL,
                        AlbumId INTEGER REFERENCES Album(AlbumId));
    CREATE TABLE Invoice (InvoiceId INTEGER PRIMARY KEY,
                          CustomerId INTEGER NOT NULL, Total NUMERIC NOT NULL);

    INSERT INTO Artist VALUES (1, 'AC/DC'), (2, 'Led Zeppelin');
    INSERT INTO Album VALUES
        (1, 'For Those About To Rock We Salute You', 1),
        (2, 'Presence', 2),
        (3, 'Let There Be Rock', 1);
    INSERT INTO Track VALUES
        (3, 'Go Down', 3),
        (1, 'For Those About To Rock (We Salute You)', 1),
        (2, 'Achilles Last Stand', 2);
    INSERT INTO Invoice VALUES
        (1, 2, 1.98), (2, 3, 25.86), (3, 4, 3.96), (4, 1, 21.86),
        (5, 2, 5.94), (6, 3, 23.86), (7, 4, 0.99), (8, 1, 8.91),
        (9, 2, 13.86), (10, 3, 18.86), (11, 4, 15.86), (12, 1, 21.86);
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn fixture() -> Database {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(FIXTURE).unwrap();
        Database::from_connection(conn)
    }

    #[test]
    fn album_titles() {
        let db = fixture();

        assert_eq!(db.query_album("Presence"), Ok(true));
        assert_eq!(db.query_album("Roundabout"), Ok(false));
        // Titles match exactly.
        assert_eq!(db.query_album("presence"), Ok(false));
        assert_eq!(db.query_album(""), Ok(false));
    }

    #[test]
    fn titles_are_not_interpreted_as_sql() {
        let db = fixture();

        assert_eq!(db.query_album("' OR '1'='1"), Ok(false));
        assert_eq!(db.query_album("'; --"), Ok(false));
        assert_eq!(db.query_album("' UNION SELECT 1,2,3 --"), Ok(false));
        assert_eq!(db.query_album("Album's Title"), Ok(false));
        assert_eq!(db.query_album("Album \"Title\""), Ok(false));

        // Still there afterwards.
        assert_eq!(db.query_album("Presence"), Ok(true));
    }

    #[test]
    fn quoted_titles_are_found() {
        let db = fixture();
        db.conn
            .execute("INSERT INTO Album VALUES (4, 'Album''s Title', 2)", [])
            .unwrap();

        assert_eq!(db.query_album("Album's Title"), Ok(true));
    }

    #[test]
    fn joined_tracks() {
        let joined = fixture().join_albums().unwrap();

        assert_eq!(joined.len(), 3);
        assert_eq!(
            joined[0],
            AlbumTrack {
                track: "For Those About To Rock (We Salute You)".to_string(),
                album: "For Those About To Rock We Salute You".to_string(),
                artist: "AC/DC".to_string(),
            }
        );
        assert_eq!(joined[2].album, "Let There Be Rock");
        assert_eq!(joined[2].artist, "AC/DC");
    }

    #[test]
    fn largest_invoices_first() {
        let top = fixture().top_invoices().unwrap();
        let totals: Vec<f64> = top.iter().map(|i| i.total).collect();

        assert_eq!(top.len(), TOP_INVOICES);
        assert_eq!(
            totals,
            vec![25.86, 23.86, 21.86, 21.86, 18.86, 15.86, 13.86, 8.91, 5.94, 3.96]
        );
        // Ties keep id order.
        assert_eq!(top[2].invoice_id, 4);
        assert_eq!(top[3].invoice_id, 12);
        assert_eq!(top[0].customer_id, 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("algobench-no-such-database.db");

        assert!(matches!(Database::open(&path), Err(Error::Sql(_))));
        assert!(!path.exists());
    }

    #[test]
    fn missing_table_is_an_error() {
        let db = Database::from_connection(Connection::open_in_memory().unwrap());

        assert!(matches!(db.query_album("Presence"), Err(Error::Sql(_))));
    }
}
