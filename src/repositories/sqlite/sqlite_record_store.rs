// src/repositories/sqlite/sqlite_record_store.rs
//
// The two tables kept in a SQLite file instead of flat files.

use std::path::Path;
use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::domain::{MatchRecord, Player};
use crate::error::AppResult;
use crate::repositories::RecordStore;

pub const DATABASE_FILE: &str = "courtbook.db";

pub struct SqliteRecordStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteRecordStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database file and brings its schema up to date
    pub fn open(db_path: &Path) -> AppResult<Self> {
        let pool = create_connection_pool(db_path)?;
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        Ok(Self::new(Arc::new(pool)))
    }

    fn row_to_match(row: &Row) -> Result<MatchRecord, rusqlite::Error> {
        Ok(MatchRecord {
            date: row.get("date")?,
            match_type: row.get("type")?,
            player1: row.get("player1")?,
            player2: row.get("player2")?,
            player3: row.get("player3")?,
            player4: row.get("player4")?,
            set1: row.get("set1")?,
            set2: row.get("set2")?,
            set3: row.get("set3")?,
            winners: row.get("winners")?,
        })
    }
}

impl RecordStore for SqliteRecordStore {
    fn load_players(&self) -> AppResult<Vec<Player>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare("SELECT name FROM players ORDER BY position")?;
        let players = stmt
            .query_map([], |row| row.get::<_, String>(0).map(Player::new))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }

    fn load_matches(&self) -> AppResult<Vec<MatchRecord>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT date, type, player1, player2, player3, player4,
                    set1, set2, set3, winners
             FROM matches
             ORDER BY position",
        )?;
        let matches = stmt
            .query_map([], Self::row_to_match)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(matches)
    }

    fn save_all(&self, players: &[Player], matches: &[MatchRecord]) -> AppResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM players", [])?;
        {
            let mut stmt = tx.prepare("INSERT INTO players (position, name) VALUES (?1, ?2)")?;
            for (position, player) in players.iter().enumerate() {
                stmt.execute(params![position as i64, player.name])?;
            }
        }

        tx.execute("DELETE FROM matches", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO matches (
                    position, date, type, player1, player2, player3, player4,
                    set1, set2, set3, winners
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (position, record) in matches.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    record.date,
                    record.match_type,
                    record.player1,
                    record.player2,
                    record.player3,
                    record.player4,
                    record.set1,
                    record.set2,
                    record.set3,
                    record.winners,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubles() -> MatchRecord {
        MatchRecord {
            date: "2024-05-01".to_string(),
            match_type: "Doubles".to_string(),
            player1: Some("Ana".to_string()),
            player2: Some("Bruno".to_string()),
            player3: Some("Carla".to_string()),
            player4: Some("Davi".to_string()),
            set1: Some("6-0".to_string()),
            set2: None,
            set3: None,
            winners: Some("Carla,Davi".to_string()),
        }
    }

    #[test]
    fn test_fresh_database_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteRecordStore::open(&dir.path().join(DATABASE_FILE)).unwrap();

        assert!(store.load_players().unwrap().is_empty());
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_tables() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteRecordStore::open(&dir.path().join(DATABASE_FILE)).unwrap();

        let first = vec![Player::new("Ana"), Player::new("Bruno")];
        store.save_all(&first, &[doubles(), doubles()]).unwrap();

        let second = vec![Player::new("Carla"), Player::new("Ana")];
        let kept = MatchRecord {
            set2: Some("W-O".to_string()),
            ..doubles()
        };
        store.save_all(&second, &[kept.clone()]).unwrap();

        assert_eq!(store.load_players().unwrap(), second);
        assert_eq!(store.load_matches().unwrap(), vec![kept]);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE);
        {
            let store = SqliteRecordStore::open(&path).unwrap();
            store.save_all(&[Player::new("Ana")], &[doubles()]).unwrap();
        }

        let store = SqliteRecordStore::open(&path).unwrap();
        assert_eq!(store.load_players().unwrap(), vec![Player::new("Ana")]);
        assert_eq!(store.load_matches().unwrap()[0], doubles());
    }
}
