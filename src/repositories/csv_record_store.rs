// src/repositories/csv_record_store.rs
//
// Flat-file tables: players.csv (`name`) and matches.csv
// (`Date,Type,Player1..Player4,Set1..Set3,Winners`).

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, warn};

use crate::domain::{MatchRecord, Player};
use crate::error::AppResult;
use crate::repositories::RecordStore;

pub const PLAYERS_FILE: &str = "players.csv";
pub const MATCHES_FILE: &str = "matches.csv";

const PLAYER_COLUMN: &str = "name";

pub struct CsvRecordStore {
    players_path: PathBuf,
    matches_path: PathBuf,
}

impl CsvRecordStore {
    /// Store rooted at `data_dir`; nothing is touched until the first save.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            players_path: data_dir.join(PLAYERS_FILE),
            matches_path: data_dir.join(MATCHES_FILE),
        }
    }

    pub fn players_path(&self) -> &Path {
        &self.players_path
    }

    pub fn matches_path(&self) -> &Path {
        &self.matches_path
    }

    fn write_players(&self, players: &[Player]) -> AppResult<()> {
        ensure_parent(&self.players_path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.players_path)?;

        writer.write_record([PLAYER_COLUMN])?;
        for player in players {
            writer.write_record([player.name.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_matches(&self, matches: &[MatchRecord]) -> AppResult<()> {
        ensure_parent(&self.matches_path)?;
        // Header is written by hand so an empty log still has its columns
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.matches_path)?;

        writer.write_record(MatchRecord::COLUMNS)?;
        for record in matches {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

impl RecordStore for CsvRecordStore {
    fn load_players(&self) -> AppResult<Vec<Player>> {
        if !self.players_path.exists() {
            debug!("{} not found, starting with no players", self.players_path.display());
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.players_path)?;

        let Some(column) = reader
            .headers()?
            .iter()
            .position(|header| header.trim() == PLAYER_COLUMN)
        else {
            warn!(
                "{} has no '{}' column, treating it as empty",
                self.players_path.display(),
                PLAYER_COLUMN
            );
            return Ok(Vec::new());
        };

        let mut players = Vec::new();
        for row in reader.records() {
            let row = row?;
            if let Some(name) = row.get(column).map(str::trim).filter(|n| !n.is_empty()) {
                players.push(Player::new(name));
            }
        }

        Ok(players)
    }

    fn load_matches(&self) -> AppResult<Vec<MatchRecord>> {
        if !self.matches_path.exists() {
            debug!("{} not found, starting with an empty log", self.matches_path.display());
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.matches_path)?;

        let matches = reader
            .deserialize::<MatchRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(matches)
    }

    fn save_all(&self, players: &[Player], matches: &[MatchRecord]) -> AppResult<()> {
        self.write_players(players)?;
        self.write_matches(matches)?;
        debug!(
            "Saved {} players and {} matches to {}",
            players.len(),
            matches.len(),
            self.matches_path.parent().unwrap_or(Path::new(".")).display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(winners: &str) -> MatchRecord {
        MatchRecord {
            date: "2024-05-01".to_string(),
            match_type: "Singles".to_string(),
            player1: Some("Ana".to_string()),
            player2: Some("Bruno".to_string()),
            set1: Some("6-4".to_string()),
            set2: Some("7-6".to_string()),
            winners: Some(winners.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::new(dir.path());

        assert!(store.load_players().unwrap().is_empty());
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::new(&dir.path().join("data"));
        let players = vec![Player::new("Ana"), Player::new("Bruno")];
        let matches = vec![record("Ana"), record("Bruno")];

        store.save_all(&players, &matches).unwrap();

        assert_eq!(store.load_players().unwrap(), players);
        assert_eq!(store.load_matches().unwrap(), matches);
    }

    #[test]
    fn test_empty_tables_keep_headers() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::new(dir.path());
        store.save_all(&[], &[]).unwrap();

        let players = std::fs::read_to_string(store.players_path()).unwrap();
        let matches = std::fs::read_to_string(store.matches_path()).unwrap();
        assert_eq!(players.trim(), "name");
        assert_eq!(
            matches.trim(),
            "Date,Type,Player1,Player2,Player3,Player4,Set1,Set2,Set3,Winners"
        );
        assert!(store.load_matches().unwrap().is_empty());
    }

    #[test]
    fn test_players_without_name_column_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PLAYERS_FILE), "player\nAna\n").unwrap();
        let store = CsvRecordStore::new(dir.path());

        assert!(store.load_players().unwrap().is_empty());
    }

    #[test]
    fn test_reads_blank_slots_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MATCHES_FILE),
            "Date,Type,Player1,Player2,Player3,Player4,Set1,Set2,Set3,Winners\n\
             2024-05-01,Singles,Ana,Bruno,,,6-4,W-O,,Ana\n\
             2024-05-02,Doubles,Ana,Bruno,Carla,Davi,6-0,6-0,,\"Ana,Bruno\"\n",
        )
        .unwrap();
        let store = CsvRecordStore::new(dir.path());
        let matches = store.load_matches().unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].player3, None);
        assert_eq!(matches[0].set2.as_deref(), Some("W-O"));
        assert_eq!(matches[0].set3, None);
        assert_eq!(matches[1].winner_names(), vec!["Ana", "Bruno"]);
    }

    #[test]
    fn test_missing_columns_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MATCHES_FILE),
            "Date,Type,Player1,Player2,Winners\n2024-05-01,Singles,Ana,Bruno,Bruno\n",
        )
        .unwrap();
        let store = CsvRecordStore::new(dir.path());
        let matches = store.load_matches().unwrap();

        assert_eq!(matches[0].set1, None);
        assert_eq!(matches[0].winners.as_deref(), Some("Bruno"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MATCHES_FILE),
            b"Date,Type\n\xff\xfe,Singles\n".as_slice(),
        )
        .unwrap();
        let store = CsvRecordStore::new(dir.path());

        assert!(store.load_matches().is_err());
    }
}
