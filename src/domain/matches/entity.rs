use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

/// At most three sets are recorded per match
pub const MAX_SETS: usize = 3;

/// Separator used in the stored `Winners` column
pub const WINNERS_SEPARATOR: char = ',';

/// Calendar date format of the stored `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Scores offered by set pickers. Any `int-int` is accepted on entry.
pub const STANDARD_SET_SCORES: [&str; 14] = [
    "6-0", "6-1", "6-2", "6-3", "6-4", "7-5", "7-6", "0-6", "1-6", "2-6", "3-6", "4-6", "5-7",
    "6-7",
];

/// True for an empty player slot.
/// Older tables write missing slots as `None` or `nan` instead of leaving them blank.
pub fn is_unset_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.is_empty() || trimmed == "None" || trimmed.eq_ignore_ascii_case("nan")
}

fn present(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().map(str::trim).filter(|s| !is_unset_name(s))
}

/// Kind of contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Singles,
    Doubles,
}

impl MatchType {
    /// Number of player slots the type fills
    pub fn slot_count(self) -> usize {
        self.team_size() * 2
    }

    pub fn team_size(self) -> usize {
        match self {
            MatchType::Singles => 1,
            MatchType::Doubles => 2,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Singles => write!(f, "Singles"),
            MatchType::Doubles => write!(f, "Doubles"),
        }
    }
}

impl FromStr for MatchType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singles" => Ok(MatchType::Singles),
            "doubles" => Ok(MatchType::Doubles),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown match type '{}'",
                other
            ))),
        }
    }
}

/// One side of the net.
/// Side A holds Player1 (and Player2 in doubles), side B the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "team 1" | "team a" => Ok(Side::A),
            "b" | "2" | "team 2" | "team b" => Ok(Side::B),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown side '{}'",
                other
            ))),
        }
    }
}

/// Games won by each side in one set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub games_a: u32,
    pub games_b: u32,
}

impl SetScore {
    pub fn new(games_a: u32, games_b: u32) -> Self {
        Self { games_a, games_b }
    }

    /// Parses `"<int>-<int>"`. Anything else (`"W-O"`, `"6-"`, `"-1-6"`) is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split('-');
        let games_a = parts.next()?.trim().parse().ok()?;
        let games_b = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { games_a, games_b })
    }

    /// Side that took the set, `None` for a level score
    pub fn winner(&self) -> Option<Side> {
        match self.games_a.cmp(&self.games_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for SetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.games_a, self.games_b)
    }
}

impl FromStr for SetScore {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            DomainError::InvariantViolation(format!("'{}' is not a set score like 6-4", s))
        })
    }
}

/// One row of the match log exactly as stored.
///
/// Rows are read tolerantly: every column is kept as text and only
/// interpreted when statistics are derived, so one bad row never hides
/// the rest of the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Type")]
    pub match_type: String,

    #[serde(rename = "Player1")]
    pub player1: Option<String>,

    #[serde(rename = "Player2")]
    pub player2: Option<String>,

    #[serde(rename = "Player3")]
    pub player3: Option<String>,

    #[serde(rename = "Player4")]
    pub player4: Option<String>,

    #[serde(rename = "Set1")]
    pub set1: Option<String>,

    #[serde(rename = "Set2")]
    pub set2: Option<String>,

    #[serde(rename = "Set3")]
    pub set3: Option<String>,

    /// Comma-joined names, authoritative for scoring
    #[serde(rename = "Winners")]
    pub winners: Option<String>,
}

impl MatchRecord {
    /// Column names of the stored table, in order
    pub const COLUMNS: [&'static str; 10] = [
        "Date", "Type", "Player1", "Player2", "Player3", "Player4", "Set1", "Set2", "Set3",
        "Winners",
    ];

    /// The four player slots with unset entries as `None`
    pub fn slots(&self) -> [Option<&str>; 4] {
        [
            present(&self.player1),
            present(&self.player2),
            present(&self.player3),
            present(&self.player4),
        ]
    }

    /// The three set columns with blank entries as `None`
    pub fn sets(&self) -> [Option<&str>; MAX_SETS] {
        [&self.set1, &self.set2, &self.set3]
            .map(|set| set.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn winner_names(&self) -> Vec<&str> {
        self.winners
            .as_deref()
            .unwrap_or_default()
            .split(WINNERS_SEPARATOR)
            .map(str::trim)
            .filter(|name| !is_unset_name(name))
            .collect()
    }

    /// Whether `name` occupies any of the four slots
    pub fn involves(&self, name: &str) -> bool {
        self.slots().iter().flatten().any(|slot| *slot == name)
    }

    /// One-line description used by match pickers and history listings
    pub fn label(&self) -> String {
        let [p1, p2, p3, p4] = self.slots().map(|slot| slot.unwrap_or("?"));
        if self.match_type.trim().eq_ignore_ascii_case("doubles") {
            format!(
                "{} - {} - {}/{} vs {}/{}",
                self.date, self.match_type, p1, p2, p3, p4
            )
        } else {
            format!("{} - {} - {} vs {}", self.date, self.match_type, p1, p2)
        }
    }
}

/// A fully interpreted match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub date: NaiveDate,
    pub match_type: MatchType,

    /// Player1, plus Player2 in doubles
    pub team_a: Vec<String>,

    /// Player2 in singles, Player3 and Player4 in doubles
    pub team_b: Vec<String>,

    /// Raw set scores in play order; unparseable ones are kept and ignored when scoring
    pub sets: Vec<String>,

    pub winners: Vec<String>,
}

impl Match {
    /// Build a match from entry-form input.
    /// `players` fills the slots in order; winners are the whole `winner` side.
    pub fn new(
        date: NaiveDate,
        match_type: MatchType,
        players: Vec<String>,
        sets: Vec<SetScore>,
        winner: Side,
    ) -> DomainResult<Self> {
        if players.len() != match_type.slot_count() {
            return Err(DomainError::InvariantViolation(format!(
                "{} needs {} players, got {}",
                match_type,
                match_type.slot_count(),
                players.len()
            )));
        }
        if sets.len() > MAX_SETS {
            return Err(DomainError::InvariantViolation(format!(
                "At most {} sets can be recorded, got {}",
                MAX_SETS,
                sets.len()
            )));
        }

        let mut players: Vec<String> = players.into_iter().map(|p| p.trim().to_string()).collect();
        let team_b = players.split_off(match_type.team_size());
        let team_a = players;
        let winners = match winner {
            Side::A => team_a.clone(),
            Side::B => team_b.clone(),
        };

        Ok(Self {
            date,
            match_type,
            team_a,
            team_b,
            sets: sets.iter().map(SetScore::to_string).collect(),
            winners,
        })
    }

    pub fn team(&self, side: Side) -> &[String] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.team_a.iter().chain(self.team_b.iter()).map(String::as_str)
    }

    /// Side `name` plays on; side A wins if a name was entered twice
    pub fn side_of(&self, name: &str) -> Option<Side> {
        side_in(&self.team_a, &self.team_b, name)
    }

    /// The side whose members are exactly the recorded winners
    pub fn winning_side(&self) -> Option<Side> {
        side_matching(&self.team_a, &self.team_b, &self.winners)
    }
}

/// A stored row read as leniently as scoring allows.
///
/// Only a known `Type` and at least one winner are required. Blank slots
/// are left out of their team and the date stays as text, so a row with a
/// missing teammate or an odd date still counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    /// The stored `Date` text, trimmed
    pub date: String,
    pub match_type: MatchType,
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
    pub sets: Vec<String>,
    pub winners: Vec<String>,
}

impl ScoredMatch {
    pub fn team(&self, side: Side) -> &[String] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.team_a.iter().chain(self.team_b.iter()).map(String::as_str)
    }

    pub fn side_of(&self, name: &str) -> Option<Side> {
        side_in(&self.team_a, &self.team_b, name)
    }

    /// The other member of `name`'s team in a doubles match, if that slot is filled
    pub fn teammate_of(&self, name: &str) -> Option<&str> {
        if self.match_type != MatchType::Doubles {
            return None;
        }
        let side = self.side_of(name)?;
        self.team(side)
            .iter()
            .map(String::as_str)
            .find(|p| *p != name)
    }

    pub fn won_by(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }

    pub fn winning_side(&self) -> Option<Side> {
        side_matching(&self.team_a, &self.team_b, &self.winners)
    }

    /// Set scores that parse; malformed ones are skipped
    pub fn parsed_sets(&self) -> impl Iterator<Item = SetScore> + '_ {
        self.sets.iter().filter_map(|raw| SetScore::parse(raw))
    }

    /// Calendar day used to count distinct playing days.
    /// Unreadable dates count as their own day, keyed by the raw text.
    pub fn day(&self) -> String {
        parse_record_date(&self.date)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

fn side_in(team_a: &[String], team_b: &[String], name: &str) -> Option<Side> {
    if team_a.iter().any(|p| p == name) {
        Some(Side::A)
    } else if team_b.iter().any(|p| p == name) {
        Some(Side::B)
    } else {
        None
    }
}

fn side_matching(team_a: &[String], team_b: &[String], winners: &[String]) -> Option<Side> {
    fn sorted(names: &[String]) -> Vec<&str> {
        let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
    let winners = sorted(winners);
    if winners.is_empty() {
        return None;
    }
    [(Side::A, team_a), (Side::B, team_b)]
        .into_iter()
        .find(|(_, team)| sorted(team) == winners)
        .map(|(side, _)| side)
}

fn parse_record_date(raw: &str) -> DomainResult<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|_| DomainError::MalformedRecord(format!("unreadable date '{}'", trimmed)))
}

/// Fails only without a known `Type` or without winners.
///
/// Slots beyond what the type uses are ignored: names in Player3/Player4 of
/// a singles row are neither participants nor losers.
impl TryFrom<&MatchRecord> for ScoredMatch {
    type Error = DomainError;

    fn try_from(record: &MatchRecord) -> Result<Self, Self::Error> {
        if record.match_type.trim().is_empty() {
            return Err(DomainError::MalformedRecord("missing match type".to_string()));
        }
        let match_type: MatchType = record
            .match_type
            .parse()
            .map_err(|e: DomainError| DomainError::MalformedRecord(e.to_string()))?;

        let winners: Vec<String> = record
            .winner_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if winners.is_empty() {
            return Err(DomainError::MalformedRecord("no winners recorded".to_string()));
        }

        let slots = record.slots();
        let size = match_type.team_size();
        let team = |range: std::ops::Range<usize>| -> Vec<String> {
            slots[range].iter().flatten().map(|s| s.to_string()).collect()
        };

        Ok(Self {
            date: record.date.trim().to_string(),
            match_type,
            team_a: team(0..size),
            team_b: team(size..2 * size),
            sets: record.sets().iter().flatten().map(|s| s.to_string()).collect(),
            winners,
        })
    }
}

/// Strict reading used before a row is trusted as a complete match:
/// the date must parse and every slot the type uses must be filled.
/// Player3/Player4 of a singles row are ignored, as for `ScoredMatch`.
impl TryFrom<&MatchRecord> for Match {
    type Error = DomainError;

    fn try_from(record: &MatchRecord) -> Result<Self, Self::Error> {
        let date = parse_record_date(&record.date)?;
        let scored = ScoredMatch::try_from(record)?;

        let slot_count = scored.match_type.slot_count();
        if let Some(idx) = record.slots()[..slot_count].iter().position(Option::is_none) {
            return Err(DomainError::MalformedRecord(format!(
                "{} match is missing Player{}",
                scored.match_type,
                idx + 1
            )));
        }

        Ok(Self {
            date,
            match_type: scored.match_type,
            team_a: scored.team_a,
            team_b: scored.team_b,
            sets: scored.sets,
            winners: scored.winners,
        })
    }
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        let mut slots = m.participants().map(|p| Some(p.to_string()));
        let mut sets = m.sets.iter().map(|s| Some(s.clone()));
        let separator = WINNERS_SEPARATOR.to_string();

        Self {
            date: m.date.format(DATE_FORMAT).to_string(),
            match_type: m.match_type.to_string(),
            player1: slots.next().flatten(),
            player2: slots.next().flatten(),
            player3: slots.next().flatten(),
            player4: slots.next().flatten(),
            set1: sets.next().flatten(),
            set2: sets.next().flatten(),
            set3: sets.next().flatten(),
            winners: Some(m.winners.join(&separator)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubles_record() -> MatchRecord {
        MatchRecord {
            date: "2024-05-01".to_string(),
            match_type: "Doubles".to_string(),
            player1: Some("Ana".to_string()),
            player2: Some("Bruno".to_string()),
            player3: Some("Carla".to_string()),
            player4: Some("Davi".to_string()),
            set1: Some("6-3".to_string()),
            set2: Some("W-O".to_string()),
            set3: None,
            winners: Some("Ana,Bruno".to_string()),
        }
    }

    #[test]
    fn test_set_score_parse() {
        assert_eq!(SetScore::parse("6-4"), Some(SetScore::new(6, 4)));
        assert_eq!(SetScore::parse(" 7 - 6 "), Some(SetScore::new(7, 6)));
        assert_eq!(SetScore::parse("W-O"), None);
        assert_eq!(SetScore::parse("6-"), None);
        assert_eq!(SetScore::parse("-1-6"), None);
        assert_eq!(SetScore::parse("6-4-1"), None);
        assert_eq!(SetScore::parse(""), None);
    }

    #[test]
    fn test_set_winner() {
        assert_eq!(SetScore::new(6, 4).winner(), Some(Side::A));
        assert_eq!(SetScore::new(5, 7).winner(), Some(Side::B));
        assert_eq!(SetScore::new(3, 3).winner(), None);
    }

    #[test]
    fn test_match_type_parse() {
        assert_eq!("Singles".parse::<MatchType>().unwrap(), MatchType::Singles);
        assert_eq!(" doubles".parse::<MatchType>().unwrap(), MatchType::Doubles);
        assert!("Mixed".parse::<MatchType>().is_err());
    }

    #[test]
    fn test_sentinels_are_unset() {
        assert!(is_unset_name(""));
        assert!(is_unset_name("None"));
        assert!(is_unset_name("NaN"));
        assert!(!is_unset_name("Nonesuch"));
    }

    #[test]
    fn test_record_interprets_doubles() {
        let m = Match::try_from(&doubles_record()).unwrap();
        assert_eq!(m.team_a, vec!["Ana", "Bruno"]);
        assert_eq!(m.team_b, vec!["Carla", "Davi"]);
        assert_eq!(m.sets, vec!["6-3", "W-O"]);
        assert_eq!(m.winning_side(), Some(Side::A));

        let scored = ScoredMatch::try_from(&doubles_record()).unwrap();
        assert_eq!(scored.parsed_sets().count(), 1);
        assert_eq!(scored.teammate_of("Davi"), Some("Carla"));
    }

    #[test]
    fn test_scored_match_keeps_partial_teams() {
        let record = MatchRecord {
            player4: None,
            ..doubles_record()
        };
        assert!(Match::try_from(&record).is_err());

        let scored = ScoredMatch::try_from(&record).unwrap();
        assert_eq!(scored.team_a, vec!["Ana", "Bruno"]);
        assert_eq!(scored.team_b, vec!["Carla"]);
        assert_eq!(scored.teammate_of("Carla"), None);
        assert_eq!(scored.winning_side(), Some(Side::A));
    }

    #[test]
    fn test_scored_match_ignores_unreadable_date() {
        let record = MatchRecord {
            date: "01/05/2024".to_string(),
            ..doubles_record()
        };
        assert!(Match::try_from(&record).is_err());

        let scored = ScoredMatch::try_from(&record).unwrap();
        assert_eq!(scored.day(), "01/05/2024");
        assert_eq!(
            ScoredMatch::try_from(&doubles_record()).unwrap().day(),
            "2024-05-01"
        );
    }

    #[test]
    fn test_singles_extra_slots_ignored() {
        let record = MatchRecord {
            match_type: "Singles".to_string(),
            winners: Some("Ana".to_string()),
            ..doubles_record()
        };
        let scored = ScoredMatch::try_from(&record).unwrap();
        assert_eq!(scored.participants().collect::<Vec<_>>(), vec!["Ana", "Bruno"]);
    }

    #[test]
    fn test_record_missing_type_is_malformed() {
        let record = MatchRecord {
            match_type: String::new(),
            ..doubles_record()
        };
        assert!(matches!(
            Match::try_from(&record),
            Err(DomainError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_record_sentinel_slot_is_missing() {
        let record = MatchRecord {
            player4: Some("None".to_string()),
            ..doubles_record()
        };
        let err = Match::try_from(&record).unwrap_err();
        assert!(err.to_string().contains("Player4"));
    }

    #[test]
    fn test_record_without_winners_is_malformed() {
        let record = MatchRecord {
            winners: Some(",None".to_string()),
            ..doubles_record()
        };
        assert!(Match::try_from(&record).is_err());
    }

    #[test]
    fn test_new_match_round_trips_to_record() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let m = Match::new(
            date,
            MatchType::Singles,
            vec!["Ana".to_string(), "Bruno".to_string()],
            vec![SetScore::new(4, 6), SetScore::new(3, 6)],
            Side::B,
        )
        .unwrap();

        let record = MatchRecord::from(&m);
        assert_eq!(record.date, "2024-06-02");
        assert_eq!(record.player3, None);
        assert_eq!(record.set2.as_deref(), Some("3-6"));
        assert_eq!(record.winners.as_deref(), Some("Bruno"));
        assert_eq!(Match::try_from(&record).unwrap(), m);
    }

    #[test]
    fn test_new_match_rejects_wrong_slot_count() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let result = Match::new(
            date,
            MatchType::Doubles,
            vec!["Ana".to_string(), "Bruno".to_string()],
            vec![],
            Side::A,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            doubles_record().label(),
            "2024-05-01 - Doubles - Ana/Bruno vs Carla/Davi"
        );
        let singles = MatchRecord {
            match_type: "Singles".to_string(),
            player3: None,
            player4: None,
            ..doubles_record()
        };
        assert_eq!(singles.label(), "2024-05-01 - Singles - Ana vs Bruno");
    }
}
