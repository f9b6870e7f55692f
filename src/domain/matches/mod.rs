pub mod entity;
pub mod invariants;

pub use entity::{
    is_unset_name, Match, MatchRecord, MatchType, ScoredMatch, SetScore, Side, DATE_FORMAT,
    MAX_SETS, STANDARD_SET_SCORES, WINNERS_SEPARATOR,
};
pub use invariants::validate_match;
