// src/application/commands/match_commands.rs
//
// Match Command Handlers
//
// Entry-form strings are parsed here; services only see typed requests.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::application::{dto::*, error_handling::ErrorResponse, state::AppState};
use crate::domain::{MatchType, SetScore, Side, DATE_FORMAT, STANDARD_SET_SCORES};
use crate::services::{RecordMatchRequest, UpdateMatchRequest};

/// Full match history, oldest first
pub fn list_matches(state: &AppState) -> Result<SuccessResponse<Vec<MatchDto>>, ErrorResponse> {
    let snapshot = state.load_snapshot();
    let matches = snapshot
        .matches
        .iter()
        .enumerate()
        .map(|(index, record)| MatchDto::from_record(index + 1, record))
        .collect();
    Ok(SuccessResponse::new(matches, snapshot.load_errors))
}

pub fn record_match(
    state: &AppState,
    dto: CreateMatchDto,
) -> Result<SuccessResponse<MatchDto>, ErrorResponse> {
    let request = parse_match_form(dto)?;
    let mut snapshot = state.load_snapshot();
    let position = state.match_service.record_match(&mut snapshot, request)?;
    let stored = MatchDto::from_record(position, &snapshot.matches[position - 1]);
    Ok(SuccessResponse::new(stored, snapshot.load_errors))
}

pub fn update_match(
    state: &AppState,
    position: usize,
    dto: CreateMatchDto,
) -> Result<SuccessResponse<MatchDto>, ErrorResponse> {
    let replacement = parse_match_form(dto)?;
    let mut snapshot = state.load_snapshot();
    state.match_service.update_match(
        &mut snapshot,
        UpdateMatchRequest {
            position,
            replacement,
        },
    )?;
    let stored = MatchDto::from_record(position, &snapshot.matches[position - 1]);
    Ok(SuccessResponse::new(stored, snapshot.load_errors))
}

/// Returns the deleted match as it was stored
pub fn delete_match(
    state: &AppState,
    position: usize,
) -> Result<SuccessResponse<MatchDto>, ErrorResponse> {
    let mut snapshot = state.load_snapshot();
    let deleted = position
        .checked_sub(1)
        .and_then(|index| snapshot.matches.get(index))
        .map(|record| MatchDto::from_record(position, record))
        .ok_or_else(|| ErrorResponse::not_found(&format!("match #{}", position)))?;
    state.match_service.delete_match(&mut snapshot, position)?;
    Ok(SuccessResponse::new(deleted, snapshot.load_errors))
}

/// Usual set scores offered as quick choices when entering a match
pub fn standard_set_scores() -> Vec<String> {
    STANDARD_SET_SCORES.iter().map(|s| s.to_string()).collect()
}

fn parse_match_form(dto: CreateMatchDto) -> Result<RecordMatchRequest, ErrorResponse> {
    let date = NaiveDate::parse_from_str(dto.date.trim(), DATE_FORMAT).map_err(|e| {
        ErrorResponse::validation(format!(
            "Invalid date '{}' ({}), expected YYYY-MM-DD",
            dto.date, e
        ))
    })?;
    let match_type =
        MatchType::from_str(&dto.match_type).map_err(|e| ErrorResponse::validation(e.to_string()))?;
    let winner = Side::from_str(&dto.winner).map_err(|e| ErrorResponse::validation(e.to_string()))?;
    let sets = dto
        .sets
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(SetScore::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ErrorResponse::validation(e.to_string()))?;

    Ok(RecordMatchRequest {
        date,
        match_type,
        players: dto.players,
        sets,
        winner,
    })
}
