// src/application/commands/statistics_commands.rs

use crate::application::{dto::*, error_handling::ErrorResponse, state::AppState};

pub fn get_leaderboard(state: &AppState) -> Result<SuccessResponse<LeaderboardDto>, ErrorResponse> {
    let snapshot = state.load_snapshot();
    let board = state.statistics_service.leaderboard(&snapshot);
    Ok(SuccessResponse::new(
        LeaderboardDto::from(board),
        snapshot.load_errors,
    ))
}

pub fn get_player_summary(
    state: &AppState,
    name: &str,
) -> Result<SuccessResponse<PlayerSummaryDto>, ErrorResponse> {
    let snapshot = state.load_snapshot();
    let summary = state.statistics_service.player_summary(&snapshot, name)?;
    Ok(SuccessResponse::new(
        PlayerSummaryDto::from(summary),
        snapshot.load_errors,
    ))
}

/// Matches whose stored winners disagree with their set scores
pub fn check_consistency(
    state: &AppState,
) -> Result<SuccessResponse<Vec<InconsistencyDto>>, ErrorResponse> {
    let snapshot = state.load_snapshot();
    let report = state
        .statistics_service
        .consistency_report(&snapshot)
        .iter()
        .map(InconsistencyDto::from)
        .collect();
    Ok(SuccessResponse::new(report, snapshot.load_errors))
}
