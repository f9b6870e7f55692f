// src/application/commands/player_commands.rs
//
// Player Command Handlers

use crate::application::{dto::*, error_handling::ErrorResponse, state::AppState};
use crate::services::RemovePlayerRequest;

/// Roster in insertion order
pub fn list_players(state: &AppState) -> Result<SuccessResponse<Vec<PlayerDto>>, ErrorResponse> {
    let snapshot = state.load_snapshot();
    let players = snapshot.players.iter().map(PlayerDto::from).collect();
    Ok(SuccessResponse::new(players, snapshot.load_errors))
}

pub fn add_player(
    state: &AppState,
    name: &str,
) -> Result<SuccessResponse<PlayerDto>, ErrorResponse> {
    let mut snapshot = state.load_snapshot();
    let player = state.player_service.add_player(&mut snapshot, name)?;
    Ok(SuccessResponse::new(
        PlayerDto::from(&player),
        snapshot.load_errors,
    ))
}

pub fn remove_player(
    state: &AppState,
    dto: RemovePlayerDto,
) -> Result<SuccessResponse<RemovedPlayerDto>, ErrorResponse> {
    let mut snapshot = state.load_snapshot();
    let name = dto.name.trim().to_string();
    let matches_removed = state.player_service.remove_player(
        &mut snapshot,
        RemovePlayerRequest {
            name: name.clone(),
            keep_matches: dto.keep_matches,
        },
    )?;
    Ok(SuccessResponse::new(
        RemovedPlayerDto {
            name,
            matches_removed,
        },
        snapshot.load_errors,
    ))
}
