// src/main.rs
//
// courtbook - command-line front end.
//
// Every invocation is one interaction: load both tables, apply at most one
// change, print the result.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Args as ClapArgs, Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use serde::Serialize;

use courtbook::application::dto::{
    CreateMatchDto, InconsistencyDto, LeaderboardDto, MatchDto, PlayerDto, PlayerSummaryDto,
    RemovePlayerDto, RemovedPlayerDto, SuccessResponse,
};
use courtbook::application::{commands, AppState, ErrorResponse};
use courtbook::domain::DATE_FORMAT;
use courtbook::{
    EventBus, MatchDeleted, MatchRecorded, MatchUpdated, PlayerAdded, PlayerRemoved,
    StorageBackend, StoreConfig,
};

/// Courtbook
///
/// Keeps the players and match results of a tennis group and derives the
/// leaderboard and per-player statistics from them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the tables [default: the user data directory]
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Storage format of the tables [default: csv]
    #[arg(long, global = true, value_enum)]
    backend: Option<StorageBackend>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log on the debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the roster
    #[command(subcommand)]
    Players(PlayersCommand),

    /// Record, edit and list matches
    #[command(subcommand)]
    Matches(MatchesCommand),

    /// Ranked standings with points, match wins and games won
    Leaderboard,

    /// Totals, frequency and doubles partners of one player
    Stats {
        name: String,
    },

    /// List matches whose winners disagree with their set scores
    Check,
}

#[derive(Subcommand, Debug)]
enum PlayersCommand {
    List,

    Add {
        name: String,
    },

    /// Remove a player and every match they played in
    Remove {
        name: String,

        /// Keep the player's matches in the history
        #[arg(long)]
        keep_matches: bool,
    },
}

#[derive(Subcommand, Debug)]
enum MatchesCommand {
    /// Show the full match history with positions
    List,

    Add(MatchForm),

    /// Replace the match at a history position
    Edit {
        position: usize,

        #[command(flatten)]
        form: MatchForm,
    },

    Delete {
        position: usize,
    },

    /// Show the usual set scores
    Scores,
}

#[derive(ClapArgs, Debug)]
struct MatchForm {
    /// Day the match was played [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<String>,

    /// Singles or Doubles
    #[arg(long = "type", value_name = "TYPE")]
    match_type: String,

    /// Participants in slot order: A,B for singles or A1,A2,B1,B2 for doubles
    #[arg(long, required = true, value_delimiter = ',')]
    players: Vec<String>,

    /// Set score such as 6-4, once per set played
    #[arg(long = "set", value_name = "SCORE")]
    sets: Vec<String>,

    /// Winning side: A (first team) or B (second team)
    #[arg(long)]
    winner: String,
}

impl From<MatchForm> for CreateMatchDto {
    fn from(form: MatchForm) -> Self {
        Self {
            date: form
                .date
                .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string()),
            match_type: form.match_type,
            players: form.players,
            sets: form.sets,
            winner: form.winner,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = StoreConfig::from_env()
        .with_data_dir(args.data_dir)
        .with_backend(args.backend);
    let state = AppState::new(config.open_store()?);

    if !args.json {
        print_confirmations(&state.event_bus);
    }

    match run(&state, args.command, args.json) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&error)?);
            } else {
                eprintln!("error: {error}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logger(verbose: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "[{}] ({}): {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    if verbose {
        builder.filter(None, LevelFilter::Debug);
    } else if let Ok(var) = std::env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        builder.filter(None, LevelFilter::Warn);
    }

    builder.init();
}

fn print_confirmations(bus: &EventBus) {
    bus.subscribe::<PlayerAdded, _>(|event| println!("Added player {}", event.name));
    bus.subscribe::<PlayerRemoved, _>(|event| {
        println!(
            "Removed player {} ({} matches deleted)",
            event.name, event.matches_removed
        );
    });
    bus.subscribe::<MatchRecorded, _>(|event| {
        println!("Recorded match #{}: {}", event.position, event.label);
    });
    bus.subscribe::<MatchUpdated, _>(|event| {
        println!("Updated match #{}: {}", event.position, event.label);
    });
    bus.subscribe::<MatchDeleted, _>(|event| {
        println!("Deleted match #{}: {}", event.position, event.label);
    });
}

fn run(state: &AppState, command: Command, json: bool) -> Result<(), ErrorResponse> {
    match command {
        Command::Players(PlayersCommand::List) => {
            output(commands::list_players(state)?, json, print_players);
        }
        Command::Players(PlayersCommand::Add { name }) => {
            output(commands::add_player(state, &name)?, json, |_: &PlayerDto| {});
        }
        Command::Players(PlayersCommand::Remove { name, keep_matches }) => {
            let dto = RemovePlayerDto { name, keep_matches };
            output(
                commands::remove_player(state, dto)?,
                json,
                |_: &RemovedPlayerDto| {},
            );
        }
        Command::Matches(MatchesCommand::List) => {
            output(commands::list_matches(state)?, json, print_matches);
        }
        Command::Matches(MatchesCommand::Add(form)) => {
            output(
                commands::record_match(state, form.into())?,
                json,
                |_: &MatchDto| {},
            );
        }
        Command::Matches(MatchesCommand::Edit { position, form }) => {
            output(
                commands::update_match(state, position, form.into())?,
                json,
                |_: &MatchDto| {},
            );
        }
        Command::Matches(MatchesCommand::Delete { position }) => {
            output(
                commands::delete_match(state, position)?,
                json,
                |_: &MatchDto| {},
            );
        }
        Command::Matches(MatchesCommand::Scores) => {
            let scores = SuccessResponse::new(commands::standard_set_scores(), Vec::new());
            output(scores, json, |scores: &Vec<String>| println!("{}", scores.join(" ")));
        }
        Command::Leaderboard => {
            output(commands::get_leaderboard(state)?, json, print_leaderboard);
        }
        Command::Stats { name } => {
            output(
                commands::get_player_summary(state, &name)?,
                json,
                print_summary,
            );
        }
        Command::Check => {
            output(commands::check_consistency(state)?, json, print_inconsistencies);
        }
    }
    Ok(())
}

/// Prints the whole response as JSON, or the load warnings followed by the
/// rendered data.
fn output<T, F>(response: SuccessResponse<T>, json: bool, render: F)
where
    T: Serialize,
    F: FnOnce(&T),
{
    if json {
        match serde_json::to_string_pretty(&response) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error: could not encode the result: {e}"),
        }
        return;
    }

    for warning in &response.warnings {
        eprintln!("warning: {warning}");
    }
    render(&response.data);
}

fn print_players(players: &Vec<PlayerDto>) {
    if players.is_empty() {
        println!("No players registered yet.");
    }
    for player in players {
        println!("{}", player.name);
    }
}

fn print_matches(matches: &Vec<MatchDto>) {
    if matches.is_empty() {
        println!("No matches recorded yet.");
    }
    for m in matches {
        println!(
            "#{:<4} {}  [{}]  won by {}",
            m.position,
            m.label,
            m.sets.join(" "),
            m.winners.join(" & ")
        );
    }
}

fn print_leaderboard(board: &LeaderboardDto) {
    println!(
        "{:>4}  {:<20} {:>6} {:>5} {:>6}",
        "Rank", "Player", "Points", "Wins", "Games"
    );
    for row in &board.rows {
        println!(
            "{:>4}  {:<20} {:>6} {:>5} {:>6}",
            row.rank, row.name, row.points, row.match_wins, row.games_won
        );
    }
    for skipped in &board.skipped {
        eprintln!("skipped match #{}: {}", skipped.position, skipped.reason);
    }
}

fn print_summary(summary: &PlayerSummaryDto) {
    println!("{}", summary.name);
    println!("  Points:       {}", summary.points);
    println!("  Match wins:   {}", summary.match_wins);
    println!("  Games won:    {}", summary.games_won);
    println!("  Days played:  {}", summary.frequency_days);

    if summary.partners.is_empty() {
        println!("  No doubles partners yet");
    } else {
        println!("  Partners:");
        for partner in &summary.partners {
            println!(
                "    {:<20} {}/{} won ({:.0}%)",
                partner.name,
                partner.wins,
                partner.total,
                partner.win_ratio * 100.0
            );
        }
    }
    if let Some(best) = &summary.best_partner {
        println!("  Best partner: {best}");
    }
    for skipped in &summary.skipped {
        eprintln!("skipped match #{}: {}", skipped.position, skipped.reason);
    }
}

fn print_inconsistencies(report: &Vec<InconsistencyDto>) {
    if report.is_empty() {
        println!("Every decided match agrees with its set scores.");
    }
    for entry in report {
        println!(
            "#{:<4} {}  recorded winner: {}, sets favour side {}",
            entry.position,
            entry.label,
            entry.recorded_winner.as_deref().unwrap_or("mixed"),
            entry.winner_by_sets
        );
    }
}
