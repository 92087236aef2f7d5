//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use mlb_stats::{
    cli::{Commands, MlbCli},
    commands::{
        decode::handle_decode,
        lookup::{
            handle_find, handle_leagues, handle_person, handle_sports, handle_team, FindTarget,
        },
        resolve_client,
        stats::{handle_game_stats, handle_player_stats, handle_plays, handle_team_stats},
    },
};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MlbCli::parse();
    init_logging(app.verbose);

    let mlb = resolve_client(app.host)?;

    match app.command {
        Commands::Person { id } => handle_person(&mlb, id).await?,
        Commands::Team { id } => handle_team(&mlb, id).await?,
        Commands::Sports { players } => handle_sports(&mlb, players).await?,
        Commands::Leagues { id } => handle_leagues(&mlb, id).await?,
        Commands::Find {
            player,
            team,
            sport_name,
            sport,
        } => match FindTarget::from_flags(player, team, sport_name, sport) {
            Some(target) => handle_find(&mlb, target).await?,
            None => anyhow::bail!("find needs one of --player, --team or --sport-name"),
        },
        Commands::PlayerStats { id, stats } => handle_player_stats(&mlb, id, &stats).await?,
        Commands::TeamStats { id, stats } => handle_team_stats(&mlb, id, &stats).await?,
        Commands::GameStats { person, game } => handle_game_stats(&mlb, person, game).await?,
        Commands::Plays { game } => handle_plays(&mlb, game).await?,
        Commands::Decode { file, lenient } => handle_decode(&file, lenient)?,
    }

    Ok(())
}
