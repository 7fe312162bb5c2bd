//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, GetCmd, Sleeper},
    commands::{
        all::{handle_all, AllParams},
        rookies::{handle_rookies, RookiesParams},
        team_stats::{handle_team_stats, TeamStatsParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app = Sleeper::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Rookies {
                output,
                positions,
                json,
            } => {
                handle_rookies(RookiesParams {
                    season: output.season,
                    data_dir: output.data_dir,
                    positions,
                    as_json: json,
                    debug: output.debug,
                })
                .await?
            }

            GetCmd::TeamStats { output, json } => {
                handle_team_stats(TeamStatsParams {
                    season: output.season,
                    data_dir: output.data_dir,
                    as_json: json,
                    debug: output.debug,
                })
                .await?
            }

            GetCmd::All { output } => {
                handle_all(AllParams {
                    season: output.season,
                    data_dir: output.data_dir,
                    debug: output.debug,
                })
                .await?
            }
        },
    }

    Ok(())
}
