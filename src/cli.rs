// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::cmd::export::export_records;
use crate::cmd::next::print_next;
use crate::cmd::serve::server::DEFAULT_PORT;
use crate::cmd::serve::server::start_server;
use crate::cmd::share::share_card;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::cmd::swipe::swipe_card;
use crate::config::Overrides;
use crate::error::Fallible;
use crate::types::action::Action;
use crate::types::card_id::CardId;
use crate::types::day_boundary::DayBoundary;
use crate::workspace::Workspace;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a like or dislike for a card.
    Swipe {
        /// The card's ID.
        card_id: u32,
        /// The decision: like (or right), dislike (or left).
        action: Action,
    },
    /// Print the streak and the like/dislike totals.
    Stats {
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Print the next card that has not been swiped yet.
    Next,
    /// Print the share text for a card.
    Share {
        /// The card's ID.
        card_id: u32,
    },
    /// Export the local records and stats as JSON.
    Export,
    /// Serve the preferences API from the local store.
    Serve {
        /// The port to listen on.
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Open the stats page in a browser once the server is up.
        #[arg(long)]
        open: bool,
    },
}

/// Accepted before or after the subcommand.
#[derive(Args)]
struct CommonArgs {
    /// Path to the shorts directory. Defaults to the current directory.
    #[arg(long, global = true)]
    directory: Option<String>,
    /// Base URL of the remote preferences API. An empty string means local only.
    #[arg(long, global = true)]
    api: Option<String>,
    /// How to split time into days: local, utc, or offset:+HH:MM.
    #[arg(long, global = true)]
    day_boundary: Option<DayBoundary>,
}

impl CommonArgs {
    fn workspace(self) -> Fallible<Workspace> {
        let overrides = Overrides {
            api_base_url: self.api,
            day_boundary: self.day_boundary,
        };
        Workspace::new(self.directory, &overrides)
    }
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let ws = cli.common.workspace()?;
    match cli.command {
        Command::Swipe { card_id, action } => swipe_card(&ws, CardId::new(card_id), action).await,
        Command::Stats { format } => print_stats(&ws, format).await,
        Command::Next => print_next(&ws).await,
        Command::Share { card_id } => share_card(&ws, CardId::new(card_id)),
        Command::Export => export_records(&ws),
        Command::Serve { port, open } => start_server(ws, port, open).await,
    }
}
