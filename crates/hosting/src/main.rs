//! Console host for live blackjack tables.
//!
//! Reads commands from stdin, one per line:
//! `[#channel] <name> <command>` — e.g. `alice join`, `#vip bob bet 100`.
//! Each channel gets its own table; balances persist in a JSON ledger.

mod console;
mod ledger;

use clap::Parser;
use console::ConsoleMessenger;
use console::Roster;
use ledger::JsonLedger;
use pit_gameroom::Lobby;
use pit_gameroom::Protocol;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

const USAGE: &str = "usage: [#channel] <name> <join|leave|bet N|hit|stand|double|daily|balance>";

#[derive(Parser)]
#[command(name = "pitboss", about = "Multiplayer blackjack tables over a console chat")]
struct Args {
    /// Where chip balances are stored.
    #[arg(long, default_value = "ledger.json")]
    ledger: std::path::PathBuf,
    /// Channel used when a line names none.
    #[arg(long, default_value = "tables")]
    channel: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pit_core::log();
    let args = Args::parse();
    let roster = Arc::new(Roster::default());
    let ledger = Arc::new(JsonLedger::open(args.ledger)?);
    let messenger = Arc::new(ConsoleMessenger::new(roster.clone()));
    let lobby = Arc::new(Lobby::new(ledger, messenger));
    println!("{}", USAGE);
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (channel, rest) = match line.strip_prefix('#') {
            Some(rest) => match rest.split_once(char::is_whitespace) {
                Some((channel, rest)) => (channel, rest.trim_start()),
                None => {
                    println!("{}", USAGE);
                    continue;
                }
            },
            None => (args.channel.as_str(), line),
        };
        let Some((name, input)) = rest.split_once(char::is_whitespace) else {
            println!("{}", USAGE);
            continue;
        };
        match Protocol::decode(input) {
            Ok(command) => {
                let channel = roster.channel(channel).await;
                let player = roster.player(name).await;
                lobby.deliver(channel, player, command).await;
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
