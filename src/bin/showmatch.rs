//! Showmatch Binary
//!
//! Plays a full unattended game between AI policies and prints the action
//! flow plus the final standings.
//!
//! Options: --skills, --seed, feature toggles per wheel modifier

use clap::Parser;
use colored::Colorize;
use gluecksrad::gameplay::GameConfig;
use gluecksrad::gameplay::PlayerSpec;
use gluecksrad::gameplay::RoundSet;
use gluecksrad::players::Table;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One skill (0-200) per seat.
    #[arg(long, value_delimiter = ',', default_value = "180,90,30")]
    skills: Vec<u8>,
    /// RNG seed; omit for a fresh game every run.
    #[arg(long)]
    seed: Option<u64>,
    /// Round carrying the mystery faces.
    #[arg(long)]
    mystery: Option<u8>,
    /// Round carrying the risk face.
    #[arg(long)]
    risk: Option<u8>,
    /// Round carrying the express face.
    #[arg(long)]
    express: Option<u8>,
    /// Round carrying the million wedge.
    #[arg(long)]
    million: Option<u8>,
    #[arg(long)]
    jackpot: bool,
    #[arg(long)]
    gift_tags: bool,
    #[arg(long)]
    free_play: bool,
    #[arg(long)]
    toss_up: bool,
    /// Free-form puzzle theme hint for the provider.
    #[arg(long, default_value = "")]
    theme: String,
    /// Emit the final snapshot as JSON instead of the standings table.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        config.players = self
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| PlayerSpec::ai(format!("KI {}", i + 1), *skill))
            .collect();
        config.theme = self.theme.clone();
        config.toss_up = self.toss_up;
        config.jackpot = self.jackpot;
        config.gift_tags = self.gift_tags;
        config.free_play = self.free_play;
        config.mystery = self.mystery.map_or(RoundSet::none(), RoundSet::only);
        config.risk = self.risk.map_or(RoundSet::none(), RoundSet::only);
        config.express = self.express.map_or(RoundSet::none(), RoundSet::only);
        config.million = self.million.map_or(RoundSet::none(), RoundSet::only);
        config
    }
}

fn main() -> anyhow::Result<()> {
    gluecksrad::log();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("showmatch seed {}", seed);
    let mut table = Table::new(args.config(), seed)?;
    let mut players = table.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.session().snapshot())?);
        return Ok(());
    }
    println!("{}", table.session());
    players.sort_by_key(|p| std::cmp::Reverse(p.banked));
    println!("{}", "ERGEBNIS".yellow().bold());
    for (place, player) in players.iter().enumerate() {
        let line = format!("{}. {}", place + 1, player);
        if place == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}
