use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use sweeper_core::{CellCount, Coord, FieldGeneration, GameConfig, GameEngine, Seed, Settings};

use script::{Move, parse_script};

mod render;
mod script;

#[derive(Parser, Debug)]
#[command(version, about = "Replay a seeded minesweeper game from a list of moves")]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[arg(long, default_value_t = 9)]
    rows: Coord,

    #[arg(long, default_value_t = 9)]
    cols: Coord,

    #[arg(long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<Seed>,

    /// JSON settings file, missing keys keep their defaults
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Override field generation: random, safe-start or pure-logic
    #[arg(long, value_parser = parse_field_generation)]
    field: Option<FieldGeneration>,

    #[arg(long)]
    no_chord: bool,

    #[arg(long)]
    no_question_marks: bool,

    /// Opening a mine does nothing
    #[arg(long)]
    dev_mode: bool,

    /// File with one move per line
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Moves such as `open:3,4`, `mark:0,0`, `restart` or `new`, applied after the script
    moves: Vec<Move>,
}

fn parse_field_generation(value: &str) -> Result<FieldGeneration> {
    serde_json::from_value(serde_json::Value::String(value.to_owned()))
        .with_context(|| format!("unknown field generation {value:?}"))
}

impl Args {
    fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Settings::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Settings::default(),
        };

        if let Some(field) = self.field {
            settings.field_generation = field;
        }
        settings.enable_chord &= !self.no_chord;
        settings.show_question_marks &= !self.no_question_marks;
        settings.dev_mode |= self.dev_mode;
        Ok(settings)
    }

    fn load_moves(&self) -> Result<Vec<Move>> {
        let mut moves = match &self.script {
            Some(path) => {
                let script = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_script(&script).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Vec::new(),
        };
        moves.extend(self.moves.iter().copied());
        Ok(moves)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.load_settings()?;
    let moves = args.load_moves()?;
    let config = GameConfig::try_new((args.rows, args.cols), args.mines)
        .context("invalid board configuration")?;
    debug!("settings: {:?}", settings);

    let mut engine = GameEngine::new(config, args.seed, settings);
    info!("seed: {}", engine.seed());

    for (index, action) in moves.into_iter().enumerate() {
        match action {
            Move::Open(coords) => {
                let outcome = engine
                    .open_cell(coords)
                    .with_context(|| format!("move {}: open {:?}", index + 1, coords))?;
                if outcome.has_update() {
                    debug!("open {:?}: {:?}", coords, outcome);
                }
            }
            Move::Mark(coords) => {
                let outcome = engine
                    .cycle_mark(coords)
                    .with_context(|| format!("move {}: mark {:?}", index + 1, coords))?;
                if outcome.has_update() {
                    debug!("mark {:?}: {:?}", coords, outcome);
                }
            }
            Move::Restart => engine.restart_game(),
            Move::NewGame => {
                engine.new_game();
                info!("seed: {}", engine.seed());
            }
        }
    }

    print!("{}", render::render_board(&engine));
    println!(
        "state: {:?}, mines left: {}, seed: {}",
        engine.state(),
        engine.mines_left(),
        engine.seed()
    );
    if let Some(record) = engine.record() {
        println!("{}", record.to_json()?);
    }
    Ok(())
}
