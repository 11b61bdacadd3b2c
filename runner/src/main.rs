mod driver;
mod script;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::replay::{
    ReplayPlayer, ReplayRecorder, generate_replay_filename, load_replay, save_replay,
};
use snake_engine::config::Validate;
use snake_engine::snake::{DEFAULT_CONFIG_FILE, GameConfig, get_config_manager};
use snake_engine::version::VERSION;
use snake_engine::{GameState, log, logger};

use driver::{run_replay, run_script};
use script::parse_script;

#[derive(Parser)]
#[command(name = "snake_runner", version, about = "Plays a scripted or recorded snake game without a display")]
struct Args {
    /// YAML game config; defaults are used when the file does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// One character per tick: U, D, L, R to turn, '.' to keep going.
    #[arg(long, conflicts_with = "replay")]
    script: Option<String>,

    /// Play back a saved replay instead of a script.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Record the scripted game; pass a directory to get a generated file name.
    #[arg(long, conflicts_with = "replay")]
    save_replay: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

/// Applies the command-line grid and seed overrides, then checks the result
/// against the same limits as a config file.
fn apply_overrides(config: &mut GameConfig, args: &Args) -> Result<(), String> {
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config).get_config()?;
    apply_overrides(&mut config, &args)?;

    if let Some(replay_path) = args.replay {
        let mut player = ReplayPlayer::new(load_replay(&replay_path)?);
        log!(
            "Replaying {} (engine {}, seed {})",
            replay_path.display(),
            player.engine_version(),
            player.seed()
        );
        let mut game = player.build_game()?;
        let summary = run_replay(&mut game, &mut player, config.tick_limit);
        print!("{}", game);
        println!("Score: {} after {} ticks", summary.score, summary.ticks);
        return Ok(());
    }

    let script = parse_script(args.script.as_deref().unwrap_or_default())?;
    let mut game = GameState::from_config(&config)?;
    log!(
        "Starting {}x{} game with seed {}, {} scripted ticks",
        game.rows(),
        game.cols(),
        game.seed(),
        script.len()
    );

    let mut recorder = args
        .save_replay
        .as_ref()
        .map(|_| ReplayRecorder::new(VERSION.to_string(), game.rows(), game.cols(), game.seed()));

    let summary = run_script(&mut game, &script, config.tick_limit, recorder.as_mut());

    if let (Some(path), Some(recorder)) = (args.save_replay, recorder.as_mut()) {
        let path = if path.is_dir() {
            path.join(generate_replay_filename(VERSION))
        } else {
            path
        };
        save_replay(&path, &recorder.finalize(game.ticks()))?;
        log!("Replay saved to {}", path.display());
    }

    print!("{}", game);
    println!("Score: {} after {} ticks", summary.score, summary.ticks);
    Ok(())
}
