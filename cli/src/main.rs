mod console;
mod render;

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::{
    FirstPlayerMode, Game, GameConfig, GameOutcome, GameRunner, PlayerKind, SearchFrame,
    SessionRng, WinningLine, log, logger,
};

use console::ConsoleMoves;
use render::{render_board, render_frame, render_outcome};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerArg {
    Human,
    Ai,
}

impl From<PlayerArg> for PlayerKind {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Human => PlayerKind::Human,
            PlayerArg::Ai => PlayerKind::Ai,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    Random,
    A,
    B,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::A => FirstPlayerMode::A,
            FirstArg::B => FirstPlayerMode::B,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax engine")]
struct Args {
    /// YAML config file; missing file means defaults.
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    /// Write the effective config back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    no_shortcuts: bool,

    /// Show the engine's search step by step.
    #[arg(long)]
    visualize: bool,

    #[arg(long)]
    step_delay_ms: Option<u64>,

    #[arg(long, value_enum)]
    player_a: Option<PlayerArg>,

    #[arg(long, value_enum)]
    player_b: Option<PlayerArg>,

    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Number of games when no human is playing.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

impl Args {
    fn apply(&self, config: &mut GameConfig) {
        if self.no_shortcuts {
            config.search.use_opening_shortcuts = false;
        }
        if self.visualize {
            config.search.visualize = true;
        }
        if let Some(delay) = self.step_delay_ms {
            config.search.step_delay_ms = delay;
        }
        if let Some(player) = self.player_a {
            config.player_a = player.into();
        }
        if let Some(player) = self.player_b {
            config.player_b = player.into();
        }
        if let Some(first) = self.first {
            config.first_player = first.into();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply(&mut config);
    config.validate()?;
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved to {}", args.config);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let has_human =
        config.player_a == PlayerKind::Human || config.player_b == PlayerKind::Human;
    let step_delay = config.search.step_delay();
    let mut runner = GameRunner::new(config, rng);
    let stdin = io::stdin();
    let mut moves = ConsoleMoves::new(stdin.lock(), io::stdout());

    let mut played = 0;
    loop {
        let first = runner.pick_first_player();
        let mut game = Game::new(first);
        log!("New game, {} moves first", first);

        let mut on_game_over = |outcome: GameOutcome, line: Option<WinningLine>| {
            println!("\n{}", render_outcome(outcome));
            log!("Game over: {:?}, line {:?}", outcome, line.map(|line| line.cells));
        };
        let on_frame = |frame: &SearchFrame| {
            println!("\n{}", render_frame(frame));
            let _ = io::stdout().flush();
            if !step_delay.is_zero() {
                std::thread::sleep(step_delay);
            }
        };

        if runner.run(&mut game, &mut moves, &mut on_game_over, on_frame).is_none() {
            break;
        }
        println!("{}", render_board(game.board(), game.winning_line().as_ref()));
        played += 1;

        let again = if has_human {
            moves.confirm("Play again?")
        } else {
            played < args.games
        };
        if !again {
            break;
        }
    }

    Ok(())
}
