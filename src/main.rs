//! Headless autoplay runner (default binary).
//!
//! Drives the board engine the way a game loop would: spawn, steer, drop,
//! lock, clear, repeat. Steering is random, so games are short. Frames go to
//! stdout; lifecycle messages go to stderr.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use rand::Rng;

use tetris_board::core::{Board, BoardConfig, Piece, SimpleRng, SpawnOutcome};
use tetris_board::term::{BoardView, FrameBuffer, TerminalRenderer};

#[derive(Debug, Parser)]
#[command(name = "tetris-board", about = "Autoplay the tetris board engine")]
struct Cli {
    /// TOML board configuration (defaults apply if the file is missing)
    #[arg(long, default_value = "tetris-board.toml")]
    config: PathBuf,

    /// Seed for piece selection; overrides the config seed
    #[arg(long)]
    seed: Option<u32>,

    /// Stop after this many pieces
    #[arg(long, default_value_t = 200)]
    pieces: u32,

    /// Skip drawing frames, only print the summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = BoardConfig::load_or_default(&cli.config)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let seed = config.seed.unwrap_or_else(clock_seed);

    let mut board = Board::new(&config, SimpleRng::new(seed));
    let mut steering = rand::rng();

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut term = TerminalRenderer::new();

    let mut piece = Piece::default();
    let mut best = 0;

    for _ in 0..cli.pieces {
        let kind = match board.spawn_piece(&mut piece) {
            SpawnOutcome::Spawned(kind) => kind,
            SpawnOutcome::GameOver => {
                eprintln!("game over after {} pieces", board.piece_id());
                if !cli.quiet {
                    view.render_into(&board.snapshot(), &mut fb);
                    term.draw(&fb)?;
                }
                break;
            }
        };

        for _ in 0..steering.random_range(0..4) {
            piece.try_rotate(&mut board, true);
        }
        let shift: i32 = steering.random_range(-5..=5);
        for _ in 0..shift.abs() {
            if !piece.try_move(&mut board, shift.signum(), 0) {
                break;
            }
        }
        piece.hard_drop(&mut board);

        let outcome = board.lock_piece(&piece);
        best = best.max(board.session().score());

        if !cli.quiet {
            view.render_into(&board.snapshot(), &mut fb);
            term.draw(&fb)?;
            if outcome.lines_cleared > 0 {
                println!(
                    "{} cleared {} line(s) for {} points",
                    kind.as_str().to_uppercase(),
                    outcome.lines_cleared,
                    outcome.score_delta
                );
            }
        }
    }

    let s = board.session();
    eprintln!(
        "seed {seed}: score {} level {} lines {} (best score {best})",
        s.score(),
        s.level(),
        s.lines()
    );
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
