use anyhow::{bail, Context, Result};
use clap::Parser;

use chess_core::config::CoreConfig;
use chess_core::eval::PsqtAccumulator;
use chess_core::game_repr::{EngineTables, Position, SliderMagics, START_FEN};
use chess_core::tt::TranspositionTable;

#[derive(Parser)]
#[command(name = "chess_core")]
#[command(about = "Replay moves on a position and check its incremental state after every step")]
struct Args {
    /// FEN of the starting position
    #[arg(short, long, default_value = START_FEN)]
    fen: String,

    /// Whitespace separated long algebraic moves, e.g. "e2e4 e7e5 g1f3"
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Seed for the Zobrist keys
    #[arg(long, default_value_t = CoreConfig::default().zobrist_seed)]
    zobrist_seed: u64,

    /// Plies of game history to reserve
    #[arg(long, default_value_t = CoreConfig::default().max_game_ply)]
    max_game_ply: usize,

    /// Search plies to reserve on top of the game history
    #[arg(long, default_value_t = CoreConfig::default().max_search_depth)]
    max_search_depth: usize,

    /// Transposition table size in megabytes
    #[arg(long, default_value_t = CoreConfig::default().tt_size_mb)]
    tt_size_mb: usize,

    /// Print the magic numbers found at startup and exit
    #[arg(long)]
    print_magics: bool,
}

impl Args {
    fn config(&self) -> CoreConfig {
        CoreConfig {
            max_game_ply: self.max_game_ply,
            max_search_depth: self.max_search_depth,
            zobrist_seed: self.zobrist_seed,
            tt_size_mb: self.tt_size_mb,
        }
    }
}

fn print_magics() {
    let magics = SliderMagics::find();
    for (name, table) in [("BISHOP_MAGICS", &magics.bishop), ("ROOK_MAGICS", &magics.rook)] {
        println!("pub const {}: [u64; 64] = [", name);
        for magic in table.iter() {
            println!("    {:#018x},", magic);
        }
        println!("];");
    }
}

fn check(pos: &Position<PsqtAccumulator>, step: &str) -> Result<()> {
    pos.verify()
        .with_context(|| format!("position inconsistent after {}: {}", step, pos.to_fen()))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    if args.print_magics {
        print_magics();
        return Ok(());
    }

    let config = args.config();
    let tables = if config.zobrist_seed == CoreConfig::default().zobrist_seed {
        EngineTables::global()
    } else {
        EngineTables::leak(&config)
    };

    let mut pos = Position::<PsqtAccumulator>::with_tables(&args.fen, tables, &config)
        .with_context(|| format!("cannot parse FEN '{}'", args.fen))?;
    let tt = TranspositionTable::new(config.tt_size_mb);

    println!("{}", pos);
    check(&pos, "setup")?;

    let mut played = Vec::new();
    for uci in args.moves.split_whitespace() {
        if pos.his_ply() >= config.history_capacity() {
            bail!("move list longer than the {} plies of reserved history", config.history_capacity());
        }
        let mv = pos
            .parse_move(uci)
            .with_context(|| format!("cannot apply '{}' to {}", uci, pos.to_fen()))?;
        pos.make_move_with(mv, &tt);
        check(&pos, uci)?;
        println!(
            "{:>6} {:016x} eval {:+} {}",
            uci,
            pos.key(),
            pos.accumulator().evaluate(pos.side()),
            pos.to_fen()
        );
        played.push(mv);
    }

    if pos.is_repetition() {
        println!("final position is a repetition");
    }
    if pos.is_fifty_move_draw() {
        println!("final position is drawn by the fifty-move rule");
    }

    for mv in played.iter().rev() {
        pos.unmake_move(*mv);
        check(&pos, &format!("unmaking {}", mv))?;
    }
    log::info!("unwound {} moves back to {}", played.len(), pos.to_fen());

    Ok(())
}
