use anyhow::{Context, Result};
use clap::Parser;
use hotseat::perft::{perft, perft_divide};
use hotseat::{Board, Color};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Count move paths under the hot-seat rules")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Piece placement (FEN first field) or "startpos"
    #[arg(value_name = "PLACEMENT", default_value = "startpos")]
    placement: String,
    /// Side to move first: 'w' or 'b'
    #[arg(long, default_value = "w")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn parse_side(s: &str) -> Result<Color> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid side: use 'w' or 'b'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let side = parse_side(&args.side)?;
    let board = if args.placement == "startpos" {
        Board::startpos()
    } else {
        Board::from_placement(&args.placement).context("parse placement")?
    };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let t0 = Instant::now();
    let nodes = if args.divide || args.threads > 1 {
        let mut split = pool.install(|| perft_divide(&board, side, args.depth));
        split.sort_by_key(|((from, to), _)| (*from, *to));
        if args.divide {
            for ((from, to), n) in &split { println!("{from}{to}: {n}"); }
        }
        if args.depth == 0 { 1 } else { split.iter().map(|(_, n)| n).sum() }
    } else {
        perft(&board, side, args.depth)
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
