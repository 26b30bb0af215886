use anyhow::{Context, Result};
use clap::Parser;
use hotseat::session::{Session, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two players, one board: a hot-seat chess front end", long_about = None)]
struct Args {
    /// Print JSON snapshots instead of text diagrams
    #[arg(long)]
    json: bool,

    /// Use FEN letters instead of Unicode chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Don't redraw the board after every click
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = SessionConfig { json: args.json, ascii: args.ascii, quiet: args.quiet };
    let mut session = Session::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script {
        Some(path) => {
            let f = File::open(&path).with_context(|| format!("open script: {}", path.display()))?;
            session.run_loop(BufReader::new(f), &mut out)
        }
        None => {
            if !args.quiet && !args.json {
                writeln!(out, "White moves first. Type 'help' for commands.")?;
                session.handle("show", &mut out)?;
            }
            session.run_loop(io::stdin().lock(), &mut out)
        }
    }
}
