use crate::board::Square;
use crate::chat::{ChatLine, ChatLog};
use crate::game::{ClickOutcome, Game};
use crate::render::{render, RenderOptions};
use crate::snapshot::Snapshot;
use anyhow::{bail, Context, Result};
use log::warn;
use std::io::{BufRead, Write};

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    /// Emit JSON snapshots, events and chat lines instead of text.
    pub json: bool,
    /// FEN letters instead of Unicode glyphs in text diagrams.
    pub ascii: bool,
    /// Skip the automatic re-render after clicks and resets.
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  click <square>   select, deselect or move (e2, or row,col like 6,4)
  reset            start a new game
  say <text>       post a chat message as the side to move
  show             print the board
  json             print a JSON snapshot
  chat             print the chat log
  moves            list highlighted destinations
  quit             leave";

/// Line-oriented front end: reads commands, drives the game, re-renders.
pub struct Session {
    game: Game,
    chat: ChatLog,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self { Self::with_game(Game::new(), config) }

    pub fn with_game(game: Game, config: SessionConfig) -> Self {
        Self { game, chat: ChatLog::new(), config }
    }

    pub fn game(&self) -> &Game { &self.game }
    pub fn chat(&self) -> &ChatLog { &self.chat }

    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };
        match cmd {
            "" => {}
            "click" | "c" => {
                let sq: Square = rest.parse().with_context(|| format!("click needs a square, got {rest:?}"))?;
                let outcome = self.game.click(sq);
                if let ClickOutcome::Moved(m) = outcome {
                    let tag = if m.captured.is_some() { "x" } else { "-" };
                    writeln!(out, "{} {}{}{}", m.piece.to_char(), m.from, tag, m.to)?;
                }
                self.flush_events(out)?;
                if !matches!(outcome, ClickOutcome::Ignored) { self.redraw(out)?; }
            }
            "reset" => {
                self.game.on_reset();
                self.flush_events(out)?;
                self.redraw(out)?;
            }
            "say" => {
                if let Some(l) = self.chat.say(self.game.turn(), rest) { self.print_line(&l, out)?; }
            }
            "show" | "board" => self.draw(out, false)?,
            "json" => self.draw(out, true)?,
            "chat" => {
                for l in self.chat.lines() { self.print_line(l, out)?; }
            }
            "moves" => {
                let names: Vec<String> = self.game.highlights().iter()
                    .map(|d| if d.is_capture() { format!("x{}", d.square) } else { d.square.to_string() })
                    .collect();
                writeln!(out, "{}", names.join(" "))?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("unknown command {other:?} (try 'help')"),
        }
        Ok(Flow::Continue)
    }

    /// Runs until `quit` or end of input. Bad lines are reported and skipped.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("read command")?;
            match self.handle(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!("rejected {:?}: {e:#}", line.trim());
                    writeln!(out, "error: {e:#}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn flush_events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for ev in self.game.take_events() {
            let l = self.chat.record(&ev);
            if self.config.json {
                writeln!(out, "{}", serde_json::to_string(&ev)?)?;
            } else {
                writeln!(out, "{l}")?;
            }
        }
        Ok(())
    }

    fn print_line<W: Write>(&self, line: &ChatLine, out: &mut W) -> Result<()> {
        if self.config.json {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        } else {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.config.quiet { return Ok(()); }
        self.draw(out, self.config.json)
    }

    fn draw<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            writeln!(out, "{}", Snapshot::of(&self.game).to_json()?)?;
        } else {
            write!(out, "{}", render(&self.game, RenderOptions { ascii: self.config.ascii }))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run_loop(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unknown_commands_are_reported_and_skipped() {
        let mut s = Session::new(SessionConfig { quiet: true, ..Default::default() });
        let text = run(&mut s, "dance\nclick e9\nclick e2\nclick e4\n");
        assert!(text.contains("error: unknown command \"dance\""), "{text}");
        assert!(text.contains("error: click needs a square"), "{text}");
        assert!(text.contains("P e2-e4"), "{text}");
        assert_eq!(s.game().turn(), crate::board::Color::Black);
    }

    #[test]
    fn quit_stops_reading() {
        let mut s = Session::new(SessionConfig { quiet: true, ..Default::default() });
        run(&mut s, "quit\nclick e2\n");
        assert_eq!(s.game().selection(), None);
    }
}
