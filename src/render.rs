use crate::board::{Color, Square};
use crate::game::Game;
use crate::movegen::MoveKind;

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// FEN letters instead of Unicode chess glyphs.
    pub ascii: bool,
}

/// Full text diagram of the game: board with rank/file labels, the selected
/// square in brackets, quiet destinations as `*` and captures as `x`
/// markers, then the turn and score lines.
pub fn render(game: &Game, opts: RenderOptions) -> String {
    let board = game.board();
    let selected = game.selection();
    let mut out = String::new();
    for row in 0..8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8 {
            let Ok(sq) = Square::new(row, col) else { continue };
            let mark = game.highlights().iter().find(|d| d.square == sq).map(|d| d.kind);
            let body = match board.get(sq) {
                Some(p) if opts.ascii => p.to_char(),
                Some(p) => p.glyph(),
                None if sq.is_light() => '.',
                None => ':',
            };
            let cell = if selected == Some(sq) {
                format!("[{body}]")
            } else {
                match mark {
                    Some(MoveKind::Quiet) => " * ".to_string(),
                    Some(MoveKind::Capture) => format!("x{body} "),
                    None => format!(" {body} "),
                }
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    let scores = game.scores();
    out.push_str(&format!("Turn: {}\n", game.turn()));
    out.push_str(&format!("Score: White {} - Black {}\n", scores.get(Color::White), scores.get(Color::Black)));
    out
}
