//! Destination generation under the simplified rules: no check safety, no
//! castling, en passant or promotion.

use crate::board::{Board, Piece, PieceKind, Square};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Quiet,
    Capture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Destination {
    pub square: Square,
    pub kind: MoveKind,
}

impl Destination {
    pub fn is_capture(&self) -> bool { self.kind == MoveKind::Capture }
}

const KNIGHT_STEPS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Every square `piece` standing on `from` may move to. The result has no
/// duplicates and never contains a square held by the mover's own color.
pub fn destinations(board: &Board, from: Square, piece: Piece) -> Vec<Destination> {
    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn(board, from, piece, &mut out),
        PieceKind::Knight => steps(board, from, piece, &KNIGHT_STEPS, &mut out),
        PieceKind::King => steps(board, from, piece, &KING_STEPS, &mut out),
        PieceKind::Rook => rays(board, from, piece, &ORTHOGONAL, &mut out),
        PieceKind::Bishop => rays(board, from, piece, &DIAGONAL, &mut out),
        PieceKind::Queen => {
            rays(board, from, piece, &ORTHOGONAL, &mut out);
            rays(board, from, piece, &DIAGONAL, &mut out);
        }
    }
    out
}

/// Destinations for whatever stands on `from`; empty when the square is empty.
pub fn destinations_from(board: &Board, from: Square) -> Vec<Destination> {
    board.get(from).map(|p| destinations(board, from, p)).unwrap_or_default()
}

// Empty or enemy squares are reachable; friendly ones are not.
fn classify(board: &Board, sq: Square, piece: Piece) -> Option<MoveKind> {
    match board.get(sq) {
        None => Some(MoveKind::Quiet),
        Some(other) if other.color != piece.color => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

fn pawn(board: &Board, from: Square, piece: Piece, out: &mut Vec<Destination>) {
    let fwd = piece.color.forward();
    if let Some(one) = from.offset(fwd, 0) {
        if board.get(one).is_none() {
            out.push(Destination { square: one, kind: MoveKind::Quiet });
            if from.row() == piece.color.pawn_row() {
                if let Some(two) = from.offset(2 * fwd, 0) {
                    if board.get(two).is_none() {
                        out.push(Destination { square: two, kind: MoveKind::Quiet });
                    }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(diag) = from.offset(fwd, dc) {
            if let Some(MoveKind::Capture) = classify(board, diag, piece) {
                out.push(Destination { square: diag, kind: MoveKind::Capture });
            }
        }
    }
}

fn steps(board: &Board, from: Square, piece: Piece, deltas: &[(i32, i32)], out: &mut Vec<Destination>) {
    for &(dr, dc) in deltas {
        let Some(sq) = from.offset(dr, dc) else { continue };
        if let Some(kind) = classify(board, sq, piece) {
            out.push(Destination { square: sq, kind });
        }
    }
}

fn rays(board: &Board, from: Square, piece: Piece, dirs: &[(i32, i32)], out: &mut Vec<Destination>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(sq) = cur.offset(dr, dc) {
            match classify(board, sq, piece) {
                Some(MoveKind::Quiet) => out.push(Destination { square: sq, kind: MoveKind::Quiet }),
                Some(MoveKind::Capture) => {
                    out.push(Destination { square: sq, kind: MoveKind::Capture });
                    break;
                }
                None => break,
            }
            cur = sq;
        }
    }
}
