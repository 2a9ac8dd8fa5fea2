use common::Square;
use termion::{clear, cursor};

use crate::board::{Position, QuantumPiece, Team, ALL_PIECE_TYPES};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    pub fn render_game_state(
        &mut self,
        position: &Position,
        current_turn: Team,
        last_move: Option<&str>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.buffer.push_str(&render_board(position));

        self.buffer.push_str(&format!("Turn: {}\n", current_turn));
        if let Some(last_move) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }
        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

/// Text for one board cell: the tag letter of a confirmed piece, or `?N` /
/// `!N` for a white / black piece with N remaining possibilities.
fn cell(piece: &QuantumPiece) -> String {
    match piece.to_char() {
        Some(c) => c.to_string(),
        None => {
            let marker = match piece.team {
                Team::White => '?',
                Team::Black => '!',
            };
            format!("{}{}", marker, piece.possibilities.len())
        }
    }
}

/// The board framed with coordinates, followed by a legend of every
/// superposed piece's possibilities.
pub fn render_board(position: &Position) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("    a   b   c   d   e   f   g   h\n");
    out.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

    for rank in (0..8u8).rev() {
        out.push_str(&format!("{} │", rank + 1));
        for file in 0..8u8 {
            let square = Square::new(file, rank);
            let text = match position.piece_at(square) {
                Some(piece) => cell(piece),
                None => if (rank + file) % 2 == 0 { " " } else { "·" }.to_string(),
            };
            out.push_str(&format!("{:^3}│", text));
        }
        out.push_str(&format!(" {}\n", rank + 1));

        if rank > 0 {
            out.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
        } else {
            out.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        }
    }
    out.push_str("    a   b   c   d   e   f   g   h\n\n");

    let mut superposed: Vec<&QuantumPiece> = position
        .pieces()
        .iter()
        .filter(|piece| piece.is_active() && piece.possibilities.is_superposed())
        .collect();
    superposed.sort_by_key(|piece| piece.square);

    if !superposed.is_empty() {
        out.push_str("Superposed pieces:\n");
        for piece in superposed {
            out.push_str(&format!(
                "  {} ({}): {}\n",
                piece.square, piece.team, piece.possibilities
            ));
        }
        out.push('\n');
    }

    for &team in &Team::ALL {
        let counts = position.count_captured(team);
        let mut entries: Vec<String> = Vec::new();
        for &piece_type in ALL_PIECE_TYPES.iter() {
            let tag = match team {
                Team::White => piece_type.to_char(),
                Team::Black => piece_type.to_char().to_ascii_lowercase(),
            };
            for _ in 0..counts[piece_type] {
                entries.push(tag.to_string());
            }
        }
        // captured before their type was known
        entries.extend(
            position
                .pieces()
                .iter()
                .filter(|piece| {
                    piece.team == team && piece.captured && piece.possibilities.is_superposed()
                })
                .map(cell),
        );

        let captured = entries.join(" ");
        if !captured.is_empty() {
            out.push_str(&format!("Captured {}: {}\n", team, captured));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceType, Possibilities};
    use crate::quantum_move::attempt_move;
    use common::square::*;

    #[test]
    fn test_starting_position_cells() {
        let board = render_board(&Position::starting_position());
        assert!(board.contains("1 │?6 │?6 │?6 │?6 │?6 │?6 │?6 │?6 │ 1"));
        assert!(board.contains("8 │!6 │!6 │!6 │!6 │!6 │!6 │!6 │!6 │ 8"));
        assert!(board.contains("  a1 (white): PNBRQK"));
        assert!(board.contains("  h8 (black): PNBRQK"));
        assert!(!board.contains("Captured"));
    }

    #[test]
    fn test_confirmed_and_partial_pieces() {
        let position = Position::starting_position();
        let b2 = position.board().get(B2).unwrap();
        let a7 = position.board().get(A7).unwrap();
        let position = attempt_move(&position, b2, C4).unwrap().position;
        let position = attempt_move(&position, a7, A6).unwrap().position;

        let board = render_board(&position);
        assert!(board.contains("4 │ · │   │ N │"));
        assert!(board.contains("6 │!4 │"));
        assert!(board.contains("  a6 (black): PRQK"));
    }

    #[test]
    fn test_captured_pieces_are_listed() {
        let mut queen = QuantumPiece::confirmed(2, Team::Black, PieceType::Queen, D8);
        queen.captured = true;
        let mut rook = QuantumPiece::confirmed(4, Team::Black, PieceType::Rook, A8);
        rook.captured = true;
        let mut unknown = QuantumPiece::superposed(5, Team::Black, H8)
            .with_possibilities(Possibilities::from_tags("NBR").unwrap());
        unknown.captured = true;
        let position = Position::from_pieces(vec![
            QuantumPiece::confirmed(0, Team::White, PieceType::King, E1),
            QuantumPiece::confirmed(1, Team::Black, PieceType::King, E8),
            queen,
            QuantumPiece::confirmed(3, Team::White, PieceType::Rook, A1)
                .with_possibilities(Possibilities::from_tags("RQ").unwrap()),
            unknown,
            rook,
        ])
        .unwrap();

        let board = render_board(&position);
        assert!(board.contains("Captured black: r q !3"));
        assert!(!board.contains("Captured white"));
        assert!(board.contains("1 │?2 │"));
    }

    #[test]
    fn test_render_game_state_buffer() {
        let mut display = GameDisplay::new();
        display.render_game_state(
            &Position::starting_position(),
            Team::White,
            Some("b2c4"),
            None,
        );
        let buffer = display.buffer();
        assert!(buffer.contains("Turn: white"));
        assert!(buffer.contains("Last move: b2c4"));
    }
}
