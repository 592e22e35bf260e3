use super::*;
use shared::domain::PieceKind;

fn sq(text: &str) -> Square {
    text.parse().expect("square")
}

#[test]
fn renders_start_position_from_white() {
    let board = TerminalBoard::new();
    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "8  r n b q k b n r");
    assert_eq!(lines[7], "1  R N B Q K B N R");
    assert_eq!(lines[8], "   a b c d e f g h");
}

#[test]
fn flipped_board_shows_black_at_the_bottom() {
    let mut board = TerminalBoard::new();
    board.flip_orientation();
    assert_eq!(board.orientation(), Color::Black);

    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1  R N B K Q B N R");
    assert_eq!(lines[7], "8  r n b k q b n r");
    assert_eq!(lines[8], "   h g f e d c b a");
}

#[test]
fn dropped_piece_moves_until_next_position() {
    let mut board = TerminalBoard::new();
    let piece = board.drop_piece(sq("e2"), sq("e4"));
    assert_eq!(piece, Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(board.piece_at(sq("e2")), None);

    board.set_position(START_FEN, false);
    assert_eq!(
        board.piece_at(sq("e2")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(board.piece_at(sq("e4")), None);
}

#[test]
fn malformed_fen_keeps_previous_position() {
    let mut board = TerminalBoard::new();
    let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    board.set_position(fen, false);
    board.set_position("not a fen", false);
    assert_eq!(board.fen(), fen);
    assert_eq!(
        board.piece_at(sq("e5")),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn start_restores_initial_position() {
    let mut board = TerminalBoard::new();
    board.set_position("8/8/8/8/8/8/8/K6k w - - 0 1", false);
    board.start();
    assert_eq!(board.fen(), START_FEN);
    board.set_draggable(false);
    assert!(!board.is_draggable());
}
