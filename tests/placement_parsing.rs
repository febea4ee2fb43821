use mirrorboard::chess::board::Board;
use mirrorboard::chess::core::{Color, Piece, PieceKind};
use mirrorboard::Error;
use pretty_assertions::assert_eq;

fn legal_placement(input: &str) {
    let board = Board::try_from(input).expect("we are parsing valid placement: {input}");
    assert_eq!(board.to_string(), input);
}

#[test]
fn basic_placements() {
    legal_placement("RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr");
    legal_placement("8/8/8/8/8/8/8/8");
    legal_placement("2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4");
    legal_placement("r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2");
    legal_placement("7k/8/8/8/8/8/8/K7");
}

#[test]
fn starting_placement_matches_initialization() {
    assert_eq!(
        Board::try_from("RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr").unwrap(),
        Board::starting()
    );
}

#[test]
fn pawn_flag_follows_rank() {
    let board = Board::try_from("8/P6p/8/8/8/8/P6p/8").unwrap();
    assert_eq!(board.get("A7").unwrap(), Some(Piece::pawn(Color::White)));
    assert_eq!(
        board.get("A2").unwrap(),
        Some(Piece::new(Color::White, PieceKind::Pawn { unmoved: false }))
    );
    assert_eq!(board.get("H2").unwrap(), Some(Piece::pawn(Color::Black)));
    assert_eq!(
        board.get("H7").unwrap(),
        Some(Piece::new(Color::Black, PieceKind::Pawn { unmoved: false }))
    );
}

#[test]
fn clean_board_str() {
    assert!(Board::try_from("placement 8/8/8/8/8/8/8/8").is_ok());
    assert!(Board::try_from("\n 8/8/8/8/8/8/8/8 \n").is_ok());
    assert!(Board::from_placement(" 8/8/8/8/8/8/8/8").is_err());
}

#[test]
fn invalid_placements() {
    for input in [
        "",
        "8/8/8/8/8/8/8",
        "8/8/8/8/8/8/8/8/8",
        "9/8/8/8/8/8/8/8",
        "0/8/8/8/8/8/8/8",
        "7/8/8/8/8/8/8/8",
        "45/8/8/8/8/8/8/8",
        "RNBKQBNRR/8/8/8/8/8/8/8",
        "8/8/8/8/8/8/8/7x",
        "8/8/8/8/♔7/8/8/8",
    ] {
        assert!(
            matches!(Board::try_from(input), Err(Error::InvalidPlacement(_))),
            "{input:?}"
        );
    }
}
