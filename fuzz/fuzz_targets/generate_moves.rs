#![no_main]
use libfuzzer_sys::fuzz_target;
use mirrorboard::chess::board::Board;
use mirrorboard::chess::core::Square;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };
    let board = match Board::try_from(input) {
        Ok(board) => board,
        Err(_) => return,
    };
    for square in Square::all() {
        match board.generate_moves(square) {
            Ok(moves) => {
                let mover = board.at(square).unwrap();
                for destination in moves {
                    assert_ne!(destination, square);
                    if let Some(occupant) = board.at(destination) {
                        assert_ne!(occupant.color, mover.color);
                    }
                }
            },
            Err(_) => assert!(board.at(square).is_none()),
        }
    }
});
