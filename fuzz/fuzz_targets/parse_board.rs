#![no_main]
use libfuzzer_sys::fuzz_target;
use mirrorboard::chess::board::Board;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Board::from_placement(s) {
            let printed = board.to_string();
            assert_eq!(Board::from_placement(&printed).unwrap(), board);
        }
    }
});
