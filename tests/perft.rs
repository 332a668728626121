use chessrules::{perft, Board, Color, Square};

fn lone_kings() -> Board {
    let mut board = Board::new();
    board.set_piece(Square::new(0, 4), Some(Color::White.king()));
    board.set_piece(Square::new(7, 4), Some(Color::Black.king()));
    board
}

fn castling_corners() -> Board {
    let mut board = lone_kings();
    for color in Color::ALL {
        board.set_piece(Square::new(color.backrank(), 0), Some(color.rook()));
        board.set_piece(Square::new(color.backrank(), 7), Some(color.rook()));
    }
    board
}

// macro for generating tests
macro_rules! gen_tests {
    ($($fn_name:ident, $setup:expr, $depth:expr, $nodes:expr,)+) => {
        $(
            #[test]
            fn $fn_name() {
                let board: Board = $setup;
                assert_eq!(perft(&board, $depth), $nodes);
            }
        )+
    }
}

gen_tests! {
    test_standard_1,     Board::standard(),  1, 20,
    test_standard_2,     Board::standard(),  2, 400,
    test_standard_3,     Board::standard(),  3, 8_902,
    test_lone_kings_1,   lone_kings(),       1, 5,
    test_lone_kings_2,   lone_kings(),       2, 25,
    test_castling_1,     castling_corners(), 1, 26,
}
