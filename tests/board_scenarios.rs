use bitcheckers::bitwise::get_bit;
use bitcheckers::board::{CheckersBoard, Side, BLACK_START, WHITE_START};

#[test]
fn test_starting_position() {
    let board = CheckersBoard::new();
    assert_eq!(board.side_pieces(Side::Black), BLACK_START);
    assert_eq!(board.side_pieces(Side::White), WHITE_START);
    assert_eq!(board.piece_count(Side::Black), 12);
    assert_eq!(board.piece_count(Side::White), 12);
    assert!(board.is_consistent());

    // black starts on squares 40-51, white on 20-31
    let black: Vec<u32> = board.squares(Side::Black).collect();
    let white: Vec<u32> = board.squares(Side::White).collect();
    assert_eq!(black, (40..52).collect::<Vec<u32>>());
    assert_eq!(white, (20..32).collect::<Vec<u32>>());

    assert_eq!(board, CheckersBoard::default());
}

#[test]
fn test_simple_move() {
    let mut board = CheckersBoard::new();
    assert!(board.is_move_legal(33));

    board.move_piece(40, 33, Side::Black);
    let black = board.side_pieces(Side::Black);
    assert!(!get_bit(black, 40));
    assert!(get_bit(black, 33));
    assert_eq!(board.side_pieces(Side::White), WHITE_START);
    assert_eq!(board.piece_count(Side::Black), 12);
    assert!(board.is_consistent());

    // destination now occupied
    assert!(!board.is_move_legal(33));
}

#[test]
fn test_capture_after_move() {
    let mut board = CheckersBoard::new();
    board.move_piece(40, 33, Side::Black);

    // white holds square 23, square 14 is empty
    assert!(board.can_capture(23, 14, Side::Black));
    assert!(board.capture_piece(33, 23, 14, Side::Black));

    let black = board.side_pieces(Side::Black);
    let white = board.side_pieces(Side::White);
    assert!(!get_bit(white, 23));
    assert!(!get_bit(black, 33));
    assert!(get_bit(black, 14));
    assert_eq!(board.piece_count(Side::White), 11);
    assert_eq!(board.piece_count(Side::Black), 12);
    assert!(board.is_consistent());
}

#[test]
fn test_illegal_capture_is_a_silent_no_op() {
    let mut board = CheckersBoard::new();
    let before = board;

    // destination 30 is occupied by white
    assert!(!board.can_capture(23, 30, Side::Black));
    assert!(!board.capture_piece(40, 23, 30, Side::Black));
    assert_eq!(board, before);

    // square 5 holds no white piece
    assert!(!board.can_capture(5, 14, Side::Black));
    assert!(!board.capture_piece(40, 5, 14, Side::Black));
    assert_eq!(board, before);
}

#[test]
fn test_white_captures_symmetrically() {
    let mut board = CheckersBoard::new();
    board.move_piece(31, 38, Side::White);

    // black holds square 41, square 52 is empty
    assert!(board.can_capture(41, 52, Side::White));
    assert!(board.capture_piece(38, 41, 52, Side::White));

    let white = board.side_pieces(Side::White);
    let black = board.side_pieces(Side::Black);
    assert!(!get_bit(black, 41));
    assert!(!get_bit(white, 38));
    assert!(get_bit(white, 52));
    assert_eq!(board.piece_count(Side::Black), 11);
    assert!(board.is_consistent());
}

#[test]
fn test_side_rendering_matches_masks() {
    let board = CheckersBoard::new();
    assert_eq!(board.side_hexadecimal(Side::Black), "fff0000000000");
    assert_eq!(board.side_hexadecimal(Side::White), "fff00000");
    assert_eq!(
        board.side_binary(Side::White),
        format!("{:b}", WHITE_START)
    );
    assert_eq!(
        board.side_binary(Side::Black),
        format!("{:b}", BLACK_START)
    );
}

#[test]
fn test_opponent_flips() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
    assert_eq!(Side::Black.name(), "Black");
    assert_eq!(Side::White.name(), "White");
}
