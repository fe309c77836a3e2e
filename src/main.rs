//! Bitcheckers demonstration entry point: prints the starting board,
//! plays one scripted move and one capture, then shows each utility
//! operation once.

use bitcheckers::bitwise;
use bitcheckers::board::{CheckersBoard, Side};
use bitcheckers::error::BitwiseResult;

fn print_board_binary(board: &CheckersBoard) {
    for side in [Side::Black, Side::White] {
        println!(
            "{} Pieces (Binary): {}",
            side.name(),
            board.side_binary(side)
        );
    }
}

fn print_board_hexadecimal(board: &CheckersBoard) {
    for side in [Side::Black, Side::White] {
        println!(
            "{} Pieces (Hexadecimal): {}",
            side.name(),
            board.side_hexadecimal(side)
        );
    }
}

fn run() -> BitwiseResult<()> {
    let mut board = CheckersBoard::new();

    print_board_binary(&board);
    print_board_hexadecimal(&board);

    if board.is_move_legal(33) {
        board.move_piece(40, 33, Side::Black);
        println!("Moved black piece from 40 to 33.");
    }

    if board.can_capture(23, 14, Side::Black) {
        board.capture_piece(33, 23, 14, Side::Black);
        println!("Captured white piece at position 23.");
    }

    print_board_binary(&board);
    print_board_hexadecimal(&board);

    println!("Set Bit Example: {}", bitwise::set_bit(0u64, 3));
    println!("Clear Bit Example: {}", bitwise::clear_bit(15u64, 1));
    println!("Toggle Bit Example: {}", bitwise::toggle_bit(8u64, 3));
    println!("Get Bit Example: {}", bitwise::get_bit(8u64, 3));

    println!("Addition Example: {}", bitwise::add(5, 3));
    println!("Subtraction Example: {}", bitwise::subtract(10, 4));
    println!("Multiplication Example: {}", bitwise::multiply(5, 4));
    println!("Division Example: {}", bitwise::divide(20, 4)?);

    println!("Decimal to Binary Example: {}", bitwise::decimal_to_binary(10));
    println!(
        "Decimal to Hexadecimal Example: {}",
        bitwise::decimal_to_hexadecimal(255)
    );
    println!(
        "Binary to Decimal Example: {}",
        bitwise::binary_to_decimal("1010")?
    );
    println!(
        "Hexadecimal to Decimal Example: {}",
        bitwise::hexadecimal_to_decimal("ff")?
    );

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }
}
