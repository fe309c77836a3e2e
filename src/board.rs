// Square mapping: bit i of a side's mask is square i, 0..=63.
// One u64 bitboard per side, nothing else.

use crate::bitwise::{
    clear_bit, count_bits, decimal_to_binary, decimal_to_hexadecimal, get_bit, iter_bits, set_bit,
    BitIter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

// Starting masks: black on bits 40-51, white on bits 20-31
pub const BLACK_START: u64 = 0xFFF0000000000;
pub const WHITE_START: u64 = 0x00000FFF00000;

/// Piece position tracker: which of the 64 squares each side occupies.
/// No move geometry, no turn order, no promotion. Legality here means
/// only "destination free" and "opponent square occupied".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckersBoard {
    pieces: [u64; 2],
}

impl Default for CheckersBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckersBoard {
    pub fn new() -> Self {
        Self {
            pieces: [BLACK_START, WHITE_START],
        }
    }

    #[inline]
    pub fn side_pieces(&self, side: Side) -> u64 {
        self.pieces[side as usize]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.pieces[0] | self.pieces[1]
    }

    /// Unconditional bit edit: clears `source` and sets `destination` in
    /// `side`'s mask. Performs no occupancy or legality validation at
    /// all; callers gate with [`is_move_legal`](Self::is_move_legal).
    pub fn move_piece(&mut self, source: u32, destination: u32, side: Side) {
        let bb = &mut self.pieces[side as usize];
        *bb = clear_bit(*bb, source);
        *bb = set_bit(*bb, destination);
    }

    /// True iff neither side occupies `destination`.
    #[inline]
    pub fn is_move_legal(&self, destination: u32) -> bool {
        !get_bit(self.occupied(), destination)
    }

    /// True iff `destination` is free and the opposing side occupies
    /// `opponent`.
    #[inline]
    pub fn can_capture(&self, opponent: u32, destination: u32, side: Side) -> bool {
        !get_bit(self.occupied(), destination)
            && get_bit(self.side_pieces(side.opponent()), opponent)
    }

    /// Removes the opposing piece at `opponent` and moves `side`'s piece
    /// from `source` to `destination`, provided the capture is legal.
    /// An illegal capture mutates nothing and returns `false`.
    pub fn capture_piece(&mut self, source: u32, opponent: u32, destination: u32, side: Side) -> bool {
        if !self.can_capture(opponent, destination, side) {
            return false;
        }
        let opp = &mut self.pieces[side.opponent() as usize];
        *opp = clear_bit(*opp, opponent);
        self.move_piece(source, destination, side);
        debug_assert!(self.is_consistent());
        true
    }

    /// No square doubly occupied. `move_piece` can violate this when
    /// called without an `is_move_legal` gate.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.pieces[0] & self.pieces[1] == 0
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> u32 {
        count_bits(self.side_pieces(side))
    }

    /// Iterator over the square indices `side` occupies, ascending.
    pub fn squares(&self, side: Side) -> BitIter {
        iter_bits(self.side_pieces(side))
    }

    pub fn side_binary(&self, side: Side) -> String {
        decimal_to_binary(self.side_pieces(side) as i64)
    }

    pub fn side_hexadecimal(&self, side: Side) -> String {
        decimal_to_hexadecimal(self.side_pieces(side) as i64)
    }
}
