use std::fmt;
use std::str::FromStr;

/// A direction the native engine can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in native move-code order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The integer code the native engine uses for this direction.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Upper-case label, e.g. `UP`.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const CELLS: usize = 16;
const NIBBLE_MASK: u64 = 0xf;

type BoardRaw = u64;
type Cell = u64;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 16 cells, got {0}")]
    CellCount(usize),
    #[error("invalid cell value: {0:?}")]
    InvalidCell(String),
}

/// A 4x4 grid of tile values in row-major order.
///
/// Cells are expected to be 0 (empty) or a power of two. Nothing checks
/// this; a cell like 6 simply encodes as its trailing-zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([Cell; CELLS]);

impl Board {
    pub const EMPTY: Board = Board([0; CELLS]);

    #[inline]
    pub fn new(cells: [Cell; CELLS]) -> Self { Board(cells) }

    #[inline]
    pub fn cells(&self) -> &[Cell; CELLS] { &self.0 }

    /// Tile value at `idx` (0..16, row-major).
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell { self.0[idx] }

    /// Pack this board for the native engine.
    ///
    /// ```
    /// use ai_2048_bridge::board::Board;
    /// let b = Board::new([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]);
    /// assert_eq!(b.encode().raw(), 0x2000_0000_0000_0001);
    /// ```
    #[inline]
    pub fn encode(&self) -> EncodedBoard { encode_board(self) }
}

impl From<[Cell; CELLS]> for Board {
    fn from(cells: [Cell; CELLS]) -> Self { Board::new(cells) }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse 16 cells separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != CELLS {
            return Err(BoardError::CellCount(tokens.len()));
        }
        let mut cells = [0; CELLS];
        for (cell, tok) in cells.iter_mut().zip(tokens) {
            *cell = tok.parse().map_err(|_| BoardError::InvalidCell(tok.to_string()))?;
        }
        Ok(Board(cells))
    }
}

/// 16 four-bit exponents packed into a `u64`, cell `i` at bits `4*i`.
///
/// Cell 0 (top-left) sits in the least significant nibble. This layout is
/// the contract with the native engine and must not change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodedBoard(BoardRaw);

impl EncodedBoard {
    pub const EMPTY: EncodedBoard = EncodedBoard(0);

    #[inline]
    pub fn from_raw(raw: BoardRaw) -> Self { EncodedBoard(raw) }

    #[inline]
    pub fn into_raw(self) -> BoardRaw { self.0 }

    #[inline]
    pub fn raw(&self) -> BoardRaw { self.0 }

    /// Exponent stored for cell `idx` (0..16, row-major).
    ///
    /// Panics if `idx >= 16`, like [`Board::cell`].
    #[inline]
    pub fn exponent(self, idx: usize) -> u8 {
        assert!(idx < CELLS, "cell index {idx} out of range");
        ((self.0 >> (4 * idx)) & NIBBLE_MASK) as u8
    }

    /// Tile value for cell `idx`: 0 when empty, else `2^exponent`.
    #[inline]
    pub fn tile_value(self, idx: usize) -> Cell {
        match self.exponent(idx) {
            0 => 0,
            e => 1 << e,
        }
    }

    /// Unpack back into tile values.
    ///
    /// ```
    /// use ai_2048_bridge::board::EncodedBoard;
    /// let b = EncodedBoard::from_raw(0x21).decode();
    /// assert_eq!(b.cell(0), 2);
    /// assert_eq!(b.cell(1), 4);
    /// assert_eq!(b.cell(2), 0);
    /// ```
    pub fn decode(self) -> Board {
        let mut cells = [0; CELLS];
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = self.tile_value(idx);
        }
        Board(cells)
    }

    /// Highest tile value on the board (0 for an empty board).
    pub fn highest_tile(self) -> Cell {
        (0..CELLS).map(|idx| self.tile_value(idx)).max().unwrap_or(0)
    }

    // https://stackoverflow.com/questions/38225571/count-number-of-zero-nibbles-in-an-unsigned-64-bit-integer
    /// Count the number of empty cells.
    pub fn count_empty(self) -> u32 {
        let mut x = self.0;
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111_1111_1111_1111;
        CELLS as u32 - x.count_ones()
    }
}

impl fmt::Debug for EncodedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedBoard({:#018x})", self.0)
    }
}

impl fmt::LowerHex for EncodedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for EncodedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Four rows of width-6 tile values, then a blank line.
impl fmt::Display for EncodedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for col in 0..4 {
                write!(f, "{:6}", self.tile_value(row * 4 + col))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl From<BoardRaw> for EncodedBoard { fn from(v: BoardRaw) -> Self { EncodedBoard::from_raw(v) } }
impl From<EncodedBoard> for BoardRaw { fn from(b: EncodedBoard) -> Self { b.into_raw() } }

/// Number of low-order zero bits; 0 maps to 0 rather than 64.
///
/// ```
/// use ai_2048_bridge::board::trailing_zero_count;
/// assert_eq!(trailing_zero_count(0), 0);
/// assert_eq!(trailing_zero_count(2048), 11);
/// assert_eq!(trailing_zero_count(12), 2);
/// ```
#[inline]
pub fn trailing_zero_count(n: u64) -> u32 {
    if n == 0 { 0 } else { n.trailing_zeros() }
}

/// Pack each cell's exponent into its nibble, cell `i` at bits `4*i`.
///
/// Exponents wider than a nibble are truncated so they cannot bleed into the
/// next cell.
pub fn encode_board(board: &Board) -> EncodedBoard {
    let raw = board.0.iter().enumerate().fold(0, |acc: BoardRaw, (idx, &cell)| {
        let exp = trailing_zero_count(cell) as BoardRaw & NIBBLE_MASK;
        acc | (exp << (4 * idx))
    });
    EncodedBoard(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_board<R: Rng>(rng: &mut R) -> Board {
        let mut cells = [0; CELLS];
        for cell in cells.iter_mut() {
            let e: u32 = rng.gen_range(0..16);
            *cell = if e == 0 { 0 } else { 1 << e };
        }
        Board::new(cells)
    }

    #[test]
    fn trailing_zeros_of_powers_of_two() {
        assert_eq!(trailing_zero_count(0), 0);
        for k in 0..63 {
            assert_eq!(trailing_zero_count(1u64 << k), k);
        }
    }

    #[test]
    fn trailing_zeros_of_non_powers() {
        assert_eq!(trailing_zero_count(1), 0);
        assert_eq!(trailing_zero_count(3), 0);
        assert_eq!(trailing_zero_count(6), 1);
        assert_eq!(trailing_zero_count(40), 3);
        assert_eq!(trailing_zero_count(u64::MAX), 0);
    }

    #[test]
    fn encodes_row_major_low_nibble_first() {
        let board = Board::new([
            2, 4, 8, 16,
            32, 64, 128, 256,
            512, 1024, 2048, 4,
            8, 16, 32, 2,
        ]);
        // cell 15 in the top nibble, cell 0 in the bottom one
        assert_eq!(board.encode(), EncodedBoard::from_raw(0x1543_2ba9_8765_4321));
    }

    #[test]
    fn empty_cells_encode_as_zero() {
        assert_eq!(Board::EMPTY.encode(), EncodedBoard::EMPTY);
        let board = Board::new([0, 0, 0, 0, 8, 4, 2, 2, 16, 32, 64, 128, 2048, 1024, 512, 256]);
        assert_eq!(board.encode().raw(), 0x89ab_7654_1123_0000);
    }

    #[test]
    fn oversized_exponent_stays_in_its_nibble() {
        let mut cells = [0; CELLS];
        cells[0] = 1 << 17; // exponent 17 -> 0x11 -> nibble 0x1
        let enc = Board::new(cells).encode();
        assert_eq!(enc.raw(), 0x1);
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(2048);
        for _ in 0..256 {
            let b = random_board(&mut rng);
            assert_eq!(encode_board(&b), encode_board(&b));
            assert_eq!(b.encode().decode(), b);
        }
    }

    #[test]
    fn tile_queries() {
        let enc = EncodedBoard::from_raw(0x0000_0000_0000_0b21);
        assert_eq!(enc.exponent(0), 1);
        assert_eq!(enc.tile_value(1), 4);
        assert_eq!(enc.tile_value(2), 2048);
        assert_eq!(enc.tile_value(3), 0);
        assert_eq!(enc.highest_tile(), 2048);
        assert_eq!(enc.count_empty(), 13);
        assert_eq!(EncodedBoard::EMPTY.count_empty(), 16);
        assert_eq!(EncodedBoard::EMPTY.highest_tile(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn exponent_rejects_out_of_range_index() {
        EncodedBoard::from_raw(u64::MAX).exponent(CELLS);
    }

    #[test]
    #[should_panic]
    fn cell_rejects_out_of_range_index() {
        Board::EMPTY.cell(CELLS);
    }

    #[test]
    fn display_prints_grid() {
        let enc = Board::new([2, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2048]).encode();
        let expected = concat!(
            "     2     0     0     0\n",
            "     0     4     0     0\n",
            "     0     0     0     0\n",
            "     0     0     0  2048\n",
            "\n",
        );
        assert_eq!(enc.to_string(), expected);
    }

    #[test]
    fn hex_and_debug_formatting() {
        let enc = EncodedBoard::from_raw(0xabc);
        assert_eq!(format!("{:x}", enc), "abc");
        assert_eq!(format!("{:016X}", enc), "0000000000000ABC");
        assert_eq!(format!("{:?}", enc), "EncodedBoard(0x0000000000000abc)");
    }

    #[test]
    fn parses_board_strings() {
        let b: Board = "2,4,8,16 32,64,128,256\n512, 1024, 2048, 4, 8 16 32 2".parse().unwrap();
        assert_eq!(b.cell(0), 2);
        assert_eq!(b.cell(10), 2048);
        assert_eq!(b.cell(15), 2);
        assert_eq!("1,2,3".parse::<Board>(), Err(BoardError::CellCount(3)));
        let bad = "2,4,8,16,32,64,128,256,512,1024,2048,4,8,16,32,x".parse::<Board>();
        assert_eq!(bad, Err(BoardError::InvalidCell("x".to_string())));
        let neg = "-2,4,8,16,32,64,128,256,512,1024,2048,4,8,16,32,2".parse::<Board>();
        assert!(matches!(neg, Err(BoardError::InvalidCell(_))));
    }

    #[test]
    fn direction_codes_and_labels() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.code(), i as i32);
        }
        assert_eq!(Direction::Left.to_string(), "LEFT");
        assert_eq!(Direction::Up.label(), "UP");
    }
}
