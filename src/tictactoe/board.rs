//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The same cell with X and O exchanged
    pub fn swapped(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A player in the game.
///
/// X is always the maximizing side: utilities are reported from X's point of
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The side whose wins score +1
    pub const MAXIMIZER: Player = Player::X;

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::MAXIMIZER
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A move: the cell at `row`, `col` (both 0-2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Action for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index, or `None` when off the board
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state including cells and whose turn it is.
///
/// This type is `Copy`: applying a move always yields a new state and leaves
/// the original untouched, so sibling branches of a search never share a
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Cells in row-major order
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl GameState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    pub fn new_with_player(first_player: Player) -> Self {
        GameState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn parse_player(player_str: &str, context: &str) -> Result<Player, crate::Error> {
        match player_str {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            _ => Err(crate::Error::InvalidPlayerString {
                player: player_str.to_string(),
                context: context.to_string(),
            }),
        }
    }

    /// Create a board from a string representation.
    ///
    /// The board part holds 9 cells in row-major order (`.` for empty, `X`,
    /// `O`); whitespace and `|` or `/` separators are ignored. An optional `_X` or
    /// `_O` suffix sets the player to move. Without it the player is inferred
    /// from the piece counts: X moves when the counts are equal.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not have exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - The suffix names neither X nor O
    ///
    /// # Examples
    ///
    /// ```
    /// use gametree::tictactoe::{GameState, Player};
    ///
    /// let state = GameState::from_string("XO. / .X. / ..O").unwrap();
    /// assert_eq!(state.to_move, Player::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        let (board_part, specified_turn) = match cleaned.rsplit_once('_') {
            Some((board, suffix)) if board.chars().count() == 9 => {
                (board, Some(Self::parse_player(suffix, s)?))
            }
            _ => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let inferred = if count.x > count.o {
            Player::O
        } else {
            Player::X
        };
        let to_move = specified_turn.unwrap_or(inferred);

        Ok(GameState { cells, to_move })
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Exchange X and O everywhere, including the side to move.
    #[must_use = "swap_marks returns a new board state; the original is unchanged"]
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = cell.swapped();
        }
        swapped.to_move = self.to_move.opponent();
        swapped
    }

    /// Compact encoding such as `X...O...._X`, accepted by [`from_string`](Self::from_string)
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move.to_char()
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let line: Vec<String> = cells.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join(" | "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = GameState::new();
        assert_eq!(board.to_move, Player::X);
        assert!(board.cells.iter().all(|&cell| cell == Cell::Empty));
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_from_string() {
        let board = GameState::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.to_move, Player::O);

        assert!(matches!(
            GameState::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            GameState::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            GameState::from_string("XXX......"),
            Err(crate::Error::InvalidPieceCounts { x_count: 3, o_count: 0 })
        ));
    }

    #[test]
    fn test_from_string_with_turn_suffix() {
        let board = GameState::from_string("........._O").unwrap();
        assert_eq!(board.to_move, Player::O);

        let board = GameState::from_string("O........").unwrap();
        assert_eq!(board.to_move, Player::X);

        assert!(matches!(
            GameState::from_string("........._Z"),
            Err(crate::Error::InvalidPlayerString { .. })
        ));
    }

    #[test]
    fn test_encode_round_trip() {
        let board = GameState::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO......._X");
        assert_eq!(GameState::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_swap_marks() {
        let board = GameState::from_string("XX.O.....").unwrap();
        let swapped = board.swap_marks();
        assert_eq!(swapped.cells[0], Cell::O);
        assert_eq!(swapped.cells[3], Cell::X);
        assert_eq!(swapped.to_move, Player::X);
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_action_index() {
        assert_eq!(Action::new(1, 2).index(), Some(5));
        assert_eq!(Action::from_index(7), Action::new(2, 1));
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 3).index(), None);
    }

    #[test]
    fn test_display() {
        let board = GameState::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.to_string(), "X | O | X\n. | O | .\nX | . | .");
    }

    #[test]
    fn test_winner() {
        let board = GameState::from_string("XXXOO....").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.has_won(Player::X));
        assert!(!board.has_won(Player::O));
        assert!(!board.is_full());
    }
}
