/// CellState is the two-valued state of a single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Parse a single display character (`#`/`O` alive, `.` dead)
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' | 'O' => Some(CellState::Alive),
            '.' => Some(CellState::Dead),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            CellState::Alive => '#',
            CellState::Dead => '.',
        }
    }

    /// Pure function to compute the next state from the live neighbor count:
    /// 1. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Dead cell with exactly 3 neighbors becomes alive
    /// 4. Any other dead cell stays dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}
