/// Oldest age a live cell can reach. Survivors stop aging here.
pub const AGE_CAP: u8 = 4;

/// Cell represents one position of the Life grid.
/// A live cell carries its age: the number of consecutive generations
/// it has been alive, starting at 1 when born and capped at [`AGE_CAP`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive(u8),
}

impl Cell {
    /// A freshly born cell
    pub const NEWBORN: Cell = Cell::Alive(1);

    /// Build a cell from its integer encoding.
    /// `0` is dead, anything above [`AGE_CAP`] is clamped to it.
    pub const fn from_value(value: u8) -> Self {
        match value {
            0 => Cell::Dead,
            v if v > AGE_CAP => Cell::Alive(AGE_CAP),
            v => Cell::Alive(v),
        }
    }

    /// Integer encoding: 0 when dead, the age (1..=AGE_CAP) when alive
    pub const fn value(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive(0) => 1,
            Cell::Alive(age) if age > AGE_CAP => AGE_CAP,
            Cell::Alive(age) => age,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    /// Position on the display color ramp, in [0, 1]
    pub fn age_ramp(self) -> f32 {
        f32::from(self.value()) / f32::from(AGE_CAP)
    }

    /// Pure function computing the next state from the live neighbor count:
    /// 1. Live cell with 2-3 neighbors survives and ages (up to AGE_CAP)
    /// 2. Dead cell with exactly 3 neighbors is born with age 1
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive(_), 2 | 3) => Cell::from_value(self.value() + 1),
            (Cell::Dead, 3) => Cell::NEWBORN,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive(1).evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive(3).evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival_ages_cell() {
        assert_eq!(Cell::Alive(1).evolve(2), Cell::Alive(2));
        assert_eq!(Cell::Alive(2).evolve(3), Cell::Alive(3));
    }

    #[test]
    fn test_age_is_capped() {
        assert_eq!(Cell::Alive(AGE_CAP).evolve(2), Cell::Alive(AGE_CAP));
        assert_eq!(Cell::Alive(AGE_CAP - 1).evolve(3), Cell::Alive(AGE_CAP));
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive(2).evolve(4), Cell::Dead);
        assert_eq!(Cell::Alive(4).evolve(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive(1));
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
        assert_eq!(Cell::Dead.evolve(6), Cell::Dead);
    }

    #[test]
    fn test_value_encoding() {
        assert_eq!(Cell::from_value(0), Cell::Dead);
        assert_eq!(Cell::from_value(3), Cell::Alive(3));
        assert_eq!(Cell::from_value(200), Cell::Alive(AGE_CAP));
        assert_eq!(Cell::Alive(0).value(), 1);
        assert_eq!(Cell::Alive(9).value(), AGE_CAP);
    }

    #[test]
    fn test_age_ramp() {
        assert_eq!(Cell::Dead.age_ramp(), 0.0);
        assert_eq!(Cell::Alive(2).age_ramp(), 0.5);
        assert_eq!(Cell::Alive(AGE_CAP).age_ramp(), 1.0);
    }
}
