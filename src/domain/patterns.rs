/// How a pattern lays out its initially alive cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Fixed (row, col) offsets relative to the grid center
    Offsets(&'static [(i32, i32)]),
    /// Every cell independently alive with this probability
    Random { density: f64 },
}

/// A named seed pattern. Patterns are plain data:
/// adding one never requires touching the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub shape: Shape,
}

impl Pattern {
    /// Create a pattern from fixed center-relative offsets
    pub const fn fixed(
        name: &'static str,
        description: &'static str,
        offsets: &'static [(i32, i32)],
    ) -> Self {
        Self { name, description, shape: Shape::Offsets(offsets) }
    }

    /// Create a pattern that fills the grid at random
    pub const fn random(name: &'static str, description: &'static str, density: f64) -> Self {
        Self { name, description, shape: Shape::Random { density } }
    }

    /// Offsets of a fixed pattern, empty for random ones
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self.shape {
            Shape::Offsets(offsets) => offsets,
            Shape::Random { .. } => &[],
        }
    }
}

/// Seed pattern library
pub mod presets {
    use super::Pattern;

    // .OO.
    // O..O
    // OOOO
    const CAP: &[(i32, i32)] = &[
        (-1, -1), (-1, 0),
        (0, -2), (0, 1),
        (1, -2), (1, -1), (1, 0), (1, 1),
    ];

    // OOO.
    // O..O
    // O..O
    // .OO.
    const TEARDROP: &[(i32, i32)] = &[
        (-2, -2), (-2, -1), (-2, 0),
        (-1, -2), (-1, 1),
        (0, -2), (0, 1),
        (1, -1), (1, 0),
    ];

    // Two parallel rows of seven, one empty row apart
    const TEST_PATTERN: &[(i32, i32)] = &[
        (-1, -3), (-1, -2), (-1, -1), (-1, 0), (-1, 1), (-1, 2), (-1, 3),
        (1, -3), (1, -2), (1, -1), (1, 0), (1, 1), (1, 2), (1, 3),
    ];

    const BLOCK: &[(i32, i32)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

    const BLINKER: &[(i32, i32)] = &[(0, -1), (0, 0), (0, 1)];

    const GLIDER: &[(i32, i32)] = &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)];

    pub const fn cap() -> Pattern {
        Pattern::fixed("cap", "8 cells, arch over a bar", CAP)
    }

    pub const fn teardrop() -> Pattern {
        Pattern::fixed("teardrop", "9 cells, hollow drop", TEARDROP)
    }

    pub const fn test_pattern() -> Pattern {
        Pattern::fixed("test-pattern", "14 cells, two rows of seven", TEST_PATTERN)
    }

    /// Each cell alive with probability 0.25
    pub const fn random_25() -> Pattern {
        Pattern::random("random-25%", "Each cell alive with 25% chance", 0.25)
    }

    /// Coin-flip fill
    pub const fn random_50() -> Pattern {
        Pattern::random("random-50%", "Each cell alive with 50% chance", 0.5)
    }

    pub const fn block() -> Pattern {
        Pattern::fixed("block", "Still life", BLOCK)
    }

    pub const fn blinker() -> Pattern {
        Pattern::fixed("blinker", "Oscillator (period 2)", BLINKER)
    }

    pub const fn glider() -> Pattern {
        Pattern::fixed("glider", "Moves diagonally (period 4)", GLIDER)
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            cap(),
            teardrop(),
            test_pattern(),
            random_25(),
            random_50(),
            block(),
            blinker(),
            glider(),
        ]
    }

    /// Look a pattern up by its name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns().into_iter().find(|p| p.name == name)
    }
}
