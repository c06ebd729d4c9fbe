use rand::Rng;
use std::{error::Error, fmt};

/// Starting configuration for a field. The numeric selectors accepted by
/// `from_selector` preserve the 1..=5 menu encoding of the interactive
/// configuration flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    AllWhite,
    AllBlack,
    Checkerboard,
    HorizontalStripes,
    Random,
}

impl Pattern {
    pub fn from_selector(selector: u8) -> Result<Self, FieldError> {
        match selector {
            1 => Ok(Pattern::AllWhite),
            2 => Ok(Pattern::AllBlack),
            3 => Ok(Pattern::Checkerboard),
            4 => Ok(Pattern::HorizontalStripes),
            5 => Ok(Pattern::Random),
            _ => Err(FieldError::InvalidPattern { selector }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidDimensions { width: usize, height: usize },
    InvalidPattern { selector: u8 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidDimensions { width, height } => {
                write!(f, "field dimensions ({width}x{height}) must be positive")
            }
            FieldError::InvalidPattern { selector } => {
                write!(f, "pattern selector ({selector}) must be in 1..=5")
            }
        }
    }
}

impl Error for FieldError {}

/// Dense binary grid with toroidal indexing. Cells are stored row-major and
/// hold exactly 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Field {
    /// Build a field from one of the five starting patterns.
    ///
    /// Only `Pattern::Random` draws from `rng`; callers that need
    /// reproducible fields pass a seeded generator.
    pub fn generate<R: Rng + ?Sized>(
        pattern: Pattern,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        let cells = match pattern {
            Pattern::AllWhite => vec![1; width * height],
            Pattern::AllBlack => vec![0; width * height],
            Pattern::Checkerboard => {
                let mut cells = vec![0; width * height];
                for row in 0..height {
                    for col in 0..width {
                        cells[row * width + col] = ((row + col) % 2) as u8;
                    }
                }
                cells
            }
            Pattern::HorizontalStripes => {
                let mut cells = vec![0; width * height];
                for row in (0..height).step_by(2) {
                    cells[row * width..(row + 1) * width].fill(1);
                }
                cells
            }
            Pattern::Random => (0..width * height)
                .map(|_| rng.random_range(0..=1u8))
                .collect(),
        };
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(self.contains(row, col), "cell index out of bounds");
        self.cells[row * self.width + col]
    }

    /// Panics if `(row, col)` is out of bounds or `value` is not 0/1.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(self.contains(row, col), "cell index out of bounds");
        assert!(value <= 1, "cell value must be 0 or 1");
        self.cells[row * self.width + col] = value;
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Cells equal to 0, the recorder's "alive" convention.
    pub fn live_count(&self) -> usize {
        self.count(0)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate rows as slices, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(7)
    }

    #[test]
    fn rejects_zero_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                Field::generate(Pattern::AllBlack, w, h, &mut rng()),
                Err(FieldError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn selector_maps_menu_encoding() {
        assert_eq!(Pattern::from_selector(1), Ok(Pattern::AllWhite));
        assert_eq!(Pattern::from_selector(3), Ok(Pattern::Checkerboard));
        assert_eq!(Pattern::from_selector(5), Ok(Pattern::Random));
        assert_eq!(
            Pattern::from_selector(6),
            Err(FieldError::InvalidPattern { selector: 6 })
        );
        assert_eq!(
            Pattern::from_selector(0),
            Err(FieldError::InvalidPattern { selector: 0 })
        );
    }

    #[test]
    fn uniform_patterns_fill_every_cell() {
        let white = Field::generate(Pattern::AllWhite, 4, 3, &mut rng()).unwrap();
        assert_eq!(white.count(1), 12);
        let black = Field::generate(Pattern::AllBlack, 4, 3, &mut rng()).unwrap();
        assert_eq!(black.count(0), 12);
    }

    #[test]
    fn checkerboard_differs_from_all_orthogonal_neighbors() {
        for (w, h) in [(2, 2), (5, 4), (7, 7), (82, 101)] {
            let field = Field::generate(Pattern::Checkerboard, w, h, &mut rng()).unwrap();
            for row in 0..h {
                for col in 0..w {
                    let v = field.get(row, col);
                    if row > 0 {
                        assert_ne!(v, field.get(row - 1, col));
                    }
                    if row + 1 < h {
                        assert_ne!(v, field.get(row + 1, col));
                    }
                    if col > 0 {
                        assert_ne!(v, field.get(row, col - 1));
                    }
                    if col + 1 < w {
                        assert_ne!(v, field.get(row, col + 1));
                    }
                }
            }
        }
    }

    #[test]
    fn stripes_alternate_whole_rows() {
        let field = Field::generate(Pattern::HorizontalStripes, 5, 4, &mut rng()).unwrap();
        for (row, cells) in field.rows().enumerate() {
            let expected = if row % 2 == 0 { 1 } else { 0 };
            assert!(cells.iter().all(|&c| c == expected), "row {row}");
        }
    }

    #[test]
    fn random_is_reproducible_for_fixed_seed() {
        let a = Field::generate(Pattern::Random, 20, 20, &mut rng()).unwrap();
        let b = Field::generate(Pattern::Random, 20, 20, &mut rng()).unwrap();
        assert_eq!(a, b);
        assert!(a.cells().iter().all(|&c| c <= 1));
        // A 400-cell uniform grid being single-valued would mean a broken fill.
        assert!(a.count(0) > 0 && a.count(1) > 0);
    }

    #[test]
    fn counts_partition_the_grid() {
        let field = Field::generate(Pattern::Random, 13, 9, &mut rng()).unwrap();
        assert_eq!(field.count(0) + field.count(1), 13 * 9);
        assert_eq!(field.live_count(), field.count(0));
    }
}
