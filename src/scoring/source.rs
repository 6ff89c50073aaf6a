use rand::{rngs::StdRng, Rng, SeedableRng};

/// Supplies the integer draws behind every simulated score.
///
/// `draw(span)` returns a value in `0..span` (or `0` when `span` is zero),
/// the same range as `floor(random() * span)`.
pub trait ScoreSource {
    fn draw(&mut self, span: u32) -> u32;

    /// Centered jitter in `-(span / 2)..(span - span / 2)`.
    fn jitter(&mut self, span: u32) -> i32 {
        self.draw(span) as i32 - (span / 2) as i32
    }
}

impl<S: ScoreSource + ?Sized> ScoreSource for &mut S {
    fn draw(&mut self, span: u32) -> u32 {
        (**self).draw(span)
    }
}

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ScoreSource for RandomSource {
    fn draw(&mut self, span: u32) -> u32 {
        if span == 0 {
            return 0;
        }
        self.rng.gen_range(0..span)
    }
}

/// Stub source that always returns the same draw, capped to the span.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    value: u32,
}

impl FixedSource {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Always the smallest draw.
    pub fn low() -> Self {
        Self::new(0)
    }

    /// Always the largest draw for whatever span is requested.
    pub fn high() -> Self {
        Self::new(u32::MAX)
    }
}

impl ScoreSource for FixedSource {
    fn draw(&mut self, span: u32) -> u32 {
        if span == 0 {
            return 0;
        }
        self.value.min(span - 1)
    }
}
