mod window;

pub use self::window::GridWindow;
use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::rle::{self, PatternDescriptor};
use crate::rule::RuleSet;
use rand::Rng;
use rayon::prelude::*;

/// Gosper Glider Gun, the fixed demonstration pattern.
const GOSPER_GLIDER_GUN: &str = "24b1o11b1$22b1o1b1o11b1$12b2o6b2o12b2o1$11b1o3b1o4b2o12b2o1$2o8b1o5b1o3b2o14b1$2o8b1o3b1o1b2o4b1o1b1o11b1$10b1o5b1o7b1o11b1$11b1o3b1o20b1$12b2o22b1$!";
const DEMO_ORIGIN: (usize, usize) = (10, 10);

/// How the board is seeded at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartMode {
    /// Each cell alive with probability 0.5.
    #[default]
    RandomUniform,
    /// Each cell alive with probability 0.2.
    RandomSparse,
    /// Each cell alive with probability 0.8.
    RandomDense,
    /// Gosper Glider Gun at a canonical offset.
    Demo,
    /// Caller-supplied RLE pattern.
    Pattern(PatternDescriptor),
}

impl StartMode {
    /// Parses a mode selector string. Unrecognized selectors fall back to
    /// [`StartMode::RandomUniform`] with a warning rather than failing;
    /// callers that want strictness can construct the variant directly.
    pub fn from_selector(s: &str) -> Self {
        match s {
            "random" | "uniform" => Self::RandomUniform,
            "sparse" => Self::RandomSparse,
            "dense" => Self::RandomDense,
            "demo" | "gun" => Self::Demo,
            other => {
                log::warn!("unknown start mode {other:?}, defaulting to uniform random");
                Self::RandomUniform
            }
        }
    }
}

/// A Life-like automaton on a toroidal board.
///
/// Owns two equally-shaped grids and alternates between them: `step` reads
/// the current generation, writes the next, then swaps the buffers. Neither
/// buffer is ever reallocated after construction.
#[derive(Debug)]
pub struct Automaton {
    current: Grid,
    next: Grid,
    rules: RuleSet,
    generation: u64,
}

impl Automaton {
    /// Builds an automaton of the given board size and seeds it per `mode`.
    ///
    /// Random modes draw every cell independently from `rng`; pattern modes
    /// seed exclusively through the RLE decoder and leave untouched cells
    /// dead. Any failure (zero size, malformed or out-of-bounds pattern)
    /// aborts construction.
    pub fn new<R: Rng>(size: usize, rules: RuleSet, mode: StartMode, rng: &mut R) -> Result<Self> {
        let mut current = Grid::new(size)?;
        match &mode {
            StartMode::RandomUniform => scatter(&mut current, 0.5, rng),
            StartMode::RandomSparse => scatter(&mut current, 0.2, rng),
            StartMode::RandomDense => scatter(&mut current, 0.8, rng),
            StartMode::Demo => rle::decode_into(
                &mut current,
                &PatternDescriptor::new(GOSPER_GLIDER_GUN, DEMO_ORIGIN),
            )?,
            StartMode::Pattern(pattern) => rle::decode_into(&mut current, pattern)?,
        }

        let next = Grid::new(size)?;
        Ok(Self {
            current,
            next,
            rules,
            generation: 0,
        })
    }

    /// Advances the simulation by exactly one generation.
    ///
    /// Every neighbor count observes the pre-update buffer only; the next
    /// buffer becomes current via a swap once all cells are written.
    pub fn step(&mut self) {
        let size = self.current.size();
        for r in 0..size {
            for c in 0..size {
                let neighbors = self.current.live_neighbors(r, c);
                let cell = self.rules.next_state(self.current.get(r, c), neighbors);
                self.next.set(r, c, cell);
            }
        }
        self.finish_generation();
    }

    /// Same result as [`Automaton::step`], with rows banded across rayon
    /// workers. Each worker writes a disjoint chunk of the next buffer and
    /// only reads the current one.
    pub fn step_parallel(&mut self) {
        let Self {
            current,
            next,
            rules,
            ..
        } = self;
        let current = &*current;
        let rules = *rules;
        let size = current.size();

        next.cells_mut()
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(r, row)| {
                for (c, cell) in row.iter_mut().enumerate() {
                    let neighbors = current.live_neighbors(r, c);
                    *cell = rules.next_state(current.get(r, c), neighbors);
                }
            });
        self.finish_generation();
    }

    fn finish_generation(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Borrow of the current generation. The engine cannot step while the
    /// borrow is held, so the view is never mutated under the caller.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Owned copy of the current generation, for callers that need the
    /// state to outlive the engine borrow.
    pub fn snapshot(&self) -> Grid {
        self.current.clone()
    }

    pub fn window(&self, top_left: (usize, usize), bottom_right: (usize, usize)) -> GridWindow<'_> {
        GridWindow::new(&self.current, top_left, bottom_right)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.current.size()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.current.population()
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }
}

fn scatter<R: Rng>(grid: &mut Grid, live_probability: f64, rng: &mut R) {
    let size = grid.size();
    for r in 0..size {
        for c in 0..size {
            grid.set(r, c, Cell::from(rng.random_bool(live_probability)));
        }
    }
}
