use crate::error::{Error, Result};
use crate::grid::Cell;

/// A Life-like birth/survival rule, e.g. `B3/S23`.
///
/// `born` holds the neighbor counts that turn a dead cell alive, `survive`
/// the counts that keep a live cell alive. Both are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    // bit n set <=> neighbor count n (0..=8) is in the set
    born: u16,
    survive: u16,
}

impl RuleSet {
    /// Conway's standard rule, `B3/S23`.
    pub const LIFE: Self = Self {
        born: 1 << 3,
        survive: (1 << 2) | (1 << 3),
    };

    /// Parses a rule specification permissively.
    ///
    /// The string is split at the first `/`; digits `0..=8` before it form
    /// the born set, digits after it the survive set. All other characters
    /// (including the conventional `B`/`S` prefixes) are ignored. A missing
    /// separator yields empty sets rather than an error; use
    /// [`RuleSet::parse_strict`] to reject such input.
    pub fn parse(spec: &str) -> Self {
        match spec.split_once('/') {
            Some((born, survive)) => Self {
                born: digit_mask(born),
                survive: digit_mask(survive),
            },
            None => Self {
                born: 0,
                survive: 0,
            },
        }
    }

    /// Parses a rule specification, rejecting anything that is not exactly
    /// `B<digits>/S<digits>` with at least one digit on each side.
    pub fn parse_strict(spec: &str) -> Result<Self> {
        let re = regex::Regex::new(r"^[Bb]([0-8]+)/[Ss]([0-8]+)$").unwrap();
        let caps = re
            .captures(spec)
            .ok_or_else(|| Error::InvalidRule(spec.to_owned()))?;
        Ok(Self {
            born: digit_mask(&caps[1]),
            survive: digit_mask(&caps[2]),
        })
    }

    #[inline]
    pub fn born(&self, neighbors: u32) -> bool {
        neighbors <= 8 && self.born & (1 << neighbors) != 0
    }

    #[inline]
    pub fn survives(&self, neighbors: u32) -> bool {
        neighbors <= 8 && self.survive & (1 << neighbors) != 0
    }

    /// Applies the rule to a single cell given its live neighbor count.
    #[inline]
    pub fn next_state(&self, cell: Cell, neighbors: u32) -> Cell {
        let alive = match cell {
            Cell::Alive => self.survives(neighbors),
            Cell::Dead => self.born(neighbors),
        };
        Cell::from(alive)
    }
}

impl Default for RuleSet {
    #[inline]
    fn default() -> Self {
        Self::LIFE
    }
}

fn digit_mask(half: &str) -> u16 {
    let mut mask = 0;
    for c in half.chars() {
        if let Some(n) = c.to_digit(10) {
            if n <= 8 {
                mask |= 1 << n;
            }
        }
    }
    mask
}
