//! Run-length-encoded pattern decode/encode.
//!
//! The decoder handles the single-pattern subset of the RLE format: `b`/`o`
//! cell runs, `$` row advances, run counts of one or two digits, and a `!`
//! terminator. Quotes and whitespace are stripped before parsing as a
//! tolerance for copy-pasted pattern sources.

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};

/// An RLE pattern string plus the board anchor where decoding begins.
///
/// `origin` is `(row, col)` of the pattern's top-left corner in grid
/// coordinates. The descriptor is consumed during seeding and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDescriptor {
    pub rle: String,
    pub origin: (usize, usize),
}

impl PatternDescriptor {
    pub fn new<S: Into<String>>(rle: S, origin: (usize, usize)) -> Self {
        Self {
            rle: rle.into(),
            origin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Dead,
    Alive,
    RowAdvance,
}

impl Tag {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'b' => Some(Self::Dead),
            b'o' => Some(Self::Alive),
            b'$' => Some(Self::RowAdvance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    len: usize,
    tag: Tag,
}

/// Token stream over a cleaned pattern string.
///
/// Each call to `next` consumes one complete run. The two-digit rule is
/// greedy: two consecutive digits form the run length if and only if the
/// character after them is a recognized tag, so `12b` is a run of 12 while
/// `1b2o` is two separate runs. Iteration ends at the `!` terminator;
/// running off the end of the input without seeing one is an error.
struct Tokenizer<'a> {
    bytes: &'a [u8],
    idx: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, idx: 0 }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Run>;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.idx;
        let Some(&b) = self.bytes.get(at) else {
            return Some(Err(Error::MalformedPattern {
                at,
                reason: "missing '!' terminator",
            }));
        };

        if b == b'!' {
            return None;
        }
        if let Some(tag) = Tag::from_byte(b) {
            self.idx += 1;
            return Some(Ok(Run { len: 1, tag }));
        }
        if !b.is_ascii_digit() {
            return Some(Err(Error::MalformedPattern {
                at,
                reason: "unrecognized character",
            }));
        }

        let second = self.bytes.get(at + 1).copied();
        let third = self.bytes.get(at + 2).copied();
        let run = match (second, third) {
            // two digits count only when the character after them is a tag
            (Some(d), Some(t)) if d.is_ascii_digit() && Tag::from_byte(t).is_some() => {
                self.idx += 3;
                Run {
                    len: ((b - b'0') * 10 + (d - b'0')) as usize,
                    tag: Tag::from_byte(t).unwrap(),
                }
            }
            (Some(t), _) if Tag::from_byte(t).is_some() => {
                self.idx += 2;
                Run {
                    len: (b - b'0') as usize,
                    tag: Tag::from_byte(t).unwrap(),
                }
            }
            _ => {
                return Some(Err(Error::MalformedPattern {
                    at,
                    reason: "digit run not followed by a tag",
                }));
            }
        };
        Some(Ok(run))
    }
}

/// Decodes `pattern` into `grid`, anchored at the descriptor's origin.
///
/// Both `b` and `o` runs are written explicitly, so the pattern fully
/// determines the rectangular region it touches; cells outside it are left
/// as-is. The pattern is tokenized and bounds-checked up front, so on error
/// the grid is untouched.
pub fn decode_into(grid: &mut Grid, pattern: &PatternDescriptor) -> Result<()> {
    let cleaned: Vec<u8> = pattern
        .rle
        .bytes()
        .filter(|&b| b != b'"' && !b.is_ascii_whitespace())
        .collect();
    let runs = Tokenizer::new(&cleaned).collect::<Result<Vec<_>>>()?;
    check_bounds(&runs, pattern.origin, grid.size())?;

    let (origin_row, origin_col) = pattern.origin;
    let (mut row, mut col) = (origin_row, origin_col);
    for run in runs {
        match run.tag {
            Tag::RowAdvance => {
                row += run.len;
                col = origin_col;
            }
            Tag::Dead | Tag::Alive => {
                let cell = Cell::from(run.tag == Tag::Alive);
                for _ in 0..run.len {
                    grid.set(row, col, cell);
                    col += 1;
                }
            }
        }
    }
    Ok(())
}

// Walks the run cursor without writing, failing on the first cell that
// would land outside the board.
fn check_bounds(runs: &[Run], origin: (usize, usize), size: usize) -> Result<()> {
    let (mut row, mut col) = origin;
    for run in runs {
        match run.tag {
            Tag::RowAdvance => {
                row += run.len;
                col = origin.1;
            }
            Tag::Dead | Tag::Alive => {
                if row >= size {
                    return Err(Error::PatternOutOfBounds { row, col, size });
                }
                if col + run.len > size {
                    // first column the run would write past the edge
                    let col = col.max(size);
                    return Err(Error::PatternOutOfBounds { row, col, size });
                }
                col += run.len;
            }
        }
    }
    Ok(())
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}

impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, mut run: usize, c: char) {
        // the decoder reads at most two-digit run counts
        while run > 99 {
            self.append(99, c);
            run -= 99;
        }
        if run > 0 {
            self.append(run, c);
        }
    }

    fn append(&mut self, run: usize, c: char) {
        let append = match run {
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// Encodes the full grid as a single RLE pattern anchored at `(0, 0)`.
///
/// Trailing dead cells in each row and trailing blank rows are elided;
/// decoding the result at the origin reproduces the same live set.
pub fn encode(grid: &Grid) -> String {
    let mut seq = RunEncoder::new(70);
    // `$` runs owed before the next non-blank row
    let mut row_gap = 0;
    for row in grid.rows() {
        let Some(last) = row.iter().rposition(|c| c.is_alive()) else {
            row_gap += 1;
            continue;
        };
        seq.push_run(row_gap, '$');
        row_gap = 1;

        let mut state = row[0];
        let mut run = 0;
        for &cell in &row[..=last] {
            if cell == state {
                run += 1;
            } else {
                seq.push_run(run, if state.is_alive() { 'o' } else { 'b' });
                state = cell;
                run = 1;
            }
        }
        seq.push_run(run, if state.is_alive() { 'o' } else { 'b' });
    }
    seq.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_on_blank(size: usize, rle: &str, origin: (usize, usize)) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        decode_into(&mut grid, &PatternDescriptor::new(rle, origin)).unwrap();
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut alive = Vec::new();
        for r in 0..grid.size() {
            for c in 0..grid.size() {
                if grid.get(r, c).is_alive() {
                    alive.push((r, c));
                }
            }
        }
        alive
    }

    #[test]
    fn two_digit_run_is_greedy() {
        let grid = decode_on_blank(16, "12o!", (0, 0));

        let expected: Vec<_> = (0..12).map(|c| (0, c)).collect();
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn single_digit_runs_stay_separate() {
        let grid = decode_on_blank(16, "1o1o!", (0, 0));

        assert_eq!(alive_cells(&grid), vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn decodes_the_bounding_box_exactly() {
        let grid = decode_on_blank(8, "2o1b2o$5o!", (0, 0));

        let expected = vec![
            (0, 0),
            (0, 1),
            (0, 3),
            (0, 4),
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
        ];
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn bare_tags_count_as_one() {
        // standard glider
        let grid = decode_on_blank(8, "bob$2bo$3o!", (0, 0));

        let expected = vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        assert_eq!(alive_cells(&grid), expected);
    }

    #[test]
    fn origin_offsets_the_pattern() {
        let grid = decode_on_blank(10, "2o$2o!", (3, 4));

        assert_eq!(alive_cells(&grid), vec![(3, 4), (3, 5), (4, 4), (4, 5)]);
    }

    #[test]
    fn dead_runs_overwrite_previous_state() {
        let mut grid = Grid::new(4).unwrap();
        for r in 0..4 {
            for c in 0..4 {
                grid.set(r, c, Cell::Alive);
            }
        }

        decode_into(&mut grid, &PatternDescriptor::new("1b2o$3b!", (0, 0))).unwrap();

        assert_eq!(grid.get(0, 0), Cell::Dead);
        assert_eq!(grid.get(0, 1), Cell::Alive);
        assert_eq!(grid.get(0, 2), Cell::Alive);
        assert_eq!(grid.get(1, 0), Cell::Dead);
        assert_eq!(grid.get(1, 1), Cell::Dead);
        assert_eq!(grid.get(1, 2), Cell::Dead);
        // untouched cells keep their prior state
        assert_eq!(grid.get(0, 3), Cell::Alive);
        assert_eq!(grid.get(2, 0), Cell::Alive);
    }

    #[test]
    fn quotes_and_whitespace_are_stripped() {
        let quoted = decode_on_blank(8, "\"2o\"$\n\"2o\"!", (0, 0));
        let plain = decode_on_blank(8, "2o$2o!", (0, 0));

        assert_eq!(quoted, plain);
    }

    #[test]
    fn missing_terminator_is_malformed() {
        let mut grid = Grid::new(8).unwrap();
        let err = decode_into(&mut grid, &PatternDescriptor::new("2o$2o", (0, 0)));

        assert_eq!(
            err,
            Err(Error::MalformedPattern {
                at: 5,
                reason: "missing '!' terminator",
            })
        );
    }

    #[test]
    fn dangling_digits_are_malformed() {
        let mut grid = Grid::new(8).unwrap();

        for rle in ["3!", "123o!", "2x!"] {
            let err = decode_into(&mut grid, &PatternDescriptor::new(rle, (0, 0)));
            assert!(
                matches!(err, Err(Error::MalformedPattern { .. })),
                "pattern {rle:?} should be malformed"
            );
        }
    }

    #[test]
    fn unrecognized_characters_are_malformed() {
        let mut grid = Grid::new(8).unwrap();
        let err = decode_into(&mut grid, &PatternDescriptor::new("oxo!", (0, 0)));

        assert_eq!(
            err,
            Err(Error::MalformedPattern {
                at: 1,
                reason: "unrecognized character",
            })
        );
    }

    #[test]
    fn out_of_bounds_pattern_leaves_the_grid_untouched() {
        let mut grid = Grid::new(4).unwrap();
        let err = decode_into(&mut grid, &PatternDescriptor::new("2o$5o!", (0, 0)));

        assert_eq!(
            err,
            Err(Error::PatternOutOfBounds {
                row: 1,
                col: 4,
                size: 4,
            })
        );
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn rows_below_the_board_are_out_of_bounds() {
        let mut grid = Grid::new(3).unwrap();
        let err = decode_into(&mut grid, &PatternDescriptor::new("o$o$o$o!", (0, 0)));

        assert_eq!(
            err,
            Err(Error::PatternOutOfBounds {
                row: 3,
                col: 0,
                size: 3,
            })
        );
    }

    #[test]
    fn encode_elides_trailing_dead_cells() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(0, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 3, Cell::Alive);

        assert_eq!(encode(&grid), "2o$3bo!");
    }

    #[test]
    fn encode_folds_blank_rows_into_row_advances() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(0, 0, Cell::Alive);
        grid.set(3, 0, Cell::Alive);

        assert_eq!(encode(&grid), "o3$o!");
    }

    #[test]
    fn encode_then_decode_reproduces_the_grid() {
        let original = decode_on_blank(8, "bob$2bo$3o!", (2, 2));

        let mut decoded = Grid::new(8).unwrap();
        decode_into(&mut decoded, &PatternDescriptor::new(encode(&original), (0, 0))).unwrap();

        assert_eq!(alive_cells(&decoded), alive_cells(&original));
    }

    #[test]
    fn empty_grid_encodes_to_bare_terminator() {
        assert_eq!(encode(&Grid::new(4).unwrap()), "!");
    }
}
