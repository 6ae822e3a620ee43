//! Limit-bounded word distances used by autocorrect.
//!
//! Both distances walk the two words from the front and spend one unit of
//! `limit` on every edit. Once the budget is exhausted (`limit < 0`) the
//! remaining suffixes contribute 0, so a returned value is only a real
//! distance when it is `<= limit`; anything larger means "exceeds limit".
//!
//! The edit distance is computed bottom-up over suffix pairs. A search that
//! runs out of budget always stops at exactly `limit + 1`, so the pruned
//! result follows from the unpruned distance and the longest edit run.

/// Floor for the limit [`final_diff`] runs the edit distance with.
pub const FINAL_DIFF_LIMIT: usize = 6;

/// A distance between a typed word and a candidate, bounded by `limit`.
pub trait Diff {
    fn diff(&self, typed: &str, source: &str, limit: usize) -> usize;
}

impl<F> Diff for F
where
    F: Fn(&str, &str, usize) -> usize,
{
    fn diff(&self, typed: &str, source: &str, limit: usize) -> usize {
        self(typed, source, limit)
    }
}

fn signed(limit: usize) -> isize {
    isize::try_from(limit).unwrap_or(isize::MAX)
}

/// Number of positions where the words differ, plus the difference in their
/// lengths. No insertions or deletions are considered.
pub fn substitution_diff(typed: &str, source: &str, limit: usize) -> usize {
    let mut budget = signed(limit);
    let mut cost = 0;
    let mut typed = typed.chars();
    let mut source = source.chars();
    loop {
        if budget < 0 {
            return cost;
        }
        match (typed.next(), source.next()) {
            (Some(t), Some(s)) => {
                if t != s {
                    cost += 1;
                    budget -= 1;
                }
            }
            (Some(_), None) => return cost + 1 + typed.count(),
            (None, Some(_)) => return cost + 1 + source.count(),
            (None, None) => return cost,
        }
    }
}

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `start` into `goal`, pruned at `limit`.
pub fn edit_diff(start: &str, goal: &str, limit: usize) -> usize {
    let start: Vec<char> = start.chars().collect();
    let goal: Vec<char> = goal.chars().collect();
    // No path spends more than both lengths combined, so a larger budget
    // never prunes.
    let limit = limit.min(start.len() + goal.len());
    let cell = suffix_table(&start, &goal);
    if cell.distance <= limit || cell.max_edits <= limit {
        cell.distance
    } else {
        limit + 1
    }
}

/// Costs of turning `start[i..]` into `goal[j..]`, matching equal heads for
/// free and stopping at the first exhausted word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    /// Cheapest edit count.
    distance: usize,
    /// Most edits any path makes before one word runs out. A pruned search
    /// gets cut off only when this exceeds its budget.
    max_edits: usize,
}

/// Fill the suffix table from the bottom-right corner one row at a time and
/// return the cell for the full words.
fn suffix_table(start: &[char], goal: &[char]) -> Cell {
    let (n, m) = (start.len(), goal.len());
    let mut below: Vec<Cell> = (0..=m)
        .map(|j| Cell {
            distance: m - j,
            max_edits: 0,
        })
        .collect();
    let mut row = below.clone();

    for i in (0..n).rev() {
        row[m] = Cell {
            distance: n - i,
            max_edits: 0,
        };
        for j in (0..m).rev() {
            row[j] = if start[i] == goal[j] {
                below[j + 1]
            } else {
                let (add, remove, substitute) = (row[j + 1], below[j], below[j + 1]);
                Cell {
                    distance: 1 + add.distance.min(remove.distance).min(substitute.distance),
                    max_edits: 1 + add.max_edits.max(remove.max_edits).max(substitute.max_edits),
                }
            };
        }
        std::mem::swap(&mut below, &mut row);
    }
    below[0]
}

/// Edit distance with a budget large enough that pruning never kicks in for
/// ordinary words. The caller's `limit` is ignored.
pub fn final_diff(typed: &str, source: &str, limit: usize) -> usize {
    FinalDiff::default().diff(typed, source, limit)
}

/// [`final_diff`] with a configurable floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalDiff {
    floor: usize,
}

impl FinalDiff {
    pub fn new(floor: usize) -> Self {
        Self { floor }
    }

    pub fn floor(&self) -> usize {
        self.floor
    }
}

impl Default for FinalDiff {
    fn default() -> Self {
        Self::new(FINAL_DIFF_LIMIT)
    }
}

impl Diff for FinalDiff {
    fn diff(&self, typed: &str, source: &str, _limit: usize) -> usize {
        let limit = typed
            .chars()
            .count()
            .max(source.chars().count())
            .max(self.floor);
        edit_diff(typed, source, limit)
    }
}
