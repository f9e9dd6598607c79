// Solvers for the minimal coin count problem
//
// Every strategy fills the same `Table` and breaks ties the same way: among
// equally short decompositions of an amount, the one whose last coin comes
// earliest in the denomination list wins. That keeps the tables of different
// strategies comparable slot for slot.

pub mod bottom_up;
pub mod memoized;
pub mod naive;

use crate::config::{Limits, Strategy};
use crate::error::{ChangeError, Result};

/// Coin counts for one amount, indexed like the denomination list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'t> {
    counts: &'t [u64],
    total: u64,
}

impl<'t> Row<'t> {
    pub fn counts(self) -> &'t [u64] {
        self.counts
    }

    pub fn total(self) -> u64 {
        self.total
    }

    /// Amount this row pays out with the given denominations.
    pub fn value(self, denominations: &[usize]) -> u64 {
        self.counts
            .iter()
            .zip(denominations)
            .map(|(&count, &denomination)| count * denomination as u64)
            .sum()
    }

    /// Used denominations with their counts, highest denomination first.
    pub fn mix(self, denominations: &[usize]) -> Vec<(usize, u64)> {
        let mut mix: Vec<(usize, u64)> = denominations
            .iter()
            .zip(self.counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(&denomination, &count)| (denomination, count))
            .collect();
        mix.sort_by(|a, b| b.0.cmp(&a.0));
        mix
    }
}

/// State of one amount in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Not computed by the strategy that built the table.
    Unresolved,
    /// No combination of the denominations adds up to this amount.
    Unreachable,
    Solved { total: u64 },
}

/// Solutions for every amount from 0 up to a target.
///
/// Counts live in one flat buffer, `width` entries per amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    width: usize,
    counts: Vec<u64>,
    slots: Vec<Slot>,
}

impl Table {
    /// Table for `0..=amount` with only amount 0 solved.
    ///
    /// All storage the table will ever use is reserved here, so an amount
    /// too large for memory fails with [`ChangeError::TableTooLarge`]
    /// instead of aborting part way through a solve.
    pub fn new(amount: usize, denominations: usize) -> Result<Self> {
        let too_large = || ChangeError::TableTooLarge { amount };
        let len = amount.checked_add(1).ok_or_else(too_large)?;
        let cells = len.checked_mul(denominations).ok_or_else(too_large)?;

        let mut counts = Vec::new();
        counts.try_reserve_exact(cells).map_err(|_| too_large())?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| too_large())?;

        counts.resize(cells, 0);
        slots.push(Slot::Solved { total: 0 });
        slots.resize(len, Slot::Unresolved);
        Ok(Self {
            width: denominations,
            counts,
            slots,
        })
    }

    /// Largest amount covered.
    pub fn amount(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn slot(&self, amount: usize) -> Slot {
        self.slots[amount]
    }

    /// The row for `amount` if it has been solved.
    pub fn get(&self, amount: usize) -> Option<Row<'_>> {
        match self.slots[amount] {
            Slot::Solved { total } => Some(Row {
                counts: &self.counts[self.cells(amount)],
                total,
            }),
            _ => None,
        }
    }

    /// The row for the largest amount, if one exists.
    pub fn target(&self) -> Option<Row<'_>> {
        self.get(self.amount())
    }

    pub fn is_resolved(&self, amount: usize) -> bool {
        !matches!(self.slots[amount], Slot::Unresolved)
    }

    fn cells(&self, amount: usize) -> std::ops::Range<usize> {
        amount * self.width..(amount + 1) * self.width
    }

    /// Store a decomposition computed outside the table.
    pub(crate) fn record(&mut self, amount: usize, counts: &[u64]) {
        let cells = self.cells(amount);
        self.counts[cells].copy_from_slice(counts);
        self.slots[amount] = Slot::Solved {
            total: counts.iter().sum(),
        };
    }

    pub(crate) fn mark_unreachable(&mut self, amount: usize) {
        self.slots[amount] = Slot::Unreachable;
    }

    /// Record the outcome of `pick` for `amount`.
    pub(crate) fn settle(&mut self, amount: usize, choice: Option<(usize, usize)>) {
        let Some((index, rest)) = choice else {
            self.mark_unreachable(amount);
            return;
        };
        let Slot::Solved { total } = self.slots[rest] else {
            self.mark_unreachable(amount);
            return;
        };
        let source = self.cells(rest);
        let start = self.cells(amount).start;
        self.counts.copy_within(source, start);
        self.counts[start + index] += 1;
        self.slots[amount] = Slot::Solved { total: total + 1 };
    }
}

/// Choose the last coin for `amount`.
///
/// `total_of` reports the coin count of a smaller amount, or `None` if that
/// amount is unreachable. Returns the denomination index and the remaining
/// amount of the cheapest candidate; denominations larger than `amount` are
/// skipped without ending the scan, so their order does not matter.
pub(crate) fn pick(
    denominations: &[usize],
    amount: usize,
    mut total_of: impl FnMut(usize) -> Option<u64>,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, u64)> = None;
    for (index, &denomination) in denominations.iter().enumerate() {
        if denomination > amount {
            continue;
        }
        let rest = amount - denomination;
        let Some(total) = total_of(rest) else {
            continue;
        };
        if best.is_none_or(|(_, _, best_total)| total < best_total) {
            best = Some((index, rest, total));
        }
    }
    best.map(|(index, rest, _)| (index, rest))
}

/// Fill a table for `amount` with the chosen strategy.
pub fn solve(
    strategy: Strategy,
    denominations: &[usize],
    amount: usize,
    limits: &Limits,
) -> Result<Table> {
    match strategy {
        Strategy::BottomUp => bottom_up::solve(denominations, amount),
        Strategy::Memoized => memoized::solve(denominations, amount, limits.max_depth),
        Strategy::Naive => naive::solve(denominations, amount, limits),
    }
}
