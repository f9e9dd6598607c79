use log::trace;

use super::{Table, pick};
use crate::error::{ChangeError, Result};

/// Solve `amount` top-down, caching every subproblem in the table.
///
/// The requested amount is resolved first; the amounts it never touched are
/// resolved afterwards (mostly cache hits) so the finished table matches the
/// bottom-up one. Call chains longer than `max_depth` fail with
/// [`ChangeError::RecursionLimit`] rather than overflowing the stack.
pub fn solve(denominations: &[usize], amount: usize, max_depth: usize) -> Result<Table> {
    let mut table = Table::new(amount, denominations.len())?;
    let mut memo = Memo {
        denominations,
        target: amount,
        max_depth,
        table: &mut table,
    };

    for current in (1..=amount).rev() {
        memo.resolve(current, 0)?;
    }

    Ok(table)
}

struct Memo<'a> {
    denominations: &'a [usize],
    target: usize,
    max_depth: usize,
    table: &'a mut Table,
}

impl Memo<'_> {
    fn resolve(&mut self, amount: usize, depth: usize) -> Result<()> {
        if self.table.is_resolved(amount) {
            return Ok(());
        }
        if depth >= self.max_depth {
            return Err(ChangeError::RecursionLimit {
                amount: self.target,
                limit: self.max_depth,
            });
        }

        for &denomination in self.denominations {
            if denomination <= amount {
                self.resolve(amount - denomination, depth + 1)?;
            }
        }

        let table = &*self.table;
        let choice = pick(self.denominations, amount, |rest| {
            table.get(rest).map(|row| row.total())
        });
        trace!("memoized {amount}: {choice:?}");
        self.table.settle(amount, choice);
        Ok(())
    }
}
