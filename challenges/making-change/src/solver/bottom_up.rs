use super::{Table, pick};
use crate::error::Result;

/// Fill every amount from 1 to `amount` in increasing order.
///
/// Each amount only looks at smaller ones, which are final by the time it is
/// reached, so one pass over the table is enough.
pub fn solve(denominations: &[usize], amount: usize) -> Result<Table> {
    let mut table = Table::new(amount, denominations.len())?;

    for current in 1..=amount {
        let choice = pick(denominations, current, |rest| {
            table.get(rest).map(|row| row.total())
        });
        table.settle(current, choice);
    }

    Ok(table)
}
