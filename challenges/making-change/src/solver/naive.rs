use super::Table;
use crate::config::{Limits, Strategy};
use crate::error::{ChangeError, Result};

/// Solve `amount` by plain recursion, recomputing every subproblem.
///
/// Runs in exponential time, so amounts above `limits.naive_limit` are
/// refused up front and the recursion gives up once it has made
/// `limits.naive_calls` calls. Only the slot for `amount` is filled in the
/// returned table.
pub fn solve(denominations: &[usize], amount: usize, limits: &Limits) -> Result<Table> {
    if amount > limits.naive_limit {
        return Err(ChangeError::AmountTooLarge {
            strategy: Strategy::Naive,
            amount,
            limit: limits.naive_limit,
        });
    }

    let mut table = Table::new(amount, denominations.len())?;
    if amount > 0 {
        let mut search = Search {
            denominations,
            target: amount,
            calls_left: limits.naive_calls,
            limit: limits.naive_calls,
        };
        match search.cheapest(amount)? {
            Some(counts) => table.record(amount, &counts),
            None => table.mark_unreachable(amount),
        }
    }
    Ok(table)
}

struct Search<'a> {
    denominations: &'a [usize],
    target: usize,
    calls_left: u64,
    limit: u64,
}

impl Search<'_> {
    fn cheapest(&mut self, amount: usize) -> Result<Option<Vec<u64>>> {
        if self.calls_left == 0 {
            return Err(ChangeError::CallLimit {
                amount: self.target,
                limit: self.limit,
            });
        }
        self.calls_left -= 1;

        if amount == 0 {
            return Ok(Some(vec![0; self.denominations.len()]));
        }

        let mut best: Option<(usize, Vec<u64>, u64)> = None;
        for (index, &denomination) in self.denominations.iter().enumerate() {
            if denomination > amount {
                continue;
            }
            let Some(counts) = self.cheapest(amount - denomination)? else {
                continue;
            };
            let total: u64 = counts.iter().sum();
            if best.as_ref().is_none_or(|&(_, _, best_total)| total < best_total) {
                best = Some((index, counts, total));
            }
        }

        Ok(best.map(|(index, mut counts, _)| {
            counts[index] += 1;
            counts
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Row, Slot, bottom_up};

    fn limits(naive_limit: usize) -> Limits {
        Limits {
            naive_limit,
            ..Limits::default()
        }
    }

    #[test]
    fn agrees_with_bottom_up_on_small_amounts() {
        let sets = [&[1, 5, 10, 25][..], &[1, 3, 4], &[4, 1, 3], &[5, 10], &[2, 7]];
        for denominations in sets {
            let reference = bottom_up::solve(denominations, 18).unwrap();
            for amount in 0..=18 {
                let table = solve(denominations, amount, &limits(18)).unwrap();
                assert_eq!(
                    table.get(amount),
                    reference.get(amount),
                    "denominations {:?}, amount {}",
                    denominations,
                    amount
                );
                assert_eq!(table.slot(amount), reference.slot(amount));
            }
        }
    }

    #[test]
    fn only_the_target_is_filled() {
        let table = solve(&[1, 3, 4], 6, &limits(40)).unwrap();
        assert_eq!(table.target().map(Row::total), Some(2));
        assert!((1..6).all(|i| !table.is_resolved(i)));
    }

    #[test]
    fn unreachable_amount() {
        let table = solve(&[5, 10], 7, &limits(40)).unwrap();
        assert_eq!(table.slot(7), Slot::Unreachable);
    }

    #[test]
    fn refuses_amounts_over_the_limit() {
        assert!(matches!(
            solve(&[1], 41, &limits(40)),
            Err(ChangeError::AmountTooLarge {
                strategy: Strategy::Naive,
                amount: 41,
                limit: 40,
            })
        ));
    }

    #[test]
    fn many_denominations_run_out_of_calls() {
        // Well under the amount limit, but over a billion calls without a budget.
        match solve(&[1, 2, 3], 34, &Limits::default()) {
            Err(ChangeError::CallLimit { amount, limit }) => {
                assert_eq!(amount, 34);
                assert_eq!(limit, Limits::default().naive_calls);
            }
            other => panic!("expected a call limit error, got {:?}", other),
        }
    }

    #[test]
    fn call_budget_counts_every_call() {
        // {1} at 5 recurses 5, 4, 3, 2, 1, 0: six calls.
        let tight = Limits {
            naive_calls: 6,
            ..Limits::default()
        };
        assert!(solve(&[1], 5, &tight).is_ok());

        let short = Limits {
            naive_calls: 5,
            ..Limits::default()
        };
        assert!(matches!(
            solve(&[1], 5, &short),
            Err(ChangeError::CallLimit { amount: 5, limit: 5 })
        ));
    }
}
