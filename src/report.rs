//! Aggregates over suppliers and allocated transporters, for printing and checking results.

use alloc::string::String;

use itertools::Itertools;

use crate::amount::Amount;
use crate::error::Error;
use crate::supplier::Supplier;
use crate::transporter::Transporter;

/// Sum of the demands of `suppliers`.
pub fn total_demand<'a, Amt: Amount + 'a>(
    suppliers: impl IntoIterator<Item = &'a Supplier<Amt>>,
) -> Amt {
    suppliers.into_iter().map(Supplier::demand).sum()
}

/// Sum of the allocations of `transporters`. A unit that travels over several transporters is
/// counted once per transporter.
pub fn total_amount_shipped<'a, Amt: Amount + 'a>(
    transporters: impl IntoIterator<Item = &'a Transporter<Amt>>,
) -> Amt {
    transporters
        .into_iter()
        .map(Transporter::allocation)
        .sum()
}

/// Sum of `allocation * cost_per_unit` over `transporters`.
///
/// Fails with [`Error::ArithmeticOverflow`] if a product or the running total does not fit in
/// `Amt`.
pub fn total_transporter_cost<'a, Amt: Amount + 'a>(
    transporters: impl IntoIterator<Item = &'a Transporter<Amt>>,
) -> Result<Amt, Error> {
    transporters
        .into_iter()
        .try_fold(Amt::zero(), |total, t| {
            t.cost().and_then(|cost| total.checked_add(&cost))
        })
        .ok_or(Error::ArithmeticOverflow)
}

/// One `name: allocation $cost_per_unit` line per transporter.
pub fn display_allocations<'a, Amt: Amount + 'a>(
    transporters: impl IntoIterator<Item = &'a Transporter<Amt>>,
) -> String {
    transporters
        .into_iter()
        .map(|t| {
            alloc::format!(
                "{}: {} ${}",
                t.name(),
                t.allocation(),
                t.cost_per_unit()
            )
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::id::SupplierId;

    fn allocated(name: &str, allocation: i32, cost: i32) -> Transporter<i32> {
        Transporter::new(name, SupplierId(0), SupplierId(1), cost, 100)
            .unwrap()
            .with_allocation(allocation)
    }

    #[test]
    fn cost_is_sum_of_products() {
        let transporters = vec![allocated("T1", 5, 2), allocated("T2", 3, 4)];
        assert_eq!(total_transporter_cost(&transporters), Ok(22));
        assert_eq!(total_amount_shipped(&transporters), 8);
    }

    #[test]
    fn cost_overflow_is_an_error() {
        let huge = vec![allocated("T1", 50_000, 50_000)];
        assert_eq!(total_transporter_cost(&huge), Err(Error::ArithmeticOverflow));

        // each product fits, the total does not
        let wide = Transporter::new("T", SupplierId(0), SupplierId(1), 2, i32::MAX)
            .unwrap()
            .with_allocation(i32::MAX / 2);
        let transporters = vec![wide.clone(), wide];
        assert_eq!(
            total_transporter_cost(&transporters),
            Err(Error::ArithmeticOverflow)
        );
    }

    #[test]
    fn display_line_format() {
        let transporters = vec![allocated("T1", 5, 2), allocated("T2", 3, 4)];
        assert_eq!(display_allocations(&transporters[..1]), "T1: 5 $2");
        assert_eq!(display_allocations(&transporters), "T1: 5 $2\nT2: 3 $4");
        let none: [Transporter<i32>; 0] = [];
        assert_eq!(display_allocations(&none), "");
    }

    #[test]
    fn demand_ignores_inventory() {
        let suppliers = vec![
            Supplier::new("m", 600, 0).unwrap(),
            Supplier::new("d1", 0, 210).unwrap(),
            Supplier::new("d2", 5, 220).unwrap(),
        ];
        assert_eq!(total_demand(&suppliers), 430);
    }
}
