use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;
use crate::id::SupplierId;

/// A directed transport link between two suppliers, with a per-unit cost and a maximum number of
/// units it can carry. `allocation` is the number of units assigned to it by an allocator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(
    try_from = "RawTransporter<Amt>",
    bound(deserialize = "Amt: Amount + Deserialize<'de>")
)]
pub struct Transporter<Amt> {
    name: String,
    from: SupplierId,
    to: SupplierId,
    cost_per_unit: Amt,
    max_capacity: Amt,
    allocation: Amt,
}

impl<Amt: Amount> Transporter<Amt> {
    pub fn new(
        name: impl Into<String>,
        from: SupplierId,
        to: SupplierId,
        cost_per_unit: Amt,
        max_capacity: Amt,
    ) -> Result<Self, Error> {
        if max_capacity < Amt::zero() {
            Err(Error::NegativeCapacity)
        } else if cost_per_unit < Amt::zero() {
            Err(Error::NegativeCost)
        } else {
            Ok(Self {
                name: name.into(),
                from,
                to,
                cost_per_unit,
                max_capacity,
                allocation: Amt::zero(),
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> SupplierId {
        self.from
    }

    pub fn to(&self) -> SupplierId {
        self.to
    }

    pub fn cost_per_unit(&self) -> Amt {
        self.cost_per_unit
    }

    pub fn max_capacity(&self) -> Amt {
        self.max_capacity
    }

    pub fn allocation(&self) -> Amt {
        self.allocation
    }

    pub fn with_allocation(self, allocation: Amt) -> Self {
        Self { allocation, ..self }
    }

    /// Transport cost of the current allocation, or `None` if it does not fit in `Amt`.
    pub fn cost(&self) -> Option<Amt> {
        self.allocation.checked_mul(&self.cost_per_unit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawTransporter<Amt> {
    pub name: String,
    pub from: SupplierId,
    pub to: SupplierId,
    pub cost_per_unit: Amt,
    pub max_capacity: Amt,
}

impl<Amt: Amount> TryFrom<RawTransporter<Amt>> for Transporter<Amt> {
    type Error = Error;

    fn try_from(t: RawTransporter<Amt>) -> Result<Self, Self::Error> {
        Self::new(t.name, t.from, t.to, t.cost_per_unit, t.max_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_capacity_and_cost() {
        let (a, b) = (SupplierId(0), SupplierId(1));
        assert_eq!(
            Transporter::new("t", a, b, 1, -1),
            Err(Error::NegativeCapacity)
        );
        assert_eq!(Transporter::new("t", a, b, -1, 1), Err(Error::NegativeCost));
    }

    #[test]
    fn cost_is_allocation_times_unit_cost() {
        let t = Transporter::new("T1", SupplierId(0), SupplierId(1), 4, 600)
            .unwrap()
            .with_allocation(25);
        assert_eq!(t.allocation(), 25);
        assert_eq!(t.cost(), Some(100));
    }

    #[test]
    fn cost_overflow_is_none() {
        let t = Transporter::new("T1", SupplierId(0), SupplierId(1), 50_000i32, 50_000)
            .unwrap()
            .with_allocation(50_000);
        assert_eq!(t.cost(), None);
    }
}
