use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::Error;

/// A supplier, distributor or depot in the supply chain.
///
/// A supplier with zero demand is a net source of inventory for the allocator; any positive demand
/// turns it into a net sink.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(
    try_from = "RawSupplier<Amt>",
    bound(deserialize = "Amt: Amount + Deserialize<'de>")
)]
pub struct Supplier<Amt> {
    name: String,
    inventory: Amt,
    demand: Amt,
}

impl<Amt: Amount> Supplier<Amt> {
    pub fn new(name: impl Into<String>, inventory: Amt, demand: Amt) -> Result<Self, Error> {
        if inventory < Amt::zero() {
            Err(Error::NegativeInventory)
        } else if demand < Amt::zero() {
            Err(Error::NegativeDemand)
        } else {
            Ok(Self {
                name: name.into(),
                inventory,
                demand,
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> Amt {
        self.inventory
    }

    pub fn demand(&self) -> Amt {
        self.demand
    }

    /// Inventory left over once the supplier's own demand is met; negative for net sinks.
    pub fn surplus(&self) -> Amt {
        self.inventory - self.demand
    }

    pub fn is_net_supply(&self) -> bool {
        self.demand <= Amt::zero()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawSupplier<Amt> {
    pub name: String,
    pub inventory: Amt,
    pub demand: Amt,
}

impl<Amt: Amount> TryFrom<RawSupplier<Amt>> for Supplier<Amt> {
    type Error = Error;

    fn try_from(s: RawSupplier<Amt>) -> Result<Self, Self::Error> {
        Self::new(s.name, s.inventory, s.demand)
    }
}

impl<Amt> From<Supplier<Amt>> for RawSupplier<Amt> {
    fn from(s: Supplier<Amt>) -> Self {
        Self {
            name: s.name,
            inventory: s.inventory,
            demand: s.demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_attributes() {
        assert_eq!(Supplier::new("a", -1, 0), Err(Error::NegativeInventory));
        assert_eq!(Supplier::new("a", 0, -1), Err(Error::NegativeDemand));
    }

    #[test]
    fn surplus_can_be_negative() {
        let depot = Supplier::new("Depot", 0, 0).unwrap();
        let distributor = Supplier::new("Distributor1", 0, 210).unwrap();

        assert!(depot.is_net_supply());
        assert_eq!(depot.surplus(), 0);
        assert!(!distributor.is_net_supply());
        assert_eq!(distributor.surplus(), -210);
    }
}
