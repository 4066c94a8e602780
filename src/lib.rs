#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod allocation;
pub mod amount;
pub mod error;
pub mod id;
pub mod impls;
pub mod network;
pub mod node;
pub mod report;
pub mod supplier;
pub mod transporter;

use core::fmt::Debug;

pub use crate::algo::cheapest_path::cheapest_path;
pub use crate::allocation::Allocation;
pub use crate::amount::Amount;
pub use crate::error::Error;
pub use crate::id::{EdgeId, SupplierId, TransporterId};
pub use crate::impls::simple::SimpleAllocator;
pub use crate::network::{Edge, FlowNetwork};
pub use crate::node::Node;
pub use crate::report::{
    display_allocations, total_amount_shipped, total_demand, total_transporter_cost,
};
pub use crate::supplier::{RawSupplier, Supplier};
pub use crate::transporter::{RawTransporter, Transporter};

/// An algorithm that assigns shipments to transporters so that surplus inventory meets demand.
pub trait Allocator {
    type Amount;
    type Error: Debug;

    /// Runs the allocation. Missing suppliers or transporters are not an error: the result is
    /// simply empty.
    fn allocate_for_demand(
        &mut self,
        suppliers: Option<&[Supplier<Self::Amount>]>,
        transporters: Option<&[Transporter<Self::Amount>]>,
    ) -> Result<Allocation<Self::Amount>, Self::Error>;

    /// Verifies that allocated transporters respect their capacities and the supplier balances.
    fn check(
        &self,
        suppliers: &[Supplier<Self::Amount>],
        allocated: &[Transporter<Self::Amount>],
    ) -> Result<(), Self::Error>;
}
