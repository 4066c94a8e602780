#![allow(dead_code)]

use flowalloc::{Supplier, SupplierId, Transporter};

pub const MANUFACTURER_1: SupplierId = SupplierId(0);
pub const MANUFACTURER_2: SupplierId = SupplierId(1);
pub const DEPOT: SupplierId = SupplierId(2);
pub const DISTRIBUTOR_1: SupplierId = SupplierId(3);
pub const DISTRIBUTOR_2: SupplierId = SupplierId(4);
pub const DISTRIBUTOR_3: SupplierId = SupplierId(5);
pub const DISTRIBUTOR_4: SupplierId = SupplierId(6);
pub const DISTRIBUTOR_5: SupplierId = SupplierId(7);

/// Two manufacturers feeding five distributors, partly through a depot.
pub fn sample_network() -> (Vec<Supplier<i32>>, Vec<Transporter<i32>>) {
    let suppliers = vec![
        Supplier::new("Manufacturer 1", 600, 0).unwrap(),
        Supplier::new("Manufacturer 2", 600, 0).unwrap(),
        Supplier::new("Depot", 0, 0).unwrap(),
        Supplier::new("Distributor1", 0, 210).unwrap(),
        Supplier::new("Distributor2", 0, 220).unwrap(),
        Supplier::new("Distributor3", 0, 230).unwrap(),
        Supplier::new("Distributor4", 0, 100).unwrap(),
        Supplier::new("Distributor5", 0, 250).unwrap(),
    ];

    let transporters = vec![
        Transporter::new("Transporter1", MANUFACTURER_1, DEPOT, 4, 600).unwrap(),
        Transporter::new("Transporter2", MANUFACTURER_2, DISTRIBUTOR_1, 9, 600).unwrap(),
        Transporter::new("Transporter3", DEPOT, DISTRIBUTOR_1, 10, 100).unwrap(),
        Transporter::new("Transporter4", DEPOT, DISTRIBUTOR_2, 6, 400).unwrap(),
        Transporter::new("Transporter5", DISTRIBUTOR_1, DISTRIBUTOR_3, 8, 400).unwrap(),
        Transporter::new("Transporter6", DISTRIBUTOR_1, DISTRIBUTOR_5, 2, 400).unwrap(),
        Transporter::new("Transporter7", DISTRIBUTOR_2, DISTRIBUTOR_3, 3, 100).unwrap(),
        Transporter::new("Transporter8", DISTRIBUTOR_2, DISTRIBUTOR_4, 7, 40).unwrap(),
        Transporter::new("Transporter9", DISTRIBUTOR_3, DISTRIBUTOR_4, 5, 90).unwrap(),
    ];

    (suppliers, transporters)
}

pub fn names<'a>(transporters: impl IntoIterator<Item = &'a Transporter<i32>>) -> Vec<&'a str> {
    transporters.into_iter().map(|t| t.name()).collect()
}
