#![warn(clippy::all, clippy::pedantic)]
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use csv::Writer;
use flowalloc::{
    cheapest_path, display_allocations, total_amount_shipped, total_demand,
    total_transporter_cost, Allocation, Allocator, SimpleAllocator, Supplier, SupplierId,
    Transporter,
};
use log::LevelFilter;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Debug, Parser)]
#[command(name = "flowalloc-cli", version, about = "Supply-chain cheapest paths and allocations")]
struct Cli {
    /// CSV file with `name,inventory,demand` rows
    #[arg(long, default_value = "./data/suppliers.csv")]
    suppliers: PathBuf,

    /// CSV file with `name,from,to,cost_per_unit,max_capacity` rows, `from`/`to` being supplier names
    #[arg(long, default_value = "./data/transporters.csv")]
    transporters: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cheapest chain of transporters between two suppliers
    Path {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Allocate surplus inventory to demand and print the transporter allocations
    Allocate {
        /// Also write the allocations to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the allocated network in Graphviz DOT format
        #[arg(long)]
        dot: bool,
    },
}

#[derive(Debug, Deserialize)]
struct TransporterRecord {
    name: String,
    from: String,
    to: String,
    cost_per_unit: i64,
    max_capacity: i64,
}

#[derive(Debug, Serialize)]
struct AllocationRecord<'a> {
    name: &'a str,
    from: &'a str,
    to: &'a str,
    allocation: i64,
    cost_per_unit: i64,
}

// Function to read the suppliers from CSV file
fn read_suppliers_csv(filepath: &Path) -> Result<Vec<Supplier<i64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let rows: Result<Vec<_>, _> = rdr.deserialize().collect();
    Ok(rows?)
}

fn supplier_ids(suppliers: &[Supplier<i64>]) -> Result<HashMap<&str, SupplierId>, Box<dyn Error>> {
    let mut ids = HashMap::new();
    for (i, supplier) in suppliers.iter().enumerate() {
        if ids.insert(supplier.name(), SupplierId(i)).is_some() {
            return Err(format!("duplicate supplier name {:?}", supplier.name()).into());
        }
    }
    Ok(ids)
}

fn lookup(ids: &HashMap<&str, SupplierId>, name: &str) -> Result<SupplierId, Box<dyn Error>> {
    ids.get(name)
        .copied()
        .ok_or_else(|| format!("unknown supplier {name:?}").into())
}

// Function to read the transporters from CSV file, resolving supplier names
fn read_transporters_csv(
    filepath: &Path,
    ids: &HashMap<&str, SupplierId>,
) -> Result<Vec<Transporter<i64>>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_path(filepath)?;
    let mut transporters = Vec::new();
    for row in rdr.deserialize() {
        let record: TransporterRecord = row?;
        let transporter = Transporter::new(
            record.name.as_str(),
            lookup(ids, &record.from)?,
            lookup(ids, &record.to)?,
            record.cost_per_unit,
            record.max_capacity,
        )
        .map_err(|e| format!("transporter {:?}: {e}", record.name))?;
        transporters.push(transporter);
    }
    Ok(transporters)
}

// Function to write the allocation results
fn write_csv(
    allocation: &Allocation<i64>,
    suppliers: &[Supplier<i64>],
    filepath: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filepath)?;
    for t in allocation.transporters() {
        wtr.serialize(AllocationRecord {
            name: t.name(),
            from: suppliers[t.from().index()].name(),
            to: suppliers[t.to().index()].name(),
            allocation: t.allocation(),
            cost_per_unit: t.cost_per_unit(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn to_dot(allocation: &Allocation<i64>, suppliers: &[Supplier<i64>]) -> String {
    let mut graph = DiGraph::<&str, String>::new();
    let nodes: Vec<_> = suppliers
        .iter()
        .map(|s| graph.add_node(s.name()))
        .collect();
    for t in allocation.transporters() {
        graph.add_edge(
            nodes[t.from().index()],
            nodes[t.to().index()],
            format!("{}: {}/{}", t.name(), t.allocation(), t.max_capacity()),
        );
    }
    format!("{}", Dot::new(&graph))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level: LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| format!("invalid log level {:?}", cli.log_level))?;
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .map_err(|e| e.to_string())?;

    let suppliers = read_suppliers_csv(&cli.suppliers)?;
    let ids = supplier_ids(&suppliers)?;
    let transporters = read_transporters_csv(&cli.transporters, &ids)?;
    log::debug!(
        "loaded {} suppliers and {} transporters",
        suppliers.len(),
        transporters.len()
    );

    match cli.command {
        Command::Path { from, to } => {
            let path = cheapest_path(
                &suppliers,
                &transporters,
                lookup(&ids, &from)?,
                lookup(&ids, &to)?,
            )
            .map_err(|e| e.to_string())?;
            let cost = path
                .iter()
                .try_fold(0i64, |total, t| total.checked_add(t.cost_per_unit()))
                .ok_or_else(|| flowalloc::Error::ArithmeticOverflow.to_string())?;
            println!("Cheapest path:\n{}", display_allocations(path.iter().copied()));
            println!("Cost per unit: ${cost}");
        }
        Command::Allocate { output, dot } => {
            let mut allocator = SimpleAllocator::new();
            let allocation = allocator
                .allocate_for_demand(Some(suppliers.as_slice()), Some(transporters.as_slice()))
                .map_err(|e| e.to_string())?;
            allocator
                .check(&suppliers, allocation.transporters())
                .map_err(|e| e.to_string())?;

            println!(
                "Allocated transporters:\n{}\nTotal cost: ${}",
                display_allocations(allocation.transporters()),
                total_transporter_cost(allocation.transporters()).map_err(|e| e.to_string())?
            );
            println!("Total demand: {}", total_demand(&suppliers));
            println!(
                "Total amount shipped: {}",
                total_amount_shipped(allocation.transporters())
            );
            println!("Delivered to demand: {}", allocation.delivered());

            if let Some(output) = output {
                write_csv(&allocation, &suppliers, &output)?;
            }
            if dot {
                println!("{}", to_dot(&allocation, &suppliers));
            }
        }
    }

    Ok(())
}
