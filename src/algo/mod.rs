pub mod cheapest_path;
pub mod max_flow;
