mod bindings;
mod dump;
mod error;
mod insert;
mod node;
mod segment_tree;
mod traversal;

pub use bindings::{Bindings, KeyValue, Match};
pub use dump::RouteEntry;
pub use error::{TreeError, TreeResult};
pub use insert::Route;
pub use segment_tree::Tree;
