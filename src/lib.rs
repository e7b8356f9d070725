//! Segment tree for path routing.
//!
//! Patterns are split on a separator (`/` by default) into static segments,
//! `:name[:regex]` parameters and a terminal `*name[:regex]` catch-all.
//! A [`Tree`] resolves a path to the first, all, or both kinds of matching
//! routes, extracting named [`Bindings`] on the way. [`Router`] adds the
//! build-then-seal lifecycle for sharing one tree across threads.

pub mod errors;
pub mod path;
pub mod pattern;
pub mod router;
pub mod tree;
pub mod types;

pub use errors::ErrorKind;
pub use router::{
    Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError, RouterResult,
};
pub use tree::{Bindings, KeyValue, Match, Route, RouteEntry, Tree, TreeError, TreeResult};
pub use types::{BoxError, TransformFn};
