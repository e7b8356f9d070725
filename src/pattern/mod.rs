mod constraint;
mod error;
mod lexer;
mod segment;

pub use constraint::{Constraint, ConstraintCache};
pub use error::{PatternError, PatternResult};
pub use lexer::parse_segment;
pub use segment::{SegmentKind, SegmentPattern};
