mod normalize;
mod split;

pub use normalize::{DEFAULT_SEPARATOR, normalize_path, normalize_pattern};
pub use split::{count_segments, split_first_segment, split_pattern_segment};
