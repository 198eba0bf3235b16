mod registry;

pub use registry::{ColorRegistry, DEFAULT_COLOR, SEED_COLORS, global};
