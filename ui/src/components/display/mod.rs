pub mod choice_summary;
pub mod map_legend;

pub use choice_summary::*;
pub use map_legend::*;
