pub mod location_select;
pub mod region_map;
pub mod scheme_select;

pub use location_select::*;
pub use region_map::*;
pub use scheme_select::*;
