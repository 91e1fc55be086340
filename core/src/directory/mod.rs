pub mod lookup;
pub mod model;
