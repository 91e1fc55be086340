pub mod candidates;
pub mod identity;
pub mod invariants;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod schema;
