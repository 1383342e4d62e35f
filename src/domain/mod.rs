pub mod analysis;
pub mod design;
pub mod location;
pub mod types;

pub use analysis::*;
pub use design::*;
pub use location::*;
pub use types::*;
