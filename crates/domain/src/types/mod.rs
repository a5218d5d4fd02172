//! Parameter types for the admin client operations

pub mod bootstrap;
pub mod device;
pub mod installation;
pub mod variant;

pub use bootstrap::*;
pub use device::*;
pub use installation::*;
pub use variant::*;
