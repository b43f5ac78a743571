mod agent;
mod device;
mod parsed;
mod variable;

pub use agent::*;
pub use device::*;
pub use parsed::*;
pub use variable::*;
