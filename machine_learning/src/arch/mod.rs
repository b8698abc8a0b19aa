pub mod activations;
mod layout;
mod policy;

pub use layout::{PolicyLayout, PolicyParams};
pub use policy::Policy;
