pub mod instructions;
pub mod profile_state;

pub use instructions::*;
pub use profile_state::{Link, UserProfile};
