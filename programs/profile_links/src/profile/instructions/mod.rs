pub mod create_profile;
pub use create_profile::*;

pub mod add_link;
pub use add_link::*;

pub mod update_link;
pub use update_link::*;

pub mod remove_link;
pub use remove_link::*;
