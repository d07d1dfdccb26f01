pub mod constants;
pub mod contact;
pub mod particles;
pub mod projects;
pub mod state;

pub use constants::*;
pub use contact::*;
pub use particles::*;
pub use projects::*;
pub use state::*;
