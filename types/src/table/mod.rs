mod config;
mod constants;
mod player;
mod round;

pub use config::*;
pub use constants::*;
pub use player::*;
pub use round::*;
