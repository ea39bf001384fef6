pub mod die;
pub mod hand;
pub mod player;
pub mod section;

pub use die::{Die, DieError};
pub use hand::Hand;
pub use player::Player;
pub use section::Section;
