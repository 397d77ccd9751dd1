pub mod collision;
pub mod launch;
pub mod speed;
pub mod trick_shot;

pub use collision::*;
pub use launch::*;
pub use speed::*;
pub use trick_shot::*;
