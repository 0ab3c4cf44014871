pub mod carousel;
pub mod constants;
pub mod gesture;
pub mod parallax;
pub mod reveal;
pub mod throttle;

pub use carousel::*;
pub use constants::*;
pub use gesture::*;
pub use parallax::*;
pub use reveal::*;
pub use throttle::*;
