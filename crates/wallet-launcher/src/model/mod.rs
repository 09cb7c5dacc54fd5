pub mod arguments;
pub mod layout;
pub mod platform;

pub use arguments::*;
pub use layout::*;
pub use platform::*;
