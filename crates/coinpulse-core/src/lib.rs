pub mod constants;
pub mod market;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod store;

pub use constants::*;
pub use pointer::*;
pub use reveal::*;
pub use scene::*;
pub use scroll::*;
pub use store::*;

