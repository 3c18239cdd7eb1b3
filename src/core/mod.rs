pub mod constants;
pub mod frame_gate;
pub mod node;
pub mod reveal;
pub mod viewport;
pub mod zoom_toggle;

pub use frame_gate::*;
pub use node::*;
pub use reveal::*;
pub use viewport::*;
pub use zoom_toggle::*;
