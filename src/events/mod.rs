pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_regenerate_key;
pub use pointer::{wire_input_handlers, InputWiring};
