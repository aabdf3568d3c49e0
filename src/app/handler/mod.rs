//! Handler module - TEA update function and key translation
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event translation into messages

pub mod keys;
pub mod update;


pub use keys::handle_key;
pub use update::update;
