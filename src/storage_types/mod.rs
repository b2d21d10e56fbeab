//! Family bounded storage types intended to work well with threading and with a focus on shared
//! traits. For more information see crate level documentation [crate]

mod slot_storage;
mod vec_storage;

pub use slot_storage::*;
pub use vec_storage::*;
