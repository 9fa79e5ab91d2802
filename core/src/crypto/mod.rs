pub mod types;
pub mod kdf;
pub mod cipher;
pub mod random;

pub use types::*;
pub use kdf::*;
pub use cipher::*;
pub use random::*;
