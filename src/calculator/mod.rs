//! Cost calculator module: transfer inputs, pricing, the comparison engine and the waitlist stub.
mod batch;
mod engine;
mod format;
mod quote;
mod transfer;
mod types;
mod waitlist;

pub use batch::*;
pub use engine::*;
pub use format::*;
pub use quote::*;
pub use transfer::*;
pub use types::*;
pub use waitlist::*;
