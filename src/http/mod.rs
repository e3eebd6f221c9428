// HTTP layer shared by every GitHub resource.
// An immutable request template, a buffered response and a pluggable wire.

pub mod request;
pub mod response;
pub mod wire;

#[cfg(test)]
pub(crate) mod testing;

pub use request::Request;
pub use response::Response;
pub use wire::{ReqwestWire, Wire};
