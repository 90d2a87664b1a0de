mod controller;
mod intake;
mod request;
mod types;

pub use controller::*;
pub use intake::*;
pub use request::*;
pub use types::*;
