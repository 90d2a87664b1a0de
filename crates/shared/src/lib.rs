mod error;
mod notification;

pub use error::*;
pub use notification::*;
