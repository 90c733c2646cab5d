pub mod download;
pub mod navigation;

pub use download::*;
pub use navigation::redirect_to;
