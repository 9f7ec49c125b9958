pub mod creator;
pub mod video;
