pub mod root;
pub mod video;
pub use root::RootController;
pub use video::VideoController;
