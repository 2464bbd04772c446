pub mod root;
pub mod video;
pub use root::{health_check_route, root_route};
pub use video::download_video_route;
