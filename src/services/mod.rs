pub mod frames;
pub mod live;

pub use frames::{collect_frame_paths, load_image};
pub use live::{frame_period, run_live, LiveProcessor, LiveStats, ProcessedFrame};
