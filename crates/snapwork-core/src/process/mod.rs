pub mod operations;

pub use operations::resolve_image_path;
