mod gallery;
mod viewer;

pub use gallery::PhotosPage;
pub use viewer::PhotoViewer;
