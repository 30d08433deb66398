pub mod classifier;
pub mod hsv;
pub mod palette;
pub mod scan_service;
pub mod scanner;

pub use classifier::{Classification, ColorClassifier};
pub use hsv::{rgb_to_hsv, Hsv, HsvImage};
pub use palette::{Color, ColorRange};
pub use scan_service::FaceScanService;
pub use scanner::{FaceScan, FaceScanner};
