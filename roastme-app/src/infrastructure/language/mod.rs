mod detector;

pub use detector::detect_language;
