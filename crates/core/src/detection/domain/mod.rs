pub mod bar_detector;
