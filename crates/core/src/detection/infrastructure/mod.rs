pub mod edge_intensity_detector;
