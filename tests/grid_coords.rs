mod common;

use common::synthetic_image::{
    pixel_art_rgb, resize_nearest, soften_cell_edges, solid_rgb, upscale_rgb,
};
use perfect_pixel::image::ImageRgb8;
use perfect_pixel::{
    debug_grid_coords, detect_and_resample, DetectOptions, GridSource, PixelGridDetector,
};

fn uniform(n: usize, step: f64) -> Vec<f64> {
    (0..=n).map(|i| i as f64 * step).collect()
}

#[test]
fn anisotropic_cells_resolve_through_gradient_path() {
    let _ = env_logger::builder().is_test(true).try_init();
    // 4 px wide, 8 px tall cells: a 2x aspect ratio.
    let logical = pixel_art_rgb(16, 12);
    let image = upscale_rgb(&logical, 16, 12, 4, 8);

    let coords = debug_grid_coords(&image, 64, 96, &DetectOptions::default()).unwrap();

    assert_eq!(coords.source, GridSource::Gradient);
    assert_eq!((coords.scale_x, coords.scale_y), (16, 12));
    assert_eq!(coords.x_boundaries, uniform(16, 4.0));
    assert_eq!(coords.y_boundaries, uniform(12, 8.0));

    let result = detect_and_resample(&image, 64, 96, &DetectOptions::default()).unwrap();
    assert_eq!((result.width, result.height), (16, 12));
}

#[test]
fn diagnostic_coordinates_match_the_restored_grid() {
    let logical = pixel_art_rgb(8, 8);
    let image = upscale_rgb(&logical, 8, 8, 8, 8);
    let options = DetectOptions::default();

    let coords = debug_grid_coords(&image, 64, 64, &options).unwrap();
    assert_eq!((coords.scale_x, coords.scale_y), (8, 8));
    assert_eq!(coords.x_boundaries, uniform(8, 8.0));
    assert_eq!(coords.y_boundaries, uniform(8, 8.0));

    let detector = PixelGridDetector::new(options);
    let report = detector
        .process_with_diagnostics(ImageRgb8::new(&image, 64, 64).unwrap())
        .unwrap();
    assert_eq!(report.trace.refinement.coordinates, coords);
    assert_eq!(report.trace.postprocess.x_boundaries, coords.x_boundaries);
    assert_eq!(
        report.result.width as usize,
        report.trace.postprocess.x_boundaries.len() - 1
    );

    let estimation = report
        .trace
        .estimation
        .as_ref()
        .expect("auto detection records its estimates");
    assert_eq!(estimation.source, Some(coords.source));
    assert_eq!(estimation.scale, Some(coords.scale()));
    for stage in ["gradient", "estimate", "refine", "postprocess", "sample"] {
        assert!(
            report.trace.timings.stage_ms(stage).is_some(),
            "missing timing for {stage}"
        );
    }
}

#[test]
fn spectral_estimate_takes_gradient_counts_when_they_agree() {
    // 192 px pads to 256 FFT bins, so the spectral count lands between bins.
    let (cols, k) = (16usize, 12usize);
    let logical = pixel_art_rgb(cols, cols);
    let mut image = upscale_rgb(&logical, cols, cols, k, k);
    let side = cols * k;
    soften_cell_edges(&mut image, side, side, k);

    let report = PixelGridDetector::default()
        .process_with_diagnostics(ImageRgb8::new(&image, side as u32, side as u32).unwrap())
        .unwrap();
    let estimation = report.trace.estimation.as_ref().unwrap();
    assert!(estimation.spectral.is_some());
    assert!(!estimation.spectral_rejected);
    assert!(!estimation.spectral_overridden);
    assert_eq!(estimation.source, Some(GridSource::Spectral));
    assert_eq!(estimation.scale, Some(perfect_pixel::GridScale::new(16, 16)));
    assert_eq!((report.result.width, report.result.height), (16, 16));
}

#[test]
fn refined_cell_count_is_reported_next_to_the_estimate() {
    // 16 cells of 6 or 7 px.
    let logical = pixel_art_rgb(16, 16);
    let image = resize_nearest(&logical, 16, 16, 100, 100);
    let report = PixelGridDetector::default()
        .process_with_diagnostics(ImageRgb8::new(&image, 100, 100).unwrap())
        .unwrap();

    let coords = &report.trace.refinement.coordinates;
    assert_eq!(coords.cells_x(), coords.x_boundaries.len() - 1);
    assert_eq!((coords.cells_x(), coords.cells_y()), (16, 16));
    let estimation = report.trace.estimation.as_ref().unwrap();
    assert_eq!(estimation.scale, Some(coords.scale()));
    assert_eq!((report.result.width, report.result.height), (16, 16));
}

#[test]
fn manual_grid_is_reported_as_manual() {
    let image = solid_rgb(48, 48, [5, 5, 5]);
    let options = DetectOptions::default().with_manual_grid_size(6, 6);
    let coords = debug_grid_coords(&image, 48, 48, &options).unwrap();
    assert_eq!(coords.source, GridSource::Manual);
    assert_eq!(coords.x_boundaries, uniform(6, 8.0));

    let report = PixelGridDetector::new(options)
        .process_with_diagnostics(ImageRgb8::new(&image, 48, 48).unwrap())
        .unwrap();
    assert!(report.trace.estimation.is_none());
    assert!(report.trace.timings.stage_ms("estimate").is_none());
}

#[test]
fn report_serializes_to_camel_case_json() {
    let logical = pixel_art_rgb(16, 16);
    let image = upscale_rgb(&logical, 16, 16, 4, 4);
    let report = PixelGridDetector::default()
        .process_with_diagnostics(ImageRgb8::new(&image, 64, 64).unwrap())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["result"]["width"], 16);
    assert!(json["result"].get("pixels").is_none());
    assert!(json["trace"]["refinement"]["coordinates"]["xBoundaries"].is_array());
    assert!(json["trace"]["timings"]["totalMs"].is_number());
    assert_eq!(json["trace"]["input"]["sampleMethod"], "center");
}
