use perfect_pixel::config::load_config;
use perfect_pixel::image::io::{load_rgb_image, save_rgb_result, write_json_file};
use perfect_pixel::resample::upscale_nearest;
use perfect_pixel::{Error, PixelGridDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgb_image(&config.input)?;
    let detector = PixelGridDetector::new(config.options);
    let report = detector
        .process_with_diagnostics(input.as_view())
        .map_err(|e| match e {
            Error::GridNotFound => format!(
                "{e} ({}); set options.manual_grid_size to [cells_x, cells_y]",
                config.input.display()
            ),
            other => other.to_string(),
        })?;

    save_rgb_result(&report.result, &config.output.image)?;
    println!(
        "Restored {}x{} -> {}x{} ({:.2} ms), saved to {}",
        input.width(),
        input.height(),
        report.result.width,
        report.result.height,
        report.trace.timings.total_ms,
        config.output.image.display()
    );

    if let Some(preview) = &config.output.preview {
        let scale = config.output.preview_scale.max(1);
        save_rgb_result(&upscale_nearest(&report.result, scale), preview)?;
        println!("Saved {scale}x preview to {}", preview.display());
    }

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &report)?;
        println!("Saved diagnostics to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: perfect_pixel <config.json>".to_string()
}
