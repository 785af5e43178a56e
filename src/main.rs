// Thin command-line runner around the `visual_diff` library. All file-path
// handling lives here; the library itself only sees decoded images and
// explicit output paths.

use std::env;
use std::path::Path;
use std::process;
use visual_diff::pipeline::ComparisonPipeline;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: visual_diff <expected_image> <actual_image> [output_png] [output_csv]");
        return;
    }
    let expected_path = Path::new(&args[1]);
    let actual_path = Path::new(&args[2]);
    let output_png = args.get(3).map(String::as_str).unwrap_or("result.png");

    let pipeline = ComparisonPipeline::default();
    let report = match pipeline.compare_files(expected_path, actual_path) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("comparison failed: {error}");
            process::exit(1);
        }
    };

    if report.has_differences() {
        println!("Found {} differing regions:", report.regions.len());
        for (index, region) in report.regions.iter().enumerate() {
            println!(
                "  Region{}: ({}, {}, {}, {})",
                index + 1,
                region.x(),
                region.y(),
                region.width(),
                region.height()
            );
        }
    } else {
        println!("Images are identical.");
    }

    if let Err(error) = report.write_composite_png(Path::new(output_png)) {
        eprintln!("failed to write composite: {error}");
        process::exit(1);
    }
    println!("Composite written to {output_png}");

    if let Some(output_csv) = args.get(4) {
        if let Err(error) = report.write_csv(Path::new(output_csv)) {
            eprintln!("failed to write CSV: {error}");
            process::exit(1);
        }
        println!("CSV exported: {output_csv}");
    }
}
