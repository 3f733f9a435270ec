// src/presentation.rs
use code_snapshot_engine::stats::RunResult;

pub fn print_success(result: &RunResult) {
    println!(
        "Wrote {} section(s) to {}",
        result.sections_written,
        result.snapshot_path.display()
    );
    if !result.skipped.is_empty() {
        println!("Skipped {} path(s)", result.skipped.len());
    }
    println!(
        "Extension map: {} ({} extension(s))",
        result.map_path.display(),
        result.extensions.len()
    );
}

pub fn print_error(err: &crate::error::AppError) {
    eprintln!("Error: {err}");
}
