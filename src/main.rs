use anyhow::{anyhow, Result};

use jpeg_quality::jpeg_quality_from_file_path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Err(anyhow!("usage: jpeg_quality <file.jpg>..."));
    }

    for file_path in &args {
        let quality = jpeg_quality_from_file_path(file_path)?;
        println!("{}: {}", file_path, quality);
    }

    Ok(())
}
