use std::path::{Path, PathBuf};
use std::time::Instant;

use argh::FromArgs;

use rescale::image::ImageSize;
use rescale::imgproc::interpolation::InterpolationMode;
use rescale::imgproc::parallel::ExecutionStrategy;
use rescale::imgproc::resize::resize;
use rescale::io::functional as F;

#[derive(FromArgs)]
/// Resample a JPEG or PNG image to new dimensions.
struct Args {
    /// path to the input image (jpg, jpeg or png)
    #[argh(option, short = 'p')]
    path: PathBuf,

    /// desired width of the output image (derived from -h when omitted)
    #[argh(option, short = 'w')]
    width: Option<usize>,

    /// desired height of the output image (derived from -w when omitted)
    #[argh(option, short = 'h')]
    height: Option<usize>,

    /// interpolation method: nearestneighbor, bilinear or bicubic
    #[argh(option, short = 'm', default = "InterpolationMode::Nearest")]
    method: InterpolationMode,

    /// output filename (defaults to the method name plus the input extension)
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// run the resample across all available cores
    #[argh(option, short = 'c', default = "true")]
    concurrency: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let src = F::read_image_any_rgba8(&args.path)?;

    let new_size = target_size(src.size(), args.width, args.height)?;
    let output = match args.output {
        Some(output) => output,
        None => default_output_name(&args.path, args.method)?,
    };

    let strategy = if args.concurrency {
        ExecutionStrategy::Parallel
    } else {
        ExecutionStrategy::Serial
    };

    let start = Instant::now();
    let dst = resize(&src, new_size, args.method, strategy)?;
    log::info!(
        "{} resample {} -> {} took {:?}",
        args.method,
        src.size(),
        dst.size(),
        start.elapsed()
    );

    F::write_image_any_rgba8(&output, &dst)?;

    Ok(())
}

/// Derive the output size, filling in an omitted dimension so the aspect
/// ratio of the source is preserved.
fn target_size(
    src: ImageSize,
    width: Option<usize>,
    height: Option<usize>,
) -> Result<ImageSize, Box<dyn std::error::Error>> {
    match (width, height) {
        (None, None) => Err("at least one dimension, -w or -h, is required".into()),
        (Some(width), Some(height)) => Ok(ImageSize { width, height }),
        (Some(width), None) => {
            let scale = width as f64 / src.width as f64;
            Ok(ImageSize {
                width,
                height: (src.height as f64 * scale).round() as usize,
            })
        }
        (None, Some(height)) => {
            let scale = height as f64 / src.height as f64;
            Ok(ImageSize {
                width: (src.width as f64 * scale).round() as usize,
                height,
            })
        }
    }
}

/// Default output name: the method name plus the input file's extension.
fn default_output_name(
    input: &Path,
    method: InterpolationMode,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .ok_or("input file has no usable extension")?;

    Ok(PathBuf::from(format!(
        "{}.{}",
        method,
        ext.to_lowercase()
    )))
}
