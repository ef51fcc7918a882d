use crate::error::ResizeError;

/// Controls how the resample loop is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool with one worker per pool thread.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` worker threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant
    /// overhead. Use this primarily for benchmarking or specific isolation
    /// needs.
    Fixed(usize),
}

/// Run `f` over the output buffer, split into one contiguous span per worker.
///
/// The flat pixel range `[0, num_pixels)` is partitioned into disjoint
/// ranges `[i*N/workers, (i+1)*N/workers)`; each worker receives the first
/// pixel index of its range and the exclusive sub-slice backing it, so no
/// synchronization is needed beyond the final join. Uneven division by
/// integer truncation is fine; the boundary formula keeps the spans exactly
/// covering the buffer.
///
/// # Arguments
///
/// * `data` - The flat output buffer, `num_pixels * pixel_stride` long.
/// * `pixel_stride` - Elements per pixel (the channel count).
/// * `num_pixels` - Number of pixels in the buffer.
/// * `strategy` - The execution strategy.
/// * `f` - Called once per worker with (first pixel index, span).
///
/// # Returns
///
/// A result indicating success or failure.
pub(crate) fn for_each_span<F>(
    data: &mut [u8],
    pixel_stride: usize,
    num_pixels: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ResizeError>
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    debug_assert_eq!(data.len(), num_pixels * pixel_stride);

    match strategy {
        ExecutionStrategy::Serial => {
            f(0, data);
            Ok(())
        }
        ExecutionStrategy::Parallel => {
            run_spans(data, pixel_stride, num_pixels, rayon::current_num_threads(), &f);
            Ok(())
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ResizeError::InvalidWorkerCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ResizeError::ThreadPool(e.to_string()))?;

            pool.install(|| run_spans(data, pixel_stride, num_pixels, n, &f));
            Ok(())
        }
    }
}

fn run_spans<F>(data: &mut [u8], pixel_stride: usize, num_pixels: usize, workers: usize, f: &F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    let workers = workers.max(1);

    let mut spans = Vec::with_capacity(workers);
    let mut rest = data;
    let mut start = 0;
    for i in 0..workers {
        let end = (i + 1) * num_pixels / workers;
        let (head, tail) = std::mem::take(&mut rest).split_at_mut((end - start) * pixel_stride);
        spans.push((start, head));
        rest = tail;
        start = end;
    }

    rayon::scope(|s| {
        for (first, span) in spans {
            s.spawn(move |_| f(first, span));
        }
    });
}
