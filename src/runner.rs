/*!
 * Chunked generation driver
 *
 * Partitions the candidate index space into contiguous chunks, computes
 * them on a rayon worker pool, and streams completed chunks to the output
 * file through a single writer. Completed chunks are written in arrival
 * order: each chunk is internally ordered, but only the sequential mode
 * preserves the global order end to end.
 *
 * Cancellation is cooperative. The chunk-index source stops producing once
 * the token is set; chunks already in flight finish and are written whole,
 * so the output never ends on a partial chunk. A failed write stops
 * dispatch the same way and surfaces as an error.
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::error::GeneratorError;
use crate::generator::PasswordGenerator;
use crate::mutation::{smart_mutations, MUTATIONS_PER_WORD};

/// Cooperative cancellation token, polled between chunks and candidates.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Run configuration.
pub struct RunOptions {
    /// Expand every candidate into its 7 smart-mutation variants.
    pub smart: bool,
    /// Candidates computed per work chunk.
    pub chunk_size: u64,
    /// Worker count; 1 selects the sequential streaming path.
    pub threads: usize,
    /// Show a progress bar while running.
    pub progress: bool,
}

/// What a run accomplished.
#[derive(Debug)]
pub struct RunSummary {
    /// Candidates the spec implies (before mutation expansion).
    pub total: u128,
    /// Lines actually written, mutation variants included.
    pub written: u64,
    pub elapsed: Duration,
}

/// Enumerate every candidate and stream it to `output`, one per line.
///
/// Cancellation is a normal early exit: the summary simply reports fewer
/// written lines, with no error.
pub fn run(
    generator: &PasswordGenerator,
    output: &Path,
    options: &RunOptions,
    cancel: &CancelToken,
) -> Result<RunSummary> {
    let total = generator.total();
    let started = Instant::now();

    let file = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let progress = if options.progress {
        let pb = ProgressBar::new(total.min(u64::MAX as u128) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}) {eta} {msg}")
                .unwrap()
                .progress_chars("█▓▒░-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let written = if options.threads <= 1 {
        run_streaming(generator, &mut writer, &progress, options, cancel, output)?
    } else {
        run_chunked(generator, &mut writer, &progress, options, cancel, output)?
    };

    writer
        .flush()
        .with_context(|| format!("failed to flush output file {}", output.display()))?;
    progress.finish_with_message("Done");

    Ok(RunSummary {
        total,
        written,
        elapsed: started.elapsed(),
    })
}

/// Single thread of control: enumeration, optional mutation and the write
/// are interleaved per candidate. Preserves the global order exactly.
fn run_streaming(
    generator: &PasswordGenerator,
    writer: &mut BufWriter<File>,
    progress: &ProgressBar,
    options: &RunOptions,
    cancel: &CancelToken,
    output: &Path,
) -> Result<u64> {
    let mut written = 0u64;
    let mut rng = rand::thread_rng();

    for candidate in generator.iter() {
        if cancel.is_cancelled() {
            break;
        }

        if options.smart {
            for variant in smart_mutations(&candidate, &mut rng) {
                writeln!(writer, "{}", variant).with_context(|| {
                    format!("write to {} failed after {} lines", output.display(), written)
                })?;
                written += 1;
            }
        } else {
            writeln!(writer, "{}", candidate).with_context(|| {
                format!("write to {} failed after {} lines", output.display(), written)
            })?;
            written += 1;
        }
        progress.inc(1);
    }

    Ok(written)
}

/// Worker-pool path: chunk computation is pure and runs on a rayon pool;
/// completed chunks flow through a bounded channel to this thread, the sole
/// writer.
fn run_chunked(
    generator: &PasswordGenerator,
    writer: &mut BufWriter<File>,
    progress: &ProgressBar,
    options: &RunOptions,
    cancel: &CancelToken,
    output: &Path,
) -> Result<u64> {
    let total = generator.total();
    if total == 0 {
        return Ok(0);
    }

    let effective = (options.chunk_size.max(1) as u128).min(total) as u64;
    let num_chunks = total.div_ceil(effective as u128);
    let smart = options.smart;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .context("failed to build worker pool")?;

    type ChunkMessage = Result<(u64, Vec<String>), GeneratorError>;
    let (tx, rx) = mpsc::sync_channel::<ChunkMessage>(options.threads * 2);

    let mut written = 0u64;
    let mut failure: Option<anyhow::Error> = None;
    // Raised by the writer on a failed write so that dispatch stops at the
    // source; the user-facing cancel token stays untouched.
    let abort = AtomicBool::new(false);

    std::thread::scope(|scope| {
        let abort = &abort;
        scope.spawn(move || {
            pool.install(|| {
                (0..num_chunks)
                    // Stop handing out chunk indices once cancelled or
                    // aborted; in-flight chunks finish, no further ones
                    // start.
                    .take_while(|_| {
                        !cancel.is_cancelled() && !abort.load(Ordering::Relaxed)
                    })
                    .par_bridge()
                    .for_each_with(tx, |tx, chunk_index| {
                        if cancel.is_cancelled() || abort.load(Ordering::Relaxed) {
                            return;
                        }

                        let start = chunk_index * effective as u128;
                        let count = (total - start).min(effective as u128) as u64;

                        let message = generator.chunk(start, count).map(|candidates| {
                            let produced = candidates.len() as u64;
                            let lines = if smart {
                                let mut rng = rand::thread_rng();
                                let mut out =
                                    Vec::with_capacity(candidates.len() * MUTATIONS_PER_WORD);
                                for word in &candidates {
                                    out.extend(smart_mutations(word, &mut rng));
                                }
                                out
                            } else {
                                candidates
                            };
                            (produced, lines)
                        });

                        // The writer may already be gone after a failure.
                        let _ = tx.send(message);
                    });
            });
        });

        // Drain until every dispatched chunk has arrived. A chunk received
        // whole is written whole.
        for message in &rx {
            match message {
                Ok((produced, lines)) => {
                    for line in &lines {
                        if let Err(e) = writeln!(writer, "{}", line) {
                            failure = Some(anyhow::Error::new(e).context(format!(
                                "write to {} failed after {} lines",
                                output.display(),
                                written
                            )));
                            break;
                        }
                        written += 1;
                    }
                    if failure.is_some() {
                        abort.store(true, Ordering::SeqCst);
                        break;
                    }
                    progress.inc(produced);
                }
                Err(e) => {
                    failure = Some(
                        anyhow::Error::new(e)
                            .context("chunk math produced an out-of-range index"),
                    );
                    abort.store(true, Ordering::SeqCst);
                    break;
                }
            }
        }
        drop(rx);
    });

    match failure {
        Some(error) => Err(error),
        None => Ok(written),
    }
}
