//! Progress events for a resolution pass.
//!
//! Callback-based so the pipeline stays independent of how progress is shown
//! (an `indicatif` bar in the CLI, a recorder in tests). Events are purely
//! observational.

/// A progress notification from the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A pass over `total` rows is starting.
    Started {
        /// Number of rows in the pass.
        total: usize,
    },

    /// Row `index` (zero-based) reached its assembled state.
    RowFinished {
        /// Zero-based row index.
        index: usize,
        /// Number of rows in the pass.
        total: usize,
        /// Title of the finished row.
        title: String,
    },

    /// Every row has been assembled.
    Finished {
        /// Number of rows processed.
        total: usize,
    },
}

/// Callback type for receiving progress events.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Render progress with an `indicatif` bar on stderr.
pub fn progress_bar_callback() -> ProgressCallback {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar = ProgressBar::hidden();
    Box::new(move |event| match event {
        ProgressEvent::Started { total } => {
            bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            bar.set_length(total as u64);
            if let Ok(style) =
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")
            {
                bar.set_style(style);
            }
        }
        ProgressEvent::RowFinished { title, .. } => {
            bar.set_message(title);
            bar.inc(1);
        }
        ProgressEvent::Finished { total } => {
            bar.finish_and_clear();
            eprintln!("Processed: {total}/{total}");
        }
    })
}
