//! Terminal spinner shown while a reply is "being written".
//!
//! Replies are instant; [`pace`] holds one back for a configurable delay so
//! the interactive flow feels like a remote call. Zero delay skips it.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// A spinner running in a background task, drawn on stderr so stdout
/// carries only replies.
pub struct Spinner {
    handle: JoinHandle<()>,
    stop: watch::Sender<bool>,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let (stop, mut stopped) = watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(INTERVAL);
            for frame in FRAMES.iter().cycle() {
                // \x1b[2K clears the line, \r returns to its start
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = stopped.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self { handle, stop }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.stop.send(true);
        let _ = self.handle.await;
    }
}

/// Show a spinner with `message` for `delay`. Cancelling the returned
/// future (e.g. from `tokio::select!`) leaves a stray spinner task that
/// exits once its sender drops.
pub async fn pace(delay: Duration, message: &str) {
    if delay.is_zero() {
        return;
    }
    let spinner = Spinner::start(message);
    tokio::time::sleep(delay).await;
    spinner.stop().await;
}
