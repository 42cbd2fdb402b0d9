use std::time::Duration;

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
    time::timeout,
};
use tracing::debug;

/// Emits a value once `window` passes without a newer one arriving.
///
/// A newer input restarts the window, so only the last value of a burst is
/// emitted. A settled value equal to the previously emitted one is dropped.
/// When the input closes, a pending value is flushed and the output closes.
pub fn debounce_distinct<T>(
    mut input: UnboundedReceiver<T>,
    window: Duration,
) -> (UnboundedReceiver<T>, JoinHandle<()>)
where
    T: Clone + PartialEq + Send + 'static,
{
    let (output, settled) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        let mut last_emitted: Option<T> = None;
        while let Some(mut pending) = input.recv().await {
            let input_closed = loop {
                match timeout(window, input.recv()).await {
                    Ok(Some(newer)) => pending = newer,
                    Ok(None) => break true,
                    Err(_) => break false,
                }
            };
            if !emit_if_changed(&output, &mut last_emitted, pending) || input_closed {
                break;
            }
        }
    });
    (settled, task)
}

/// Returns false once the receiving side is gone.
fn emit_if_changed<T: Clone + PartialEq>(
    output: &UnboundedSender<T>,
    last_emitted: &mut Option<T>,
    value: T,
) -> bool {
    if last_emitted.as_ref() == Some(&value) {
        debug!("debounced value unchanged; skipping");
        return true;
    }
    *last_emitted = Some(value.clone());
    output.send(value).is_ok()
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
