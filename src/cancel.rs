use tokio::sync::broadcast;

/// Round-scoped cancellation. A single send fans out to every worker that
/// subscribed before it was spawned.
pub type CancelSender = broadcast::Sender<()>;
pub type CancelReceiver = broadcast::Receiver<()>;

/// The signal is raised at most once per round.
const CANCEL_CHANNEL_CAPACITY: usize = 1;

#[must_use]
pub fn cancel_channel() -> (CancelSender, CancelReceiver) {
    broadcast::channel::<()>(CANCEL_CHANNEL_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::time::Duration;

    const RECV_TIMEOUT: Duration = Duration::from_secs(1);

    fn run_async_test<F>(future: F) -> Result<(), String>
    where
        F: Future<Output = Result<(), String>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| format!("Failed to build runtime: {}", err))?;
        runtime.block_on(future)
    }

    #[test]
    fn cancel_reaches_every_subscriber() -> Result<(), String> {
        run_async_test(async {
            let (cancel_tx, _) = cancel_channel();
            let mut first = cancel_tx.subscribe();
            let mut second = cancel_tx.subscribe();

            cancel_tx
                .send(())
                .map_err(|err| format!("Failed to send cancel: {}", err))?;

            for rx in [&mut first, &mut second] {
                tokio::time::timeout(RECV_TIMEOUT, rx.recv())
                    .await
                    .map_err(|err| format!("Timed out waiting for cancel: {}", err))?
                    .map_err(|err| format!("Cancel receive failed: {}", err))?;
            }
            Ok(())
        })
    }

    #[test]
    fn dropped_sender_wakes_receivers() -> Result<(), String> {
        run_async_test(async {
            let (cancel_tx, mut cancel_rx) = cancel_channel();
            drop(cancel_tx);

            let received = tokio::time::timeout(RECV_TIMEOUT, cancel_rx.recv())
                .await
                .map_err(|err| format!("Timed out waiting for close: {}", err))?;
            if received.is_ok() {
                return Err("Expected closed channel error".to_owned());
            }
            Ok(())
        })
    }
}
