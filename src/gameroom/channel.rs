use tokio::sync::mpsc::*;

/// The room's input queue.
/// Keeps a strong sender only until [`Channel::release`]; after that the queue
/// closes once every actor, front-end, and pending timer has dropped its handle.
#[derive(Debug)]
pub struct Channel<T> {
    tx: Option<UnboundedSender<T>>,
    weak: WeakUnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            weak: tx.downgrade(),
            tx: Some(tx),
            rx,
        }
    }
}

impl<T> Channel<T> {
    /// A fresh producer handle for actors and front-ends.
    /// Once released with no producers left, the handle is disconnected and every send fails.
    pub fn sender(&self) -> UnboundedSender<T> {
        self.tx
            .clone()
            .or_else(|| self.weak.upgrade())
            .unwrap_or_else(|| unbounded_channel().0)
    }

    /// Stop keeping the queue open on our own.
    pub fn release(&mut self) {
        self.tx = None;
    }

    /// Next item in arrival order. `None` once released and every producer is gone.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> Channel<T>
where
    T: std::fmt::Debug + Send + 'static,
{
    /// Enqueue `item` once `delay` has passed. The timer is detached and never cancelled,
    /// and holds the queue open until it fires.
    pub fn post_after(&self, item: T, delay: std::time::Duration) {
        let Some(tx) = self.tx.clone().or_else(|| self.weak.upgrade()) else {
            log::debug!("[channel] closed before scheduling {:?}", item);
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tx.send(item) {
                log::debug!("[channel] closed before delayed {:?}", e.0);
            }
        });
    }
}
