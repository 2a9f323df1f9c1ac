//! Countdown tick tasks.
//!
//! Each running countdown is a tokio task that sends
//! [`AppEvent::CountdownTick`] into the main event loop once per interval and
//! exits after the final tick. The task handle is owned here, keyed by item,
//! so there is never more than one task per item and cancelling is an abort.

use crate::app::event::AppEvent;
use crate::countdown::{CountdownSettings, Ticket};
use crate::store::ItemId;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

pub struct CountdownTimers {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    settings: CountdownSettings,
    handles: HashMap<ItemId, JoinHandle<()>>,
}

impl CountdownTimers {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, settings: CountdownSettings) -> Self {
        Self {
            event_tx,
            settings,
            handles: HashMap::new(),
        }
    }

    /// Start ticking for `item_id`, replacing any countdown already running
    /// for it.
    pub fn start(&mut self, item_id: ItemId, ticket: Ticket) {
        self.cancel(item_id);
        debug!(item_id, ticket, iterations = self.settings.iterations, "countdown started");
        let handle = tokio::spawn(run_countdown(
            item_id,
            ticket,
            self.settings,
            self.event_tx.clone(),
        ));
        self.handles.insert(item_id, handle);
    }

    /// Abort the countdown for `item_id`. Returns `false` if none was held.
    pub fn cancel(&mut self, item_id: ItemId) -> bool {
        match self.handles.remove(&item_id) {
            Some(handle) => {
                handle.abort();
                debug!(item_id, "countdown stopped");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.handles.drain() {
            handle.abort();
        }
    }

    pub fn running_count(&self) -> usize {
        self.handles.values().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for CountdownTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

async fn run_countdown(
    item_id: ItemId,
    ticket: Ticket,
    settings: CountdownSettings,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut interval = time::interval_at(Instant::now() + settings.interval, settings.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for n in 1..=settings.iterations {
        interval.tick().await;
        trace!(item_id, ticket, n, "countdown tick");
        if event_tx.send(AppEvent::CountdownTick { item_id, ticket }).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    fn settings(iterations: u64) -> CountdownSettings {
        CountdownSettings::new(
            Duration::from_millis(10 * iterations),
            Duration::from_millis(10),
        )
    }

    async fn drain_ticks(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<(ItemId, Ticket)> {
        let mut ticks = Vec::new();
        while let Ok(Some(event)) = timeout(Duration::from_millis(100), rx.recv()).await {
            match event {
                AppEvent::CountdownTick { item_id, ticket } => ticks.push((item_id, ticket)),
                other => panic!("unexpected event {:?}", other),
            }
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_completion_then_stops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = CountdownTimers::new(tx, settings(5));

        timers.start(7, 1);
        assert_eq!(timers.running_count(), 1);

        let ticks = drain_ticks(&mut rx).await;
        assert_eq!(ticks, vec![(7, 1); 5]);
        assert_eq!(timers.running_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = CountdownTimers::new(tx, settings(50));

        timers.start(3, 1);
        for _ in 0..2 {
            assert!(matches!(
                rx.recv().await,
                Some(AppEvent::CountdownTick { item_id: 3, ticket: 1 })
            ));
        }
        assert!(timers.cancel(3));
        assert!(!timers.cancel(3));

        assert!(drain_ticks(&mut rx).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_run() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = CountdownTimers::new(tx, settings(3));

        timers.start(1, 1);
        timers.start(1, 2);
        assert_eq!(timers.running_count(), 1);

        let ticks = drain_ticks(&mut rx).await;
        assert_eq!(ticks, vec![(1, 2); 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_items() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = CountdownTimers::new(tx, settings(2));

        timers.start(1, 1);
        timers.start(2, 1);
        timers.cancel_all();
        assert_eq!(timers.running_count(), 0);
        assert!(drain_ticks(&mut rx).await.is_empty());
    }
}
