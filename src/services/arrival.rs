use std::sync::Arc;
use std::time::Duration;

use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::display::DisplayState;

pub const ARRIVAL_TIMES: [&str; 5] = [
    "30 minutes",
    "45 minutes",
    "1 hour",
    "1 hour 15 minutes",
    "1.5 hours",
];

pub fn pick_arrival_time() -> &'static str {
    ARRIVAL_TIMES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(ARRIVAL_TIMES[0])
}

/// Rotates the estimated arrival time shown on the page.
pub struct ArrivalTimeTicker {
    display: Arc<DisplayState>,
    interval: Duration,
}

impl ArrivalTimeTicker {
    pub fn new(display: Arc<DisplayState>, interval: Duration) -> Self {
        Self { display, interval }
    }

    /// Sets an initial estimate, then picks a new one every interval forever.
    pub async fn start(self) {
        info!("Starting arrival time rotation (interval: {:?})", self.interval);
        self.tick();

        loop {
            tokio::time::sleep(self.interval).await;
            self.tick();
        }
    }

    fn tick(&self) {
        let arrival_time = pick_arrival_time();
        debug!(arrival_time, "arrival time updated");
        self.display.set_arrival_time(arrival_time);
    }
}
