use std::sync::Arc;
use std::time::Duration;

use hotel_quote::display::DisplayState;
use hotel_quote::services::ArrivalTimeTicker;
use hotel_quote::services::arrival::{ARRIVAL_TIMES, pick_arrival_time};

#[test]
fn picks_from_the_fixed_list() {
    for _ in 0..50 {
        assert!(ARRIVAL_TIMES.contains(&pick_arrival_time()));
    }
}

#[tokio::test(start_paused = true)]
async fn ticker_sets_an_initial_estimate_and_keeps_running() {
    let display = Arc::new(DisplayState::new());
    let ticker = ArrivalTimeTicker::new(display.clone(), Duration::from_secs(30));

    let task = tokio::spawn(ticker.start());
    tokio::time::sleep(Duration::from_millis(1)).await;

    let first = display.snapshot().arrival_time.expect("initial estimate");
    assert!(ARRIVAL_TIMES.contains(&first.as_str()));

    tokio::time::sleep(Duration::from_secs(95)).await;
    let later = display.snapshot().arrival_time.expect("rotated estimate");
    assert!(ARRIVAL_TIMES.contains(&later.as_str()));
    assert!(!task.is_finished());

    task.abort();
}
