//! Timing tests for the animation ticker on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use folio_view::animation::DEFAULT_INTERVAL;
use folio_view::{ErrorAccumulation, Ticker};
use tokio::sync::Mutex;

fn state() -> Arc<Mutex<ErrorAccumulation>> {
    Arc::new(Mutex::new(ErrorAccumulation::default()))
}

#[tokio::test(start_paused = true)]
async fn test_advances_once_per_interval() {
    let anim = state();
    let _ticker = Ticker::spawn(Arc::clone(&anim), DEFAULT_INTERVAL);

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert_eq!(anim.lock().await.step(), 0);

    tokio::time::sleep(Duration::from_millis(3200)).await;
    assert_eq!(anim.lock().await.step(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_wraps_after_last_step() {
    let anim = state();
    let _ticker = Ticker::spawn(Arc::clone(&anim), Duration::from_millis(100));

    tokio::time::sleep(Duration::from_millis(650)).await;
    assert_eq!(anim.lock().await.step(), 0);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(anim.lock().await.step(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_paused_state_holds() {
    let anim = state();
    let _ticker = Ticker::spawn(Arc::clone(&anim), DEFAULT_INTERVAL);
    anim.lock().await.jump_to(4);

    tokio::time::sleep(DEFAULT_INTERVAL * 4 + Duration::from_millis(100)).await;
    assert_eq!(anim.lock().await.step(), 4);

    anim.lock().await.toggle_playing();
    tokio::time::sleep(DEFAULT_INTERVAL).await;
    assert_eq!(anim.lock().await.step(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_ticking() {
    let anim = state();
    let ticker = Ticker::spawn(Arc::clone(&anim), DEFAULT_INTERVAL);
    tokio::time::sleep(DEFAULT_INTERVAL + Duration::from_millis(10)).await;
    assert_eq!(anim.lock().await.step(), 1);

    drop(ticker);
    tokio::time::sleep(DEFAULT_INTERVAL * 5).await;
    assert_eq!(anim.lock().await.step(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_aborts_task() {
    let ticker = Ticker::spawn(state(), DEFAULT_INTERVAL);
    assert!(ticker.is_running());
    ticker.stop();
}
