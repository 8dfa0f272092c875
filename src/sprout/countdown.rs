//! # Countdown Board
//!
//! Every displayed card gets its own recurring task that recomputes the
//! card's [`WateringStatus`] once per period and reports it as a [`Tick`].
//! The board owns those tasks. Rendering a new set of cards cancels every
//! task of the previous render first; dropping the board cancels the rest.
//!
//! Tasks only read the clock and a snapshot of the plant they were given;
//! they never touch the store.
//!
//! Ticks carry the generation of the render that scheduled them. A tick
//! already queued when a re-render happens belongs to an older generation,
//! and [`CountdownBoard::is_current`] lets the consumer drop it.

use crate::clock::Clock;
use crate::index::DisplayPlant;
use crate::model::{Plant, PlantId};
use crate::status::{watering_status, WateringStatus};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub slot: usize,
    pub id: PlantId,
    pub status: WateringStatus,
}

pub struct CountdownBoard {
    clock: Arc<dyn Clock>,
    period: Duration,
    ticks: mpsc::UnboundedSender<Tick>,
    schedules: Vec<JoinHandle<()>>,
    generation: u64,
}

impl CountdownBoard {
    /// Creates an empty board and the receiver its ticks arrive on.
    pub fn new(clock: Arc<dyn Clock>, period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let board = Self {
            clock,
            period,
            ticks,
            schedules: Vec::new(),
            generation: 0,
        };
        (board, rx)
    }

    /// Replaces the scheduled countdowns with one per entry in `listed`.
    /// Must be called from inside a tokio runtime.
    pub fn render(&mut self, listed: &[DisplayPlant]) {
        self.cancel_all();
        self.generation += 1;

        for (slot, entry) in listed.iter().enumerate() {
            let handle = tokio::spawn(run_schedule(
                self.generation,
                slot,
                entry.plant.clone(),
                Arc::clone(&self.clock),
                self.period,
                self.ticks.clone(),
            ));
            self.schedules.push(handle);
        }

        debug!(
            "countdown generation {} scheduled {} cards",
            self.generation,
            self.schedules.len()
        );
    }

    pub fn cancel_all(&mut self) {
        if self.schedules.is_empty() {
            return;
        }
        debug!(
            "cancelling {} countdowns of generation {}",
            self.schedules.len(),
            self.generation
        );
        for handle in self.schedules.drain(..) {
            handle.abort();
        }
    }

    /// Number of scheduled countdowns still running.
    pub fn active(&self) -> usize {
        self.schedules.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, tick: &Tick) -> bool {
        tick.generation == self.generation
    }
}

impl Drop for CountdownBoard {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

async fn run_schedule(
    generation: u64,
    slot: usize,
    plant: Plant,
    clock: Arc<dyn Clock>,
    period: Duration,
    ticks: mpsc::UnboundedSender<Tick>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // The first tick completes immediately, so a card shows its status
        // as soon as it is scheduled
        interval.tick().await;
        let tick = Tick {
            generation,
            slot,
            id: plant.id,
            status: watering_status(&plant, clock.now()),
        };
        if ticks.send(tick).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::index::{project, SortOrder, SunlightFilter};
    use crate::model::{Plant, PlantDraft};
    use crate::status::Remaining;
    use chrono::{TimeZone, Utc};

    fn plants(count: usize) -> Vec<Plant> {
        (0..count)
            .map(|i| {
                let mut plant = Plant::new(PlantDraft {
                    name: format!("Plant {}", i + 1),
                    species: String::new(),
                    watering_frequency: 1,
                    sunlight: "Full Sun".into(),
                    notes: String::new(),
                    image: None,
                });
                plant.last_watered = Some(Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
                plant
            })
            .collect()
    }

    fn listed(count: usize) -> Vec<DisplayPlant> {
        project(&plants(count), &SunlightFilter::All, SortOrder::None)
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap(),
        ))
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Tick>) -> Vec<Tick> {
        let mut ticks = Vec::new();
        while let Ok(tick) = rx.try_recv() {
            ticks.push(tick);
        }
        ticks
    }

    #[tokio::test(start_paused = true)]
    async fn each_card_reports_immediately() {
        let (mut board, mut rx) = CountdownBoard::new(clock(), Duration::from_secs(1));
        board.render(&listed(2));
        assert_eq!(board.active(), 2);

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        let mut slots = vec![first.slot, second.slot];
        slots.sort();
        assert_eq!(slots, vec![0, 1]);
        assert!(board.is_current(&first));
        assert_eq!(
            first.status,
            WateringStatus::CountingDown {
                next_water_at: Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap(),
                remaining: Remaining::from_seconds(12 * 3600),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rerender_replaces_previous_schedules() {
        let (mut board, mut rx) = CountdownBoard::new(clock(), Duration::from_secs(1));
        board.render(&listed(3));
        board.render(&listed(1));
        assert_eq!(board.active(), 1);
        assert_eq!(board.generation(), 2);

        tokio::time::sleep(Duration::from_millis(3500)).await;

        let current: Vec<_> = drain(&mut rx)
            .into_iter()
            .filter(|t| board.is_current(t))
            .collect();
        assert_eq!(current.len(), 4);
        assert!(current.iter().all(|t| t.slot == 0));
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_follows_the_clock() {
        let clock = clock();
        let (mut board, mut rx) =
            CountdownBoard::new(clock.clone() as Arc<dyn Clock>, Duration::from_secs(1));
        board.render(&listed(1));

        let first = rx.recv().await.unwrap();
        clock.advance(chrono::Duration::seconds(1));
        let second = rx.recv().await.unwrap();

        let left = |t: &Tick| match t.status {
            WateringStatus::CountingDown { remaining, .. } => remaining.total_seconds(),
            _ => panic!("expected countdown"),
        };
        assert_eq!(left(&first) - left(&second), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_stops_ticking() {
        let (mut board, mut rx) = CountdownBoard::new(clock(), Duration::from_secs(1));
        board.render(&listed(2));
        rx.recv().await.unwrap();

        board.cancel_all();
        assert_eq!(board.active(), 0);
        drain(&mut rx);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_board_closes_the_channel() {
        let (mut board, mut rx) = CountdownBoard::new(clock(), Duration::from_secs(1));
        board.render(&listed(1));
        drop(board);

        tokio::time::sleep(Duration::from_secs(2)).await;
        drain(&mut rx);
        assert!(rx.recv().await.is_none());
    }
}
