//! Live countdown board for `sprout watch`.
//!
//! Runs on a current-thread runtime: the countdown tasks, the key reader's
//! channel and the redraw loop all take turns on one thread. Keys are read
//! on tokio's blocking pool because `console` reads them synchronously.

use super::render::render_card_line;
use chrono::{DateTime, Utc};
use colored::Colorize;
use console::{Key, Term};
use sprout::api::SproutApi;
use sprout::countdown::{CountdownBoard, Tick};
use sprout::error::Result;
use sprout::index::{DisplayPlant, ListView};
use sprout::model::Plant;
use sprout::status::{watering_status, WateringStatus};
use sprout::store::StorageBackend;
use std::future;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchKey {
    CycleFilter,
    CycleSort,
    Quit,
}

fn map_key(key: Key) -> Option<WatchKey> {
    match key {
        Key::Char('f') | Key::Char('F') => Some(WatchKey::CycleFilter),
        Key::Char('s') | Key::Char('S') => Some(WatchKey::CycleSort),
        Key::Char('q') | Key::Char('Q') | Key::Escape => Some(WatchKey::Quit),
        _ => None,
    }
}

/// What the board currently shows: the view it was projected with and the
/// latest status of every row.
struct Screen {
    view: ListView,
    sunlight_options: Vec<String>,
    rows: Vec<(DisplayPlant, WateringStatus)>,
}

impl Screen {
    fn new(view: ListView, sunlight_options: Vec<String>) -> Self {
        Self {
            view,
            sunlight_options,
            rows: Vec::new(),
        }
    }

    fn project(&mut self, plants: &[Plant], now: DateTime<Utc>) -> Vec<DisplayPlant> {
        let listed = self.view.project(plants);
        self.rows = listed
            .iter()
            .map(|entry| (entry.clone(), watering_status(&entry.plant, now)))
            .collect();
        listed
    }

    fn apply(&mut self, key: WatchKey) {
        match key {
            WatchKey::CycleFilter => {
                self.view.filter = self.view.filter.next(&self.sunlight_options)
            }
            WatchKey::CycleSort => self.view.sort = self.view.sort.next(),
            WatchKey::Quit => {}
        }
    }

    fn update(&mut self, tick: Tick) {
        if let Some(row) = self.rows.get_mut(tick.slot) {
            if row.0.plant.id == tick.id {
                row.1 = tick.status;
            }
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Sunlight: {}   Sort: {}",
                self.view.filter.to_string().cyan(),
                self.view.sort.to_string().cyan()
            ),
            String::new(),
        ];
        if self.rows.is_empty() {
            lines.push("No plants found.".to_string());
        }
        lines.extend(
            self.rows
                .iter()
                .map(|(entry, status)| render_card_line(entry, status)),
        );
        lines.push(String::new());
        lines.push("f: sunlight filter   s: sort   q: quit".dimmed().to_string());
        lines
    }

    fn draw(&self, term: &Term) -> io::Result<()> {
        term.clear_screen()?;
        for line in self.lines() {
            term.write_line(&line)?;
        }
        Ok(())
    }
}

pub(super) fn run<B: StorageBackend>(
    api: &SproutApi<B>,
    view: ListView,
    limit: Option<Duration>,
) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(watch_loop(api, view, limit));
    // The key reader may still be blocked on the terminal
    rt.shutdown_background();
    result
}

async fn watch_loop<B: StorageBackend>(
    api: &SproutApi<B>,
    view: ListView,
    limit: Option<Duration>,
) -> Result<()> {
    let term = Term::stdout();
    let settings = api.settings();
    let clock = api.clock();
    let period = Duration::from_millis(settings.tick_ms);

    let (mut board, mut ticks) = CountdownBoard::new(clock.clone(), period);
    let mut keys = spawn_key_reader(&term);
    let mut screen = Screen::new(view, settings.sunlight_options.clone());

    let listed = screen.project(api.store().plants(), clock.now());
    board.render(&listed);
    if term.is_term() {
        term.hide_cursor()?;
    }
    screen.draw(&term)?;

    let deadline = async {
        match limit {
            Some(limit) => tokio::time::sleep(limit).await,
            None => future::pending().await,
        }
    };
    tokio::pin!(deadline);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            Some(tick) = ticks.recv() => {
                if board.is_current(&tick) {
                    screen.update(tick);
                }
                while let Ok(tick) = ticks.try_recv() {
                    if board.is_current(&tick) {
                        screen.update(tick);
                    }
                }
                screen.draw(&term)?;
            }
            key = next_key(&mut keys) => match key {
                Some(WatchKey::Quit) | None => break,
                Some(key) => {
                    screen.apply(key);
                    let listed = screen.project(api.store().plants(), clock.now());
                    board.render(&listed);
                    screen.draw(&term)?;
                }
            },
            _ = &mut ctrl_c => break,
            _ = &mut deadline => break,
        }
    }

    board.cancel_all();
    if term.is_term() {
        term.show_cursor()?;
    }
    Ok(())
}

fn spawn_key_reader(term: &Term) -> Option<mpsc::UnboundedReceiver<WatchKey>> {
    if !term.is_term() {
        return None;
    }
    let term = term.clone();
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        // Ctrl-C while reading surfaces as an error; dropping tx ends the board
        while let Ok(key) = term.read_key() {
            if let Some(key) = map_key(key) {
                if tx.send(key).is_err() {
                    break;
                }
            }
        }
    });
    Some(rx)
}

async fn next_key(keys: &mut Option<mpsc::UnboundedReceiver<WatchKey>>) -> Option<WatchKey> {
    match keys {
        Some(rx) => rx.recv().await,
        None => future::pending().await,
    }
}
