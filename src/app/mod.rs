// Dashboard state and event loop. One task owns all state; fetch tasks only
// talk to it through the market-event channel, so no mutation ever happens
// off this task.

pub mod filter;

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Duration};
use tracing::warn;

use crate::market_data::types::CoinQuote;
use crate::market_data::{poller, MarketEvent, MarketSource};
use crate::ui;

/// The carousel rotates over at most the first four quotes, always unfiltered.
pub const CAROUSEL_SLOTS: usize = 4;

const AUTOPLAY_PERIOD: Duration = Duration::from_millis(2500);
const SPINNER_PERIOD: Duration = Duration::from_millis(120);

/// Display-only quote-currency label. Cycling it never touches the fetch
/// parameters; prices keep coming back in the configured currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyLabel {
    Usd,
    Inr,
}

impl CurrencyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyLabel::Usd => "USD",
            CurrencyLabel::Inr => "INR",
        }
    }

    fn next(self) -> Self {
        match self {
            CurrencyLabel::Usd => CurrencyLabel::Inr,
            CurrencyLabel::Inr => CurrencyLabel::Usd,
        }
    }
}

pub struct App {
    /// Latest successful snapshot, upstream order. Replaced wholesale, never
    /// merged or re-sorted.
    pub quotes: Vec<CoinQuote>,
    pub loading: bool,
    pub query: String,
    pub slide: usize,
    pub currency: CurrencyLabel,
    pub spinner_frame: usize,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            loading: true,
            query: String::new(),
            slide: 0,
            currency: CurrencyLabel::Usd,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// The only place quote state changes: fetch-start, fetch-success,
    /// fetch-failure.
    pub fn apply(&mut self, event: MarketEvent) {
        match event {
            MarketEvent::FetchStarted => self.loading = true,
            MarketEvent::Snapshot { quotes } => {
                self.quotes = quotes;
                self.loading = false;
                if self.slide >= self.carousel_len().max(1) {
                    self.slide = 0;
                }
            }
            MarketEvent::FetchFailed => self.loading = false,
        }
    }

    pub fn filtered_quotes(&self) -> Vec<&CoinQuote> {
        filter::filter_quotes(&self.quotes, &self.query)
    }

    /// First four quotes regardless of the query.
    pub fn carousel_quotes(&self) -> &[CoinQuote] {
        &self.quotes[..self.quotes.len().min(CAROUSEL_SLOTS)]
    }

    pub fn carousel_len(&self) -> usize {
        self.carousel_quotes().len()
    }

    pub fn next_slide(&mut self) {
        let len = self.carousel_len();
        if len > 0 {
            self.slide = (self.slide + 1) % len;
        }
    }

    pub fn prev_slide(&mut self) {
        let len = self.carousel_len();
        if len > 0 {
            self.slide = (self.slide + len - 1) % len;
        }
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
    }

    pub fn cycle_currency(&mut self) {
        self.currency = self.currency.next();
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Run the dashboard until the user quits. Spawns the poller, then selects
/// over terminal input, market events, the carousel autoplay tick and the
/// spinner tick; every arm mutates `App` right here.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    source: Arc<dyn MarketSource>,
    refresh_period: Duration,
) -> anyhow::Result<()> {
    let (event_tx, mut market_events) = mpsc::channel(32);
    let (refresh_tx, refresh_rx) = mpsc::channel(4);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let poller_task = tokio::spawn(poller::run(
        source,
        event_tx,
        refresh_rx,
        shutdown_rx,
        refresh_period,
    ));

    let mut app = App::new();
    let mut input = EventStream::new();
    let mut autoplay = interval(AUTOPLAY_PERIOD);
    let mut spinner = interval(SPINNER_PERIOD);

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key, &refresh_tx);
                }
                Some(Ok(_)) => {} // resize and friends: redraw on next pass
                Some(Err(e)) => warn!(error = %e, "terminal event error"),
                None => app.quit(),
            },
            Some(event) = market_events.recv() => app.apply(event),
            _ = autoplay.tick() => app.next_slide(),
            _ = spinner.tick() => app.tick_spinner(),
        }
    }

    // Teardown cancels only the repeating timer; an in-flight fetch keeps
    // running detached and its result is simply never read.
    let _ = shutdown_tx.send(true);
    let _ = poller_task.await;
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, refresh: &mpsc::Sender<()>) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => app.quit(),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
        // Manual refresh deliberately races the timer: no dedup, last
        // completed snapshot wins.
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            let _ = refresh.try_send(());
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => app.cycle_currency(),
        (KeyCode::Left, _) => app.prev_slide(),
        (KeyCode::Right, _) => app.next_slide(),
        (KeyCode::Backspace, _) => app.pop_query(),
        (KeyCode::Char(c), m) if m.is_empty() || m == KeyModifiers::SHIFT => {
            app.push_query(c);
        }
        _ => {}
    }
}
