// Terminal rendering: header bar, autoplaying carousel, search box and the
// quote table, drawn fresh from `App` on every pass.

pub mod format;

use std::io::{self, Stdout};

use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::{Frame, Terminal};

use crate::app::App;

const ACCENT: Color = Color::Blue;
const GAIN: Color = Color::Green;
const LOSS: Color = Color::Red;
const DIM: Color = Color::DarkGray;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let [header, carousel, search, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    draw_carousel(frame, app, carousel);
    draw_search(frame, app, search);
    if app.loading {
        draw_loading(frame, app, body);
    } else {
        draw_table(frame, app, body);
    }
    draw_footer(frame, footer);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = Paragraph::new(Line::from(Span::styled(
        " CRYPTOFOLIO",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, inner);

    // The currency selector is cosmetic and the watch-list button is a
    // presentational placeholder; neither changes any behavior.
    let controls = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ▾", app.currency.as_str())),
        Span::raw("  "),
        Span::styled(
            "[ WATCH LIST ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(controls, inner);
}

fn draw_carousel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slides = app.carousel_quotes();
    if slides.is_empty() {
        return; // zero slides
    }

    let current = app.slide.min(slides.len() - 1);
    let coin = &slides[current];
    let trend = if coin.is_gaining() { GAIN } else { LOSS };
    let arrow = if coin.is_gaining() { "▲" } else { "▼" };

    let dots: String = (0..slides.len())
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");

    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("◉ {}", coin.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            coin.symbol.to_uppercase(),
            Style::default().fg(DIM),
        )),
        Line::from(Span::styled(
            format::price(coin.current_price),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", arrow, format::change_pct(coin.price_change_percentage_24h)),
            Style::default().fg(trend),
        )),
        Line::default(),
        Line::from(Span::styled(dots, Style::default().fg(DIM))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(card, inner);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = if app.query.is_empty() {
        Line::from(Span::styled(
            " Search For a Crypto Currency..",
            Style::default().fg(DIM),
        ))
    } else {
        Line::from(vec![
            Span::raw(format!(" {}", app.query)),
            Span::styled("█", Style::default().fg(ACCENT)),
        ])
    };
    frame.render_widget(Paragraph::new(content), inner);
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let throbber = Paragraph::new(Line::from(Span::styled(
        format!("{} fetching latest quotes", spinner),
        Style::default().fg(ACCENT),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(throbber, middle);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Coin", "Price", "24h Change", "Market Cap"])
        .style(Style::default().fg(DIM))
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .filtered_quotes()
        .into_iter()
        .map(|coin| {
            let trend = if coin.is_gaining() { GAIN } else { LOSS };
            let name_cell = Cell::from(Text::from(vec![
                Line::from(vec![
                    Span::styled("◉ ", Style::default().fg(ACCENT)),
                    Span::raw(coin.name.clone()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", coin.symbol.to_uppercase()),
                    Style::default().fg(DIM),
                )),
            ]));
            Row::new(vec![
                name_cell,
                Cell::from(format::price(coin.current_price)),
                Cell::from(Span::styled(
                    format::change_pct(coin.price_change_percentage_24h),
                    Style::default().fg(trend),
                )),
                Cell::from(format::market_cap(coin.market_cap)),
            ])
            .height(2)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " esc quit · ctrl-r refresh · ctrl-e currency · ←/→ slides · type to search",
        Style::default().fg(DIM),
    )));
    frame.render_widget(hints, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::App;
    use crate::market_data::types::CoinQuote;
    use crate::market_data::MarketEvent;

    fn quote(name: &str, symbol: &str, price: f64, change: f64) -> CoinQuote {
        CoinQuote {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: String::new(),
            current_price: price,
            price_change_percentage_24h: change,
            market_cap: price * 1000.0,
        }
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol().to_string()).collect()
    }

    #[test]
    fn renders_brand_and_quotes() {
        let mut app = App::new();
        app.apply(MarketEvent::Snapshot {
            quotes: vec![
                quote("Bitcoin", "btc", 43250.12, 2.35),
                quote("Ethereum", "eth", 2280.57, -1.02),
            ],
        });

        let screen = render(&app);
        assert!(screen.contains("CRYPTOFOLIO"));
        assert!(screen.contains("Bitcoin"));
        assert!(screen.contains("$43,250.12"));
        assert!(screen.contains("ETH"));
    }

    #[test]
    fn loading_replaces_the_table_with_a_throbber() {
        let mut app = App::new();
        app.apply(MarketEvent::Snapshot { quotes: vec![quote("Bitcoin", "btc", 1.0, 0.0)] });
        app.apply(MarketEvent::FetchStarted);

        let screen = render(&app);
        assert!(screen.contains("fetching latest quotes"));
        // the carousel keeps showing while the table is hidden
        assert!(screen.contains("BTC"));
    }

    #[test]
    fn empty_deck_renders_no_slides_and_no_rows() {
        let mut app = App::new();
        app.apply(MarketEvent::Snapshot { quotes: vec![] });

        let screen = render(&app);
        assert!(!screen.contains("◉"));
        assert!(!screen.contains("●"));
    }

    #[test]
    fn table_shows_only_filtered_rows() {
        let mut app = App::new();
        app.apply(MarketEvent::Snapshot {
            quotes: vec![
                quote("Bitcoin", "btc", 43250.12, 2.35),
                quote("Ethereum", "eth", 2280.57, -1.02),
            ],
        });
        app.query = "eth".to_string();

        let screen = render(&app);
        // market caps only appear in table rows, never in the carousel
        assert!(screen.contains("$2,280,570"));
        assert!(!screen.contains("$43,250,120"));
    }
}
