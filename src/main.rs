//! Sesam TUI - terminal remote door controller
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP dispatch
//! - Echo server - local stand-in target for development

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use sesam_tui::app::AppActor;
use sesam_tui::constants::ECHO_SERVER_PORT;
use sesam_tui::messages::ui_events::{key_to_ui_event, InputMode, Screen, SettingsField};
use sesam_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use sesam_tui::network::NetworkActor;
use sesam_tui::{server, ui};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "sesam.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Spawn the local echo server for the life of the process
    let echo_addr = SocketAddr::from(([127, 0, 0, 1], ECHO_SERVER_PORT));
    tokio::spawn(async move {
        if let Err(e) = server::run_echo_server(echo_addr).await {
            tracing::warn!(error = %e, "echo server stopped");
        }
    });

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.screen, current_state.input_mode)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    // Main layout with screen tab bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tab_bar(f, state, main_chunks[0]);

    match state.screen {
        Screen::Settings => draw_settings_screen(f, state, main_chunks[1]),
        Screen::Control => draw_control_screen(f, state, main_chunks[1]),
        Screen::Logs => draw_logs_screen(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);
}

fn draw_tab_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let titles = [" 1:Settings ", " 2:Control ", " 3:Logs "];
    let selected = match state.screen {
        Screen::Settings => 0,
        Screen::Control => 1,
        Screen::Logs => 2,
    };
    f.render_widget(ui::render_tabs(&titles, selected), area);
}

fn draw_settings_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Open URL
            Constraint::Length(3), // Close URL
            Constraint::Min(0),
        ])
        .split(area);

    let editing = state.input_mode == InputMode::Editing;

    let open_focused = state.active_field == SettingsField::OpenUrl;
    f.render_widget(
        ui::render_input(
            state.endpoints.open_url.as_str(),
            " Open URL ",
            open_focused,
            editing,
        ),
        chunks[0],
    );

    let close_focused = state.active_field == SettingsField::CloseUrl;
    f.render_widget(
        ui::render_input(
            state.endpoints.close_url.as_str(),
            " Close URL ",
            close_focused,
            editing,
        ),
        chunks[1],
    );

    // Cursor
    if editing {
        let (field_area, text) = if open_focused {
            (chunks[0], state.endpoints.open_url.as_str())
        } else {
            (chunks[1], state.endpoints.close_url.as_str())
        };
        let max_x = field_area.x + field_area.width.saturating_sub(2);
        let cursor_col = ui::cursor_column(text, state.cursor_position);
        let cursor_x = (field_area.x + cursor_col + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
    }
}

fn draw_control_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.is_loading {
        let loading = Paragraph::new("\n\n  Working...")
            .block(Block::default().borders(Borders::ALL).title(" Door "))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(loading, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let open_button = Paragraph::new("\n  [o] Open door")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    f.render_widget(open_button, chunks[0]);

    let close_button = Paragraph::new("\n  [c] Close door")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    f.render_widget(close_button, chunks[1]);
}

fn draw_logs_screen(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Logs (↑/↓ scroll, d:clear) ");

    let mut lines = ui::log_lines(&state.logs);
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No log entries yet. Dispatch a request from the control screen.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let logs = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.log_scroll, 0));
    f.render_widget(logs, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Request in flight... "
    } else if state.input_mode == InputMode::Editing {
        " ESC/Enter:stop editing | Tab:next field | arrows:move "
    } else {
        match state.screen {
            Screen::Settings => " 1/2/3:screen | Tab:field | e:edit | q:quit ",
            Screen::Control => " 1/2/3:screen | o:open | c:close | q:quit ",
            Screen::Logs => " 1/2/3:screen | ↑/↓:scroll | d:clear | q:quit ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}
