mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use logic::WeatherSyncService;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{AlertsScreen, DashboardScreen, RecommendationsScreen};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // RUST_LOG wins over -v flags
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check) => run_check(load_config(&cli)).await,
        Some(Commands::Report { json, ref rule }) => {
            run_report(load_config(&cli), json, rule.as_deref()).await
        }
        None => {
            let config = if Config::exists(cli.config.as_ref()) {
                load_config(&cli)
            } else {
                Config::setup_interactive()?.0
            };
            run_tui(config).await
        }
    }
}

fn load_config(cli: &Cli) -> Config {
    match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `farmcast init` or copy config/config.yaml.example to config/config.yaml");
            std::process::exit(1);
        }
    }
}

async fn run_check(config: Config) -> Result<()> {
    println!("Location: {}", config.location.name);
    println!(
        "Rules loaded:             {} recommendation, {} alert",
        logic::RulesEngine::new().list_rules().len(),
        logic::AlertSynthesizer::new().list_rules().len()
    );

    let mut weather_sync = WeatherSyncService::new(config);
    let status = weather_sync.check_connections().await;

    let ok = |b: bool| if b { "OK" } else { "FAILED" };
    println!(
        "OpenWeatherMap configured: {}",
        if status.configured { "yes" } else { "no (baseline data only)" }
    );
    println!("Location resolved:        {}", ok(status.location_resolved));
    if status.configured {
        println!("OpenWeatherMap reachable: {}", ok(status.openweathermap));
    }

    if !status.all_connected() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_report(config: Config, json: bool, rule: Option<&str>) -> Result<()> {
    let mut weather_sync = WeatherSyncService::new(config);
    let report = weather_sync.refresh().await?;

    if let Some(rule_id) = rule {
        let recommendation = weather_sync.explain_rule(rule_id).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        } else {
            match recommendation {
                Some(rec) => {
                    println!("{} fired [{}]: {}", rule_id, rec.urgency, rec.title);
                    println!("  {}", rec.weather_reason);
                }
                None => println!("{} did not fire for {}", rule_id, report.location),
            }
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", ui::report_to_text(&report));
    }
    Ok(())
}

async fn run_tui(config: Config) -> Result<()> {
    let mut app = App::new();
    let mut weather_sync = WeatherSyncService::new(config);

    let status = weather_sync.check_connections().await;
    let mut status_parts = Vec::new();
    if !status.configured {
        status_parts.push("OpenWeatherMap: not configured");
    } else if status.openweathermap {
        status_parts.push("OpenWeatherMap: OK");
    } else {
        status_parts.push("OpenWeatherMap: OFFLINE");
    }
    if !status.location_resolved {
        status_parts.push("Location: unresolved");
    }

    match weather_sync.refresh().await {
        Ok(report) => app.update_report(report),
        Err(e) => {
            tracing::warn!("Initial refresh failed: {}", e);
            status_parts.push("Initial refresh failed");
        }
    }
    app.set_status(&status_parts.join(" | "));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut weather_sync).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    weather_sync: &mut WeatherSyncService,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Dashboard => {
                    let screen = DashboardScreen::new(app.report.as_ref())
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Alerts => {
                    let (alerts, source) = match app.report {
                        Some(ref r) => (r.alerts.as_slice(), Some(r.alert_source)),
                        None => (&[][..], None),
                    };
                    let screen = AlertsScreen::new(alerts, source)
                        .with_selection(app.alerts_state.selected_index);
                    f.render_widget(screen, area);
                }
                Screen::Recommendations => {
                    let screen = RecommendationsScreen::new(&app.sorted_recommendations)
                        .with_selection(app.recommendations_state.selected_index);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => app.switch_screen(Screen::Dashboard),
                    KeyCode::Char('r') => app.request_refresh(),
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        }
                    }
                    code => handle_screen_input(app, code),
                }
            }
        }

        if app.needs_refresh {
            app.needs_refresh = false;
            match weather_sync.refresh().await {
                Ok(report) => {
                    let message = if report.degraded {
                        "Refreshed with baseline data (weather OFFLINE)"
                    } else {
                        "Data refreshed"
                    };
                    app.update_report(report);
                    app.set_status(message);
                }
                Err(e) => {
                    let message = match weather_sync.get_current_report().await {
                        Some(last) => format!(
                            "Refresh failed: {} (showing report from {})",
                            e,
                            last.generated_at.format("%H:%M UTC")
                        ),
                        None => format!("Refresh failed: {}", e),
                    };
                    app.set_status(&message);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => {}
        Screen::Alerts => {
            let count = app.alert_count();
            match code {
                KeyCode::Up => app.alerts_state.prev(),
                KeyCode::Down => app.alerts_state.next(count),
                _ => {}
            }
        }
        Screen::Recommendations => {
            let count = app.sorted_recommendations.len();
            match code {
                KeyCode::Up => app.recommendations_state.prev(),
                KeyCode::Down => app.recommendations_state.next(count),
                _ => {}
            }
        }
    }
}
