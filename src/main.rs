mod app;
mod config;
mod event;
mod model;
mod state;
mod ui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::event::{
    self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::config::CONFIG;
use crate::model::catalog::Catalog;
use crate::model::theme::Theme;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(
    name = "book_connect",
    version,
    author = "haukuen",
    about = "A terminal-based book catalog browser with filtering and pagination"
)]
struct Cli {
    /// 目录 JSON 文件，缺省时使用内置示例目录
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// 启动主题（day/night），缺省时根据终端配色自动选择
    #[arg(short, long)]
    theme: Option<Theme>,

    /// 覆盖目录中的每页数量
    #[arg(short = 'n', long)]
    page_size: Option<usize>,
}

/// 终端守卫，确保程序退出时（包括 panic）正确恢复终端状态
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// 初始化日志，写入 `~/.book_connect/book_connect.log`
///
/// 终端界面占用了 stdout/stderr，日志只能写文件。日志文件无法打开时静默跳过。
fn init_logging() {
    let Some(mut path) = home::home_dir() else {
        return;
    };
    path.push(CONFIG.dir_name);
    if std::fs::create_dir_all(&path).is_err() {
        return;
    }
    path.push(CONFIG.log_filename);

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };

    if let Some(page_size) = cli.page_size {
        if page_size == 0 {
            bail!("--page-size must be at least 1");
        }
        catalog.books_per_page = page_size;
    }

    Ok(catalog)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let catalog = load_catalog(&cli).context("failed to load catalog")?;
    let signal = std::env::var(CONFIG.color_scheme_env).ok();

    let mut app = App::new(catalog);
    app.init(signal.as_deref(), cli.theme);

    run(&mut app).context("application error")?;

    log::info!("exiting");
    Ok(())
}

fn run(app: &mut App) -> Result<()> {
    // 使用 RAII 模式管理终端状态，确保 panic 时也能正确恢复
    let mut guard = TerminalGuard::new()?;

    let tick_rate = Duration::from_millis(CONFIG.tick_rate_ms);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        let size = guard.terminal.size()?;
        app.terminal_size = Rect::new(0, 0, size.width, size.height);

        guard.terminal.draw(|f| ui::render(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm_event::poll(timeout)? {
            match crossterm_event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        event::handle_key(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    event::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    // guard 在此处 drop，自动恢复终端状态
    Ok(())
}
