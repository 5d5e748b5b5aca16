//! Tilde entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{HELP_MESSAGE, handle_key, io_ops};
use core_config::{Effective, load_from};
use core_input::{KeyDecoder, StdinSource};
use core_model::{EditorModel, Layout};
use core_render::RenderEngine;
use core_state::{EditorState, QuitGuard};
use core_terminal::{CrosstermBackend, TerminalGuard, window_size};
use core_text::Document;
use std::fmt;
use std::io::{Stdout, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use std::time::Instant;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "tilde.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tilde", version, about = "A small terminal text editor")]
struct Args {
    /// File to edit. If omitted the editor starts with an empty, unnamed document.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `tilde.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    model: EditorModel,
    settings: Effective,
    terminal_guard: TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, args: &Args) -> Result<RuntimeContext<'a>> {
        self.configure_logging()?;
        Self::install_panic_hook();

        info!(target: "runtime", "startup");
        let config = load_from(args.config.clone())?;
        let settings = config.effective();
        let state = Self::load_editor_state(args, &settings)?;

        let guard = self.backend.enter_guard()?;
        let (cols, rows) = guard.size()?;
        let model = EditorModel::new(state, Layout::from_terminal(cols, rows));

        let path_str = args.path.as_ref().map(|p| p.display().to_string());
        let config_str = config.source.as_ref().map(|p| p.display().to_string());
        info!(
            target: "runtime.startup",
            path = path_str.as_deref(),
            rows = model.state().document.len(),
            config = config_str.as_deref(),
            tab_stop = settings.tab_stop,
            quit_times = settings.quit_times,
            cols,
            term_rows = rows,
            "bootstrap_complete"
        );

        Ok(RuntimeContext {
            model,
            settings,
            terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                // Restore the terminal before the default hook prints.
                let _ = crossterm::execute!(
                    stdout(),
                    crossterm::terminal::LeaveAlternateScreen,
                    crossterm::cursor::Show
                );
                let _ = crossterm::terminal::disable_raw_mode();
                default_panic(info);
            }));
        });
    }

    fn load_editor_state(args: &Args, settings: &Effective) -> Result<EditorState> {
        let document = match args.path.as_ref() {
            Some(path) => io_ops::open_file(path, settings.tab_stop)?,
            None => Document::new(settings.tab_stop),
        };
        let mut state = EditorState::new(document);
        if let Some(path) = args.path.as_ref() {
            state.file_name = Some(path.clone());
        }
        state.quit_guard = QuitGuard::new(settings.quit_times);
        state.message_ttl = settings.message_ttl;
        state.set_status(HELP_MESSAGE);
        Ok(state)
    }
}

struct EditorRuntime<'a> {
    model: EditorModel,
    render_engine: RenderEngine,
    decoder: KeyDecoder<StdinSource>,
    out: Stdout,
    _terminal_guard: TerminalGuard<'a>,
}

impl<'a> EditorRuntime<'a> {
    fn new(context: RuntimeContext<'a>) -> Result<Self> {
        let source = StdinSource::spawn().context("spawn stdin reader")?;
        let decoder = KeyDecoder::with_timeouts(
            source,
            context.settings.poll_interval,
            context.settings.escape_timeout,
        );
        Ok(Self {
            model: context.model,
            render_engine: RenderEngine::with_version(env!("CARGO_PKG_VERSION")),
            decoder,
            out: stdout(),
            _terminal_guard: context.terminal_guard,
        })
    }

    /// Scroll, draw, read one key, dispatch it; until a quit is accepted.
    fn run(mut self) -> Result<ShutdownReason> {
        loop {
            self.track_window_size();
            self.model.scroll();
            self.render_engine
                .render(
                    &mut self.out,
                    self.model.state(),
                    self.model.view(),
                    Instant::now(),
                )
                .context("draw frame")?;

            let key = self.decoder.read_key().context("read key")?;
            let result = handle_key(key, &mut self.model);
            if result.quit {
                log_shutdown_stage(ShutdownReason::ActionQuit, "loop_exit");
                return Ok(ShutdownReason::ActionQuit);
            }
        }
    }

    fn track_window_size(&mut self) {
        let Ok((cols, rows)) = window_size() else {
            return;
        };
        if self.model.resize(Layout::from_terminal(cols, rows)) {
            info!(target: "runtime", cols, rows, "terminal_resized");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    ActionQuit,
    Error,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::ActionQuit => "action_quit",
            ShutdownReason::Error => "error",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    // Runtime (and with it the terminal guard) is dropped inside this
    // expression, so the terminal is restored before anything is printed.
    let outcome = startup
        .run(&args)
        .and_then(EditorRuntime::new)
        .and_then(EditorRuntime::run);
    match outcome {
        Ok(reason) => {
            log_shutdown_stage(reason, "terminal_restored");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_shutdown_stage(ShutdownReason::Error, "terminal_restored");
            error!(target: "runtime.shutdown", error = ?err, "fatal");
            eprintln!("tilde: {err:#}");
            ExitCode::FAILURE
        }
    }
}
