use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use calcterm::app::App;
use calcterm::calculator::{DisplayBuffer, Session, format_number, rewrite};
use calcterm::config::{self, Config, ConfigResult};
use calcterm::error::CalcError;
use calcterm::{eval, keymap, logging};

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/calcterm/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Evaluate an expression, print the result and exit
    #[arg(short, long, value_name = "EXPR", conflicts_with = "keys")]
    eval: Option<String>,

    /// Replay a key sequence through the keypad and print the entry display
    #[arg(short, long, value_name = "KEYS")]
    keys: Option<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init();

    let ConfigResult { config, warning } = config::load_config(args.config.as_deref());

    if let Some(expression) = args.eval {
        let value = eval::evaluate(&rewrite::to_evaluable(&expression))
            .map_err(CalcError::from)
            .wrap_err_with(|| format!("cannot evaluate {expression:?}"))?;
        println!("{}", format_number(value));
        return Ok(());
    }

    if let Some(keys) = args.keys {
        println!("{}", replay_keys(&keys, &config)?);
        return Ok(());
    }

    let mut app = App::new(&config);
    if let Some(warning) = warning {
        app.notification.show(&warning);
    }

    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("failed to disable mouse capture: {err}");
    }
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Feed each character to a fresh session and return the entry display
fn replay_keys(keys: &str, config: &Config) -> Result<String> {
    let mut session = Session::new(DisplayBuffer::default());
    for ch in keys.chars().filter(|ch| !ch.is_whitespace()) {
        let Some(action) = keymap::action_for_char(ch, &config.keys) else {
            bail!("no calculator key is bound to {ch:?}");
        };
        session.dispatch(action);
    }
    Ok(session.sink().entry.clone())
}
