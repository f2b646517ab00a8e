//! Read-eval-print loops: raw-mode keys on a TTY, plain lines otherwise.

use std::io::{self, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;
use termfolio_core::models::OutputLine;
use termfolio_core::{Effect, Key, KeyOutcome, Shell, Submission};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::{ASCII_BANNER, WELCOME_HINT};
use crate::error::AppError;
use crate::render::{Renderer, Step};

/// What a terminal key event means to the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Edit(Key),
    ClearScreen,
    Quit,
    Ignore,
}

fn translate(key: KeyEvent) -> Input {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Input::Quit,
        KeyCode::Char('l') if ctrl => Input::ClearScreen,
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Input::Edit(Key::Char(c))
        }
        KeyCode::Backspace => Input::Edit(Key::Backspace),
        KeyCode::Up => Input::Edit(Key::Up),
        KeyCode::Down => Input::Edit(Key::Down),
        KeyCode::Tab => Input::Edit(Key::Tab),
        KeyCode::Enter => Input::Edit(Key::Enter),
        _ => Input::Ignore,
    }
}

// =============================================================================
// Welcome
// =============================================================================

/// Lines always shown at once: the greeting prompt and the banner.
fn welcome_header(shell: &Shell) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::info(format!("{} welcome!", shell.prompt()))];
    if shell.session().settings().banner {
        lines.extend(ASCII_BANNER.lines().map(OutputLine::text));
    }
    lines
}

/// Greeting, typed out when the typewriter is on.
fn welcome_body(shell: &Shell) -> Vec<OutputLine> {
    vec![
        OutputLine::text(format!(
            "Welcome to {}'s terminal portfolio.",
            shell.interpreter().profile().name
        )),
        OutputLine::text(WELCOME_HINT),
    ]
}

fn queue_welcome<W: io::Write>(renderer: &mut Renderer<W>, shell: &Shell) {
    renderer.enqueue_lines(&welcome_header(shell), false);
    renderer.enqueue_lines(&welcome_body(shell), shell.session().settings().typewriter);
}

/// Blocking reads run on their own thread so output can keep stepping
/// while no key arrives. The thread ends on a read error or once the
/// receiver is gone.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<io::Result<Event>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        loop {
            let event = event::read();
            let failed = event.is_err();
            if tx.send(event).is_err() || failed {
                break;
            }
        }
    });
    rx
}

// =============================================================================
// Loops
// =============================================================================

/// Raw-mode loop. The terminal is restored even when the loop fails.
pub async fn run_raw(shell: &mut Shell, delay: Duration) -> Result<(), AppError> {
    let theme = shell.session().settings().theme;
    let mut renderer = Renderer::interactive(io::stdout(), theme, delay);

    enable_raw_mode()?;
    let result = raw_loop(shell, &mut renderer).await;
    disable_raw_mode()?;
    println!();
    result
}

async fn raw_loop(shell: &mut Shell, renderer: &mut Renderer<Stdout>) -> Result<(), AppError> {
    let mut keys = spawn_key_reader();
    queue_welcome(renderer, shell);
    let mut next_step = Instant::now();

    loop {
        let event = if renderer.is_idle() {
            keys.recv().await
        } else {
            tokio::select! {
                biased;
                event = keys.recv() => event,
                _ = tokio::time::sleep_until(next_step) => {
                    if renderer.step()? == Step::Typed {
                        next_step = Instant::now() + renderer.delay();
                    }
                    if renderer.is_idle() {
                        redraw(renderer, shell)?;
                    }
                    continue;
                }
            }
        };
        let Some(event) = event else {
            return Ok(());
        };
        let Event::Key(key) = event? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // While output is pending the input line is not on screen: keys
        // still edit the buffer, and submissions queue behind that output.
        let idle = renderer.is_idle();
        match translate(key) {
            Input::Quit => {
                debug!("quit requested");
                return Ok(());
            }
            Input::ClearScreen => renderer.enqueue(
                &Submission {
                    lines: Vec::new(),
                    effects: vec![Effect::ClearScreen],
                },
                false,
            ),
            Input::Ignore => continue,
            Input::Edit(key) => {
                if let KeyOutcome::Submitted(submission) = shell.handle_key(key) {
                    if idle {
                        renderer.clear_input()?;
                    }
                    let typewriter = shell.session().settings().typewriter;
                    renderer.enqueue(&submission, typewriter);
                }
            }
        }
        if renderer.is_idle() {
            redraw(renderer, shell)?;
        }
    }
}

fn redraw(renderer: &mut Renderer<Stdout>, shell: &Shell) -> io::Result<()> {
    let editor = shell.editor();
    renderer.draw_input(&shell.prompt(), editor.buffer(), editor.ghost())
}

/// Line loop for pipes and `--line-mode`: each input line is one submission.
pub async fn run_lines(shell: &mut Shell, delay: Duration) -> Result<(), AppError> {
    let theme = shell.session().settings().theme;
    let mut renderer = Renderer::new(io::stdout(), theme, delay);
    queue_welcome(&mut renderer, shell);
    renderer.drain().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let submission = shell.submit(&line);
        let typewriter = shell.session().settings().typewriter;
        renderer.render(&submission, typewriter).await?;
    }
    Ok(())
}
