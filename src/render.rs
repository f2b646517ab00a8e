//! Terminal renderer for output records.
//!
//! Writes to any `io::Write`. In interactive mode lines end in `\r\n`, colors
//! follow the theme and the input line is redrawn in place; otherwise output
//! is plain text, one record per line.
//!
//! Submissions are queued and written one [`Step`] at a time: a typed
//! character, a whole line, or a batch's effects. The key loop steps the
//! queue between key events; [`Renderer::drain`] steps it to the end.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{MoveLeft, MoveTo, MoveToColumn};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use termfolio_core::models::{Link, OutputLine, OutputLineData, Theme};
use termfolio_core::{Effect, Submission, Tick, Typewriter};

/// Colors of one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Palette {
    accent: Color,
    muted: Color,
    error: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Rgb { r: 0x9c, g: 0xff, b: 0x57 },
            muted: Color::Rgb { r: 0x9f, g: 0xb4, b: 0xb0 },
            error: Color::Rgb { r: 0xff, g: 0x6b, b: 0x6b },
        },
        Theme::Light => Palette {
            accent: Color::Rgb { r: 0x1f, g: 0x6f, b: 0xeb },
            muted: Color::Rgb { r: 0x57, g: 0x60, b: 0x6a },
            error: Color::Rgb { r: 0xcf, g: 0x22, b: 0x2e },
        },
        Theme::Matrix => Palette {
            accent: Color::Rgb { r: 0x00, g: 0xff, b: 0x41 },
            muted: Color::Rgb { r: 0x00, g: 0x8f, b: 0x11 },
            error: Color::Rgb { r: 0xff, g: 0x55, b: 0x55 },
        },
    }
}

/// What one call to [`Renderer::step`] wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Nothing was queued
    Idle,
    /// One typewriter character; the next step waits the typing delay
    Typed,
    /// A whole line, the end of a typed line, or a batch's effects
    Wrote,
}

/// One queued submission.
#[derive(Debug)]
struct Batch {
    lines: VecDeque<OutputLine>,
    effects: Vec<Effect>,
    typewriter: bool,
}

pub struct Renderer<W: Write> {
    out: W,
    palette: Palette,
    delay: Duration,
    interactive: bool,
    queue: VecDeque<Batch>,
    /// Line being typed out, if any
    typing: Option<Typewriter>,
}

impl<W: Write> Renderer<W> {
    /// Plain renderer for piped output.
    pub fn new(out: W, theme: Theme, delay: Duration) -> Self {
        Self {
            out,
            palette: palette(theme),
            delay,
            interactive: false,
            queue: VecDeque::new(),
            typing: None,
        }
    }

    /// Colored raw-mode renderer.
    pub fn interactive(out: W, theme: Theme, delay: Duration) -> Self {
        Self {
            interactive: true,
            ..Self::new(out, theme, delay)
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.palette = palette(theme);
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// No output is waiting to be written.
    pub fn is_idle(&self) -> bool {
        self.typing.is_none() && self.queue.is_empty()
    }

    /// Queue a submission behind any output still pending.
    pub fn enqueue(&mut self, submission: &Submission, typewriter: bool) {
        self.queue.push_back(Batch {
            lines: submission.lines.iter().cloned().collect(),
            effects: submission.effects.clone(),
            typewriter,
        });
    }

    pub fn enqueue_lines(&mut self, lines: &[OutputLine], typewriter: bool) {
        self.queue.push_back(Batch {
            lines: lines.iter().cloned().collect(),
            effects: Vec::new(),
            typewriter,
        });
    }

    /// Render a submission's records in order, then apply its effects.
    pub async fn render(&mut self, submission: &Submission, typewriter: bool) -> io::Result<()> {
        self.enqueue(submission, typewriter);
        self.drain().await
    }

    /// Write everything queued, pausing the typing delay after each
    /// typed character.
    pub async fn drain(&mut self) -> io::Result<()> {
        loop {
            match self.step()? {
                Step::Idle => return Ok(()),
                Step::Typed => tokio::time::sleep(self.delay).await,
                Step::Wrote => {}
            }
        }
    }

    /// Write the next piece of queued output.
    ///
    /// A batch's effects apply once all of its lines are written.
    pub fn step(&mut self) -> io::Result<Step> {
        if let Some(typing) = &mut self.typing {
            return match typing.tick() {
                Tick::Char(ch) => {
                    write!(self.out, "{}", ch)?;
                    self.out.flush()?;
                    Ok(Step::Typed)
                }
                Tick::Done => {
                    self.typing = None;
                    self.set_color(None)?;
                    self.newline()?;
                    self.out.flush()?;
                    Ok(Step::Wrote)
                }
            };
        }

        let Some(batch) = self.queue.front_mut() else {
            return Ok(Step::Idle);
        };
        let typewriter = batch.typewriter;
        match batch.lines.pop_front() {
            Some(line) => self.start_line(&line, typewriter)?,
            None => {
                if let Some(batch) = self.queue.pop_front() {
                    for effect in &batch.effects {
                        self.apply(effect)?;
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(Step::Wrote)
    }

    /// Write a line whole, or set it up to be typed out.
    fn start_line(&mut self, line: &OutputLine, typewriter: bool) -> io::Result<()> {
        let color = match &line.data {
            OutputLineData::Error(_) => Some(self.palette.error),
            OutputLineData::Info(_) => Some(self.palette.muted),
            _ => None,
        };

        if let (true, Some(text)) = (typewriter, line.typed_text()) {
            self.set_color(color)?;
            self.typing = Some(Typewriter::new(text));
            return Ok(());
        }

        match &line.data {
            OutputLineData::Command { prompt, input } => {
                self.colored(prompt, self.palette.accent)?;
                write!(self.out, " {}", input)?;
            }
            OutputLineData::Text(text) => self.out.write_all(text.as_bytes())?,
            OutputLineData::Error(text) => self.colored(text, self.palette.error)?,
            OutputLineData::Info(text) => self.colored(text, self.palette.muted)?,
            OutputLineData::Link(link) => self.link(link)?,
        }
        self.newline()
    }

    /// `Label: text <href>`
    fn link(&mut self, link: &Link) -> io::Result<()> {
        if self.interactive {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(format!("{}: ", link.label)),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            write!(self.out, "{}: ", link.label)?;
        }
        self.colored(&link.text, self.palette.accent)?;
        self.colored(&format!(" <{}>", link.href), self.palette.muted)
    }

    fn apply(&mut self, effect: &Effect) -> io::Result<()> {
        match effect {
            Effect::ClearScreen => {
                if self.interactive {
                    self.clear_screen()?;
                }
            }
            Effect::ApplyTheme(theme) => self.set_theme(*theme),
            Effect::OpenUrl(url) => debug!("open requested for {}", url),
            Effect::SetBackground(mode) => debug!("background mode now {}", mode),
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
        self.out.flush()
    }

    /// Redraw the input line: prompt, buffer and dim ghost suggestion.
    pub fn draw_input(&mut self, prompt: &str, buffer: &str, ghost: Option<&str>) -> io::Result<()> {
        self.clear_input()?;
        self.colored(prompt, self.palette.accent)?;
        write!(self.out, " {}", buffer)?;
        if let Some(ghost) = ghost.filter(|g| !g.is_empty()) {
            queue!(
                self.out,
                SetAttribute(Attribute::Dim),
                Print(ghost),
                SetAttribute(Attribute::Reset),
                MoveLeft(ghost.chars().count() as u16)
            )?;
        }
        self.out.flush()
    }

    /// Erase the input line so the echo record can take its place.
    pub fn clear_input(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::CurrentLine))
    }

    fn colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.interactive {
            queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    fn set_color(&mut self, color: Option<Color>) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        match color {
            Some(color) => queue!(self.out, SetForegroundColor(color)),
            None => queue!(self.out, ResetColor),
        }
    }

    fn newline(&mut self) -> io::Result<()> {
        let newline = if self.interactive { "\r\n" } else { "\n" };
        self.out.write_all(newline.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}
