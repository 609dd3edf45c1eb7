//! ANSI presentation of transcript entries.

use crate::block::{Block, Icon, Node};
use crate::interpreter::{CommandEntry, Rendered};
use crate::theme::{DataSource, Theme};
use chrono::{DateTime, Local, Utc};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, Print, PrintStyledContent};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum Tone {
    Accent,
    Strong,
    Plain,
    Muted,
    Pass,
    Fail,
}

const fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Red => Color::Red,
        Theme::Green => Color::Green,
    }
}

const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Globe => "[web]",
        Icon::Github => "[github]",
        Icon::Linkedin => "[linkedin]",
        Icon::Mail => "[mail]",
        Icon::Instagram => "[instagram]",
        Icon::Link => "[link]",
    }
}

fn clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Writes entries to a terminal, with or without colours.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Renderer<W> {
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, text: &str, tone: Tone, theme: Theme) -> io::Result<()> {
        if !self.color {
            return queue!(self.out, Print(text));
        }

        let mut style = ContentStyle::new();
        match tone {
            Tone::Accent => style.foreground_color = Some(accent(theme)),
            Tone::Strong => style.attributes = Attribute::Bold.into(),
            Tone::Plain => {}
            Tone::Muted => style.foreground_color = Some(Color::DarkGrey),
            Tone::Pass => style.foreground_color = Some(Color::Green),
            Tone::Fail => style.foreground_color = Some(Color::Red),
        }
        queue!(self.out, PrintStyledContent(style.apply(text)))
    }

    fn newline(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"))
    }

    fn stamp(&mut self, at: DateTime<Utc>, theme: Theme) -> io::Result<()> {
        self.paint(&format!("[{}] ", clock(at)), Tone::Muted, theme)
    }

    fn system_line(&mut self, message: &str, theme: Theme) -> io::Result<()> {
        self.stamp(Utc::now(), theme)?;
        self.paint("system ", Tone::Accent, theme)?;
        self.paint(message, Tone::Plain, theme)?;
        self.newline()
    }

    /// Shown while the content is still loading.
    pub fn booting(&mut self, theme: Theme) -> io::Result<()> {
        self.system_line("Booting Terminal Portfolio...", theme)?;
        self.out.flush()
    }

    /// Reports where the content came from, then the usage hint.
    pub fn loaded(&mut self, source: DataSource, theme: Theme) -> io::Result<()> {
        let status = if source.is_connected() { "API Connected" } else { "Using Static Data" };
        self.system_line(status, theme)?;

        self.paint("Type ", Tone::Plain, theme)?;
        self.paint("info", Tone::Accent, theme)?;
        self.paint(" for all commands. Type ", Tone::Plain, theme)?;
        self.paint("theme", Tone::Accent, theme)?;
        self.paint(" for theme change.", Tone::Plain, theme)?;
        self.newline()?;
        self.out.flush()
    }

    pub fn prompt(&mut self, theme: Theme) -> io::Result<()> {
        self.stamp(Utc::now(), theme)?;
        self.paint("> ", Tone::Accent, theme)?;
        self.out.flush()
    }

    /// Clears the screen when writing to a colour terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.color {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.flush()
    }

    pub fn entries(&mut self, entries: &[CommandEntry], theme: Theme) -> io::Result<()> {
        for entry in entries {
            self.entry(entry, theme)?;
        }
        self.out.flush()
    }

    fn entry(&mut self, entry: &CommandEntry, theme: Theme) -> io::Result<()> {
        match &entry.rendered {
            None => {
                self.paint("> ", Tone::Accent, theme)?;
                self.paint(&entry.input_text, Tone::Plain, theme)?;
            }
            Some(Rendered::ThemeSwitched { theme: next }) => {
                self.stamp(entry.timestamp, *next)?;
                self.paint("theme", Tone::Accent, *next)?;
                self.paint(": switched to ", Tone::Plain, *next)?;
                self.paint(next.as_str(), Tone::Strong, *next)?;
            }
            Some(Rendered::UnknownCommand { command }) => {
                self.stamp(entry.timestamp, theme)?;
                self.paint("error", Tone::Accent, theme)?;
                self.paint(": unknown command ", Tone::Plain, theme)?;
                self.paint(command, Tone::Strong, theme)?;
                self.paint(". Try ", Tone::Plain, theme)?;
                self.paint("info", Tone::Accent, theme)?;
                self.paint(".", Tone::Plain, theme)?;
            }
            Some(Rendered::Block(block)) => return self.block(block, theme),
        }
        self.newline()
    }

    fn block(&mut self, block: &Block, theme: Theme) -> io::Result<()> {
        self.paint(&format!("-- {} --", block.title.to_uppercase()), Tone::Muted, theme)?;
        self.newline()?;
        for node in &block.nodes {
            self.node(node, theme)?;
        }
        self.newline()
    }

    fn node(&mut self, node: &Node, theme: Theme) -> io::Result<()> {
        match node {
            Node::Heading { text } => self.paint(&format!("  {text}"), Tone::Accent, theme)?,
            Node::Text { text } => self.paint(&format!("  {text}"), Tone::Plain, theme)?,
            Node::Muted { text } => self.paint(&format!("  {text}"), Tone::Muted, theme)?,
            Node::Quote { text } => self.paint(&format!("  | \"{text}\""), Tone::Muted, theme)?,
            Node::Field { label, value } => {
                self.paint(&format!("  {label}: "), Tone::Accent, theme)?;
                self.paint(value, Tone::Plain, theme)?;
            }
            Node::Tags { items } => {
                self.paint(" ", Tone::Plain, theme)?;
                for item in items {
                    self.paint(&format!(" [{item}]"), Tone::Accent, theme)?;
                }
            }
            Node::Bullets { items } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.newline()?;
                    }
                    self.paint("  * ", Tone::Accent, theme)?;
                    self.paint(item, Tone::Plain, theme)?;
                }
            }
            Node::Link { label, href, icon } => {
                self.paint(&format!("  {} ", glyph(*icon)), Tone::Accent, theme)?;
                if label == href {
                    self.paint(href, Tone::Plain, theme)?;
                } else {
                    self.paint(label, Tone::Strong, theme)?;
                    self.paint(&format!(" {href}"), Tone::Muted, theme)?;
                }
            }
            Node::Check { name, pass, message } => {
                let (mark, tone) = if *pass { ("ok  ", Tone::Pass) } else { ("FAIL", Tone::Fail) };
                self.paint(&format!("  {mark} {name}"), tone, theme)?;
                self.paint(&format!(" - {message}"), Tone::Muted, theme)?;
            }
            Node::Unavailable { section } => {
                self.paint(&format!("  {section} data unavailable"), Tone::Muted, theme)?;
            }
            Node::Gap => {}
        }
        self.newline()
    }
}
