// SPDX-License-Identifier: MIT

use std::io::{IsTerminal, Write};

use clap::Args;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diff::{Item, ItemKind};

#[derive(Debug, Clone, Default, Args)]
pub struct Options {
    /// Whether the output should be colored
    #[clap(long)]
    pub color: Option<bool>,
}

pub struct Cli {
    stream: Box<dyn WriteColor>,
}
impl Cli {
    pub fn new(options: Options) -> Cli {
        let use_color = options.color.unwrap_or_else(|| std::io::stdout().is_terminal());
        let color = if use_color { ColorChoice::Always } else { ColorChoice::Never };

        Cli {
            stream: Box::new(StandardStream::stdout(color)),
        }
    }

    pub fn stream(&mut self) -> &mut dyn WriteColor {
        self.stream.as_mut()
    }

    /// Print one hunk on its own line, colored by what kind of change it is.
    pub fn print_item(&mut self, item: &Item) -> std::io::Result<()> {
        let color = match item.kind() {
            ItemKind::Delete => Color::Red,
            ItemKind::Insert => Color::Green,
            ItemKind::Replace => Color::Yellow,
        };

        let stream = self.stream();
        stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(stream, "{}", item)?;
        stream.reset()?;
        writeln!(stream)
    }
}
