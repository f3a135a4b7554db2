use std::io::{self, BufRead, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use wenote_client::{ConfirmPrompt, Confirmer, Level, Navigator, Notifier, Tone};

/// Prints notifications to stderr so stdout stays machine readable.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: Level, message: &str) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let (color, prefix) = match level {
            Level::Success => (Color::Green, "✓"),
            Level::Error => (Color::Red, "✗"),
        };

        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(stderr, "{} ", prefix);
        let _ = stderr.reset();
        let _ = writeln!(stderr, "{}", message);
    }
}

/// Asks on stdin unless `--yes` was given. Anything but y/yes declines.
pub struct TerminalConfirmer {
    assume_yes: bool,
}

impl TerminalConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let color = match prompt.tone {
            Tone::Info => Color::Cyan,
            Tone::Warning => Color::Yellow,
        };
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(stderr, "{}: ", prompt.title);
        let _ = stderr.reset();
        let _ = write!(stderr, "{} [y/N] ", prompt.message);
        let _ = stderr.flush();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }

        is_yes(&input)
    }
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// There is no login screen to jump to; tell the user how to get one.
pub struct LoginHint;

impl Navigator for LoginHint {
    fn to_login(&self) {
        eprintln!("Your session has ended. Run `wenote login <username>` to sign in again.");
    }
}

/// Reads one line from stdin, prompting on stderr.
pub fn read_line(prompt: &str) -> anyhow::Result<String> {
    eprint!("{}: ", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}
