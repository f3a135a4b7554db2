use std::io::Write;

use serde::Serialize;
use serde_json::json;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use wenote_client::{GoalProgress, StreakDisplay};
use wenote_core::{
    Achievement, Note, Notebook, NotebookStat, StatsOverview, Tag, TagStat, TrendPoint, User,
    ViewState, WritingReport,
};

use crate::args::OutputFormat;

const PREVIEW_CHARS: usize = 60;

/// `#RRGGBB` to a terminal colour
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn preview(content: &str) -> String {
    let line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut preview: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}

fn title_or_untitled(note: &Note) -> &str {
    if note.title.is_empty() {
        "(untitled)"
    } else {
        &note.title
    }
}

pub struct Printer {
    output: OutputFormat,
    stdout: StandardStream,
}

impl Printer {
    pub fn new(output: OutputFormat) -> Self {
        Printer {
            output,
            stdout: StandardStream::stdout(ColorChoice::Auto),
        }
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }

    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(value)?;
        writeln!(self.stdout, "{}", text)?;
        Ok(())
    }

    fn colored(&mut self, color: Option<Color>, bold: bool, text: &str) -> anyhow::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(color).set_bold(bold))?;
        write!(self.stdout, "{}", text)?;
        self.stdout.reset()?;
        Ok(())
    }

    /// One-line confirmation for plain and pretty output, the entity for json.
    pub fn done<T: Serialize>(&mut self, message: &str, value: &T) -> anyhow::Result<()> {
        if self.is_json() {
            return self.json(value);
        }
        writeln!(self.stdout, "{}", message)?;
        Ok(())
    }

    pub fn notes(&mut self, notes: &[Note], view: &ViewState) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => self.json(&json!({
                "view": view.view().to_string(),
                "page": view.page(),
                "page_size": view.page_size(),
                "total": view.total(),
                "list": notes,
            })),
            OutputFormat::Plain => {
                for note in notes {
                    writeln!(
                        self.stdout,
                        "{}\t{}\t{}\t{}",
                        note.id,
                        note.notebook_id,
                        note.title,
                        note.tags
                            .iter()
                            .map(|t| t.name.as_str())
                            .collect::<Vec<_>>()
                            .join(",")
                    )?;
                }
                Ok(())
            }
            OutputFormat::Pretty => {
                if notes.is_empty() {
                    writeln!(self.stdout, "No notes found.")?;
                    return Ok(());
                }

                for note in notes {
                    self.colored(Some(Color::Blue), false, &format!("#{:<6}", note.id))?;
                    if note.is_pinned {
                        write!(self.stdout, "📌 ")?;
                    }
                    if note.is_starred {
                        self.colored(Some(Color::Yellow), false, "★ ")?;
                    }
                    self.colored(None, true, title_or_untitled(note))?;
                    for tag in &note.tags {
                        write!(self.stdout, " ")?;
                        self.colored(
                            hex_color(tag.display_color()),
                            false,
                            &format!("#{}", tag.name),
                        )?;
                    }
                    writeln!(self.stdout)?;

                    let preview = preview(&note.content);
                    if !preview.is_empty() {
                        writeln!(self.stdout, "        {}", preview)?;
                    }
                }

                writeln!(
                    self.stdout,
                    "\nPage {} of {} ({} notes)",
                    view.page(),
                    view.page_count(),
                    view.total()
                )?;
                Ok(())
            }
        }
    }

    pub fn notebooks(&mut self, notebooks: &[Notebook]) -> anyhow::Result<()> {
        if self.is_json() {
            return self.json(notebooks);
        }

        for notebook in notebooks {
            let marker = if notebook.is_default { "*" } else { " " };
            match self.output {
                OutputFormat::Plain => writeln!(
                    self.stdout,
                    "{}\t{}\t{}",
                    notebook.id, notebook.name, notebook.note_count
                )?,
                _ => {
                    write!(self.stdout, "{} {:<4} ", marker, notebook.id)?;
                    self.colored(None, true, &notebook.name)?;
                    writeln!(self.stdout, " ({} notes)", notebook.note_count)?;
                }
            }
        }
        Ok(())
    }

    pub fn tags(&mut self, tags: &[Tag]) -> anyhow::Result<()> {
        if self.is_json() {
            return self.json(tags);
        }

        for tag in tags {
            match self.output {
                OutputFormat::Plain => writeln!(
                    self.stdout,
                    "{}\t{}\t{}\t{}",
                    tag.id,
                    tag.name,
                    tag.display_color(),
                    tag.note_count
                )?,
                _ => {
                    write!(self.stdout, "{:<4} ", tag.id)?;
                    self.colored(hex_color(tag.display_color()), true, &format!("#{}", tag.name))?;
                    writeln!(self.stdout, " ({} notes)", tag.note_count)?;
                }
            }
        }
        Ok(())
    }

    pub fn user(&mut self, user: &User) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => self.json(user),
            OutputFormat::Plain => {
                writeln!(self.stdout, "{}\t{}\t{}", user.id, user.username, user.email)?;
                Ok(())
            }
            OutputFormat::Pretty => {
                self.colored(None, true, user.display_name())?;
                writeln!(self.stdout, " (@{})", user.username)?;
                if !user.email.is_empty() {
                    writeln!(self.stdout, "  email:  {}", user.email)?;
                }
                if !user.bio.is_empty() {
                    writeln!(self.stdout, "  bio:    {}", user.bio)?;
                }
                writeln!(
                    self.stdout,
                    "  notes:  {}  chars: {}  streak: {}",
                    user.total_notes, user.total_chars, user.current_streak
                )?;
                Ok(())
            }
        }
    }

    pub fn streak(
        &mut self,
        streak: &StreakDisplay,
        goal: &GoalProgress,
        unlocked: &[Achievement],
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => self.json(&json!({
                "streak": streak,
                "goal": goal,
                "new_achievements": unlocked,
            })),
            OutputFormat::Plain => {
                writeln!(
                    self.stdout,
                    "{}\t{}\t{}\t{}\t{}",
                    streak.current, streak.longest, goal.current, goal.target, goal.completed
                )?;
                Ok(())
            }
            OutputFormat::Pretty => {
                self.colored(Some(Color::Red), true, &format!("🔥 {} day streak", streak.current))?;
                writeln!(self.stdout, " (best {})", streak.longest)?;
                if streak.at_risk {
                    self.colored(
                        Some(Color::Yellow),
                        false,
                        "   Write something today to keep it going.\n",
                    )?;
                }

                let color = if goal.completed {
                    Color::Green
                } else {
                    Color::Cyan
                };
                self.colored(
                    Some(color),
                    false,
                    &format!(
                        "   Today: {}/{} chars ({:.0}%)\n",
                        goal.current, goal.target, goal.percent
                    ),
                )?;

                for achievement in unlocked {
                    self.colored(
                        Some(Color::Magenta),
                        true,
                        &format!("🏆 Unlocked: {} {}\n", achievement.icon, achievement.name),
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn achievements(&mut self, achievements: &[&Achievement]) -> anyhow::Result<()> {
        if self.is_json() {
            return self.json(achievements);
        }

        for a in achievements {
            match self.output {
                OutputFormat::Plain => writeln!(
                    self.stdout,
                    "{}\t{}\t{}\t{}",
                    a.id, a.name, a.rarity, a.unlocked
                )?,
                _ => {
                    let color = if a.unlocked { Some(Color::Green) } else { None };
                    let mark = if a.unlocked { "✓" } else { "·" };
                    self.colored(color, a.unlocked, &format!("{} {} {}", mark, a.icon, a.name))?;
                    writeln!(self.stdout, "  {} [{}]", a.description, a.rarity)?;
                }
            }
        }
        Ok(())
    }

    pub fn report(&mut self, report: &WritingReport) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => self.json(report),
            OutputFormat::Plain => {
                writeln!(
                    self.stdout,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    report.start_date,
                    report.end_date,
                    report.notes_created,
                    report.chars_written,
                    report.active_days,
                    report.goals_met
                )?;
                Ok(())
            }
            OutputFormat::Pretty => {
                self.colored(
                    None,
                    true,
                    &format!("{} to {}\n", report.start_date, report.end_date),
                )?;
                writeln!(
                    self.stdout,
                    "  notes:       {} ({:+})",
                    report.notes_created, report.notes_delta
                )?;
                writeln!(
                    self.stdout,
                    "  chars:       {} ({:+})",
                    report.chars_written, report.chars_delta
                )?;
                writeln!(
                    self.stdout,
                    "  active days: {} ({:+})",
                    report.active_days, report.active_days_delta
                )?;
                writeln!(self.stdout, "  goals met:   {}", report.goals_met)?;
                for day in &report.daily_stats {
                    let mark = if day.goal_met { "✓" } else { " " };
                    writeln!(
                        self.stdout,
                        "  {} {} {:>3} notes {:>6} chars",
                        mark, day.date, day.notes, day.chars
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn stats(
        &mut self,
        overview: &StatsOverview,
        trend: &[TrendPoint],
        tags: &[TagStat],
        notebooks: &[NotebookStat],
    ) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Json => self.json(&json!({
                "overview": overview,
                "trend": trend,
                "tags": tags,
                "notebooks": notebooks,
            })),
            OutputFormat::Plain => {
                for point in trend {
                    writeln!(self.stdout, "{}\t{}", point.date, point.count)?;
                }
                Ok(())
            }
            OutputFormat::Pretty => {
                writeln!(
                    self.stdout,
                    "{} notes in {} notebooks with {} tags, {} words",
                    overview.total_notes,
                    overview.total_notebooks,
                    overview.total_tags,
                    overview.total_words
                )?;
                writeln!(
                    self.stdout,
                    "This week: {} notes, {} words\n",
                    overview.this_week_notes, overview.this_week_words
                )?;

                let peak = trend.iter().map(|p| p.count).max().unwrap_or(0).max(1);
                for point in trend {
                    let width = usize::try_from(point.count * 30 / peak).unwrap_or(0);
                    writeln!(
                        self.stdout,
                        "{} {:>3} {}",
                        point.date,
                        point.count,
                        "█".repeat(width)
                    )?;
                }

                if !tags.is_empty() {
                    writeln!(self.stdout)?;
                }
                for tag in tags {
                    self.colored(hex_color(&tag.color), false, &format!("#{}", tag.tag_name))?;
                    writeln!(self.stdout, " {}", tag.count)?;
                }

                if !notebooks.is_empty() {
                    writeln!(self.stdout)?;
                }
                for notebook in notebooks {
                    writeln!(self.stdout, "{} {}", notebook.notebook_name, notebook.count)?;
                }
                Ok(())
            }
        }
    }
}
