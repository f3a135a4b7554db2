use std::io::{self, Read, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wenote_core::Note;

const DELIMITER: &str = "+++";

/// Front matter plus body of a note as shown in the external editor.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
pub struct NoteTemplate {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_id: Option<u64>,
    /// Tag names
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip)]
    pub content: String,
}

impl NoteTemplate {
    pub fn from_note(note: &Note) -> Self {
        NoteTemplate {
            title: note.title.clone(),
            notebook_id: Some(note.notebook_id),
            tags: note.tags.iter().map(|t| t.name.clone()).collect(),
            content: note.content.clone(),
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let front = toml::to_string(self).context("Failed to render note template")?;
        Ok(format!("{}{}\n{}", front, DELIMITER, self.content))
    }
}

pub struct Editor;

impl Editor {
    /// Format error message as safe TOML comments
    fn format_error_header(error: &anyhow::Error, content: &str) -> String {
        let error_lines = format!("{}", error)
            .lines()
            .map(|line| format!("# {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# ===== PARSING ERROR =====\n{}\n# ===== Fix the issue below and save again =====\n\n{}",
            error_lines, content
        )
    }

    fn read_from_file(tempfile: tempfile::NamedTempFile) -> anyhow::Result<String> {
        let editor = std::env::var("VISUAL")
            .unwrap_or_else(|_| std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string()));

        let mut child = std::process::Command::new(editor)
            .arg(tempfile.path())
            .spawn()
            .context("Failed to open editor")?;

        let status = child.wait().context("Failed to wait for editor")?;

        if !status.success() {
            return Err(anyhow::anyhow!("Editor returned non-zero exit code"));
        }

        let mut content = String::new();
        let mut file =
            std::fs::File::open(tempfile.path()).context("Failed to open temporary file")?;
        file.read_to_string(&mut content)
            .context("Failed to read temporary file")?;

        Ok(content)
    }

    fn with_initial_content(template: &str) -> anyhow::Result<String> {
        let mut tempfile = tempfile::Builder::new()
            .suffix(".md")
            .tempfile()
            .context("Failed to create temporary file")?;

        tempfile
            .write_all(template.as_bytes())
            .context("Failed to write initial content")?;

        Self::read_from_file(tempfile)
    }

    /// Opens `initial` in the user's editor until it parses, the user saves
    /// it as plain text, or aborts.
    pub fn open(initial: &NoteTemplate) -> anyhow::Result<NoteTemplate> {
        let mut current_content = initial.render()?;

        loop {
            let edited_content = Self::with_initial_content(&current_content)?;

            let error = match edited_content.parse_template() {
                Ok(parsed) => return Ok(parsed),
                Err(e) => e,
            };

            println!("Error parsing note: {}\n", error);
            println!("Your changes have been preserved in the editor.");
            println!("Do you want to:");
            println!("  [R]etry (re-open editor with your changes)");
            println!("  [S]ave anyway (ignore front matter, save as plain text)");
            println!("  [A]bort (discard changes)");
            print!("Choice (R/s/a): ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            match input.trim().to_lowercase().as_str() {
                "s" => {
                    return Ok(NoteTemplate {
                        title: initial.title.clone(),
                        notebook_id: initial.notebook_id,
                        tags: initial.tags.clone(),
                        content: edited_content,
                    });
                }
                "a" => return Err(anyhow::anyhow!("Edit aborted")),
                choice => {
                    if !choice.is_empty() && choice != "r" {
                        println!("\nInvalid choice. Please enter R, S, or A.");
                    }
                    current_content = Self::format_error_header(&error, &edited_content);
                }
            }
        }
    }
}

pub trait ParseTemplate {
    fn parse_template(&self) -> anyhow::Result<NoteTemplate>;
}

impl ParseTemplate for String {
    fn parse_template(&self) -> anyhow::Result<NoteTemplate> {
        let lines: Vec<&str> = self.lines().collect();

        // The delimiter must be on its own line
        let delimiter_pos = lines.iter().position(|line| line.trim() == DELIMITER);

        let (toml_lines, content_lines) = match delimiter_pos {
            Some(pos) => (&lines[..pos], &lines[pos + 1..]),
            None => (lines.as_slice(), &[] as &[&str]),
        };

        let mut parsed = toml::from_str::<NoteTemplate>(&toml_lines.join("\n"))?;
        parsed.content = content_lines.join("\n");

        Ok(parsed)
    }
}
