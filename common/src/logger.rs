use chrono::Local;
use colored::*;

/// Console logger shared by every component. Each component gets its own
/// name and color so interleaved output stays readable.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    fn prefix(&self, level: &str) -> String {
        format!(
            "[{}][{}][{}]",
            Local::now().format("%H:%M:%S"),
            level,
            self.name
        )
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!(
            "{} {}",
            self.prefix("INFO").bold().color(self.info_color),
            msg.as_ref()
        );
    }

    /// Green line for user-facing results, whatever the component color is.
    pub fn success(&self, msg: impl AsRef<str>) {
        println!(
            "{} {}",
            self.prefix("OK").bold().green(),
            msg.as_ref().green()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!(
            "{} {}",
            self.prefix("WARN").bold().yellow(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            self.prefix("ERROR").bold().bright_red(),
            msg.as_ref()
        );
    }
}
