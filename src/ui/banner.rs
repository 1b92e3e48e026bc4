// Sat Oct 17 2026 - Alex

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Box,
    Minimal,
}

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    style: BannerStyle,
    use_color: bool,
    width: usize,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            style: BannerStyle::Box,
            use_color: true,
            width: 50,
        }
    }

    /// The banner shown by the CLI on startup.
    pub fn resolver() -> Self {
        Self::new("SDK Offset Resolver")
            .with_subtitle("class layouts -> offsets.json")
            .with_version(env!("CARGO_PKG_VERSION"))
    }

    pub fn with_compact(self, compact: bool) -> Self {
        self.with_style(if compact { BannerStyle::Minimal } else { BannerStyle::Box })
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self) -> String {
        match self.style {
            BannerStyle::Box => self.render_box(),
            BannerStyle::Minimal => self.render_minimal(),
        }
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    fn render_box(&self) -> String {
        let inner_width = self.width.saturating_sub(4).max(self.title.chars().count());
        let h_line = "─".repeat(inner_width + 2);
        let mut lines = vec![format!("┌{}┐", h_line)];

        let title_line = format!("{:^width$}", self.title, width = inner_width);
        lines.push(format!("│ {} │", self.paint(&title_line, |s| s.cyan().bold())));

        if let Some(subtitle) = &self.subtitle {
            lines.push(format!("│ {:^width$} │", subtitle, width = inner_width));
        }

        if let Some(version) = &self.version {
            let ver_line = format!("{:^width$}", format!("v{}", version), width = inner_width);
            lines.push(format!("│ {} │", self.paint(&ver_line, |s| s.green())));
        }

        lines.push(format!("└{}┘", h_line));
        lines.join("\n")
    }

    fn render_minimal(&self) -> String {
        let mut line = self.paint(&self.title, |s| s.cyan().bold());
        if let Some(version) = &self.version {
            line.push_str(&format!(" v{}", version));
        }
        if let Some(subtitle) = &self.subtitle {
            line.push_str(&format!("\n{}", self.paint(subtitle, |s| s.dimmed())));
        }
        line
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}
