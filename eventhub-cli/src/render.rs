//! Terminal rendering for events.
//!
//! Extension trait adding colored output to `Event` using owo_colors.

use eventhub_core::Event;
use owo_colors::OwoColorize;

pub trait Render {
    /// One line for listings
    fn render_line(&self, currency: &str) -> String;
    /// Full multi-line view
    fn render_detail(&self, currency: &str) -> String;
}

impl Render for Event {
    fn render_line(&self, currency: &str) -> String {
        let price = self.price_label(currency);
        let price = if self.is_paid {
            price.yellow().to_string()
        } else {
            price.green().to_string()
        };

        format!(
            "{} {:>8}  {}  {} {}",
            self.date.bold(),
            self.time,
            self.title,
            format!("[{} · {}]", self.category, self.location).dimmed(),
            price
        )
    }

    fn render_detail(&self, currency: &str) -> String {
        let mut lines = vec![
            format!("{} {}", self.title.bold(), format!("#{}", self.id).dimmed()),
            self.description.clone(),
            String::new(),
            format!("{} {} • {} ({})", "When:".dimmed(), self.date, self.time, self.duration),
            format!("{} {}, {}", "Where:".dimmed(), self.venue, self.location),
            format!("{} {}", "Category:".dimmed(), self.category),
            format!("{} {} expected", "Attendees:".dimmed(), self.attendees),
            format!("{} {}", "Price:".dimmed(), self.price_label(currency)),
            String::new(),
            self.full_description.clone(),
        ];

        if !self.highlights().is_empty() {
            lines.push(String::new());
            lines.push("What You'll Get".bold().to_string());
            lines.extend(self.highlights().iter().map(|h| format!("  • {h}")));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {} <{}>",
            "Organizer:".dimmed(),
            self.organizer,
            self.contact
        ));

        lines.join("\n")
    }
}
