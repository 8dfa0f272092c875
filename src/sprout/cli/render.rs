use chrono::{DateTime, Utc};
use colored::Colorize;
use sprout::api::{CmdMessage, MessageLevel, PlantCard};
use sprout::index::DisplayPlant;
use sprout::status::WateringStatus;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const SUNLIGHT_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 26;
const LEFT_PAD: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_card_list(cards: &[PlantCard], empty_hint: &str) -> String {
    if cards.is_empty() {
        return format!("{}\n", empty_hint);
    }
    let mut out = String::new();
    for card in cards {
        out.push_str(&render_card_line(&card.entry, &card.status));
        out.push('\n');
    }
    out
}

/// One list row: index, name and species, sunlight, then the status column.
pub(super) fn render_card_line(entry: &DisplayPlant, status: &WateringStatus) -> String {
    let plant = &entry.plant;
    let idx_str = format!("{}. ", entry.index);

    let title = if plant.species.is_empty() {
        plant.name.clone()
    } else {
        format!("{} ({})", plant.name, plant.species)
    };

    let fixed = LEFT_PAD.width() + idx_str.width() + SUNLIGHT_WIDTH + STATUS_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title_display = truncate_to_width(&title, available);
    let title_padding = available.saturating_sub(title_display.width());

    let sunlight = truncate_to_width(&plant.sunlight, SUNLIGHT_WIDTH);
    let sunlight_padding = SUNLIGHT_WIDTH.saturating_sub(sunlight.width());

    let status_text = format!("{:>width$}", status_text(status), width = STATUS_WIDTH);
    let status_colored = match status {
        WateringStatus::NeedsWater { .. } => status_text.red().bold(),
        WateringStatus::NeverWatered { .. } => status_text.dimmed(),
        WateringStatus::CountingDown { .. } => status_text.green(),
    };

    format!(
        "{}{}{}{}{}{}{}",
        LEFT_PAD,
        idx_str.yellow(),
        title_display.bold(),
        " ".repeat(title_padding),
        sunlight.dimmed(),
        " ".repeat(sunlight_padding),
        status_colored
    )
}

pub(super) fn status_text(status: &WateringStatus) -> String {
    match status {
        WateringStatus::NeverWatered { .. } => "not watered yet".to_string(),
        WateringStatus::NeedsWater { .. } => "needs water!".to_string(),
        WateringStatus::CountingDown { remaining, .. } => format!("water in {}", remaining),
    }
}

pub(super) fn render_full_cards(cards: &[PlantCard], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        let plant = &card.entry.plant;
        out.push_str(&format!(
            "{} {}\n",
            card.entry.index.to_string().yellow(),
            plant.name.bold()
        ));
        out.push_str("--------------------------------\n");

        let mut field = |label: &str, value: &str| {
            if !value.is_empty() {
                let label = format!("{:<14}", format!("{}:", label));
                out.push_str(&format!("{}{}\n", label.dimmed(), value));
            }
        };
        field("Species", &plant.species);
        field("Water every", &days(plant.watering_frequency));
        field("Sunlight", &plant.sunlight);
        let last = match plant.last_watered {
            Some(at) => format!("{} ({})", at.format("%Y-%m-%d %H:%M UTC"), time_ago(at, now)),
            None => "never".to_string(),
        };
        field("Last watered", &last);
        field("Status", &status_text(&card.status));
        field("Notes", &plant.notes);
        field("Image", plant.image.as_deref().unwrap_or_default());
    }
    out
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
