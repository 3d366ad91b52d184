//! Output formatting utilities

use crate::domain::validation::DATE_FORMAT;
use crate::domain::{Contact, Note, UpcomingBirthday};

const HEADERS: [&str; 5] = ["Name", "Phone", "Email", "Address", "Birthday"];

fn contact_row(contact: &Contact) -> [String; 5] {
    [
        contact.name.clone(),
        contact.phone.to_string(),
        contact
            .email
            .as_ref()
            .map_or_else(|| "-".to_string(), |e| e.to_string()),
        contact.address.clone().unwrap_or_else(|| "-".to_string()),
        contact
            .birthday
            .map_or_else(|| "-".to_string(), |b| b.to_string()),
    ]
}

/// Format contacts as an aligned table
pub fn format_contact_table(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found".to_string();
    }

    let rows: Vec<[String; 5]> = contacts.iter().map(|c| contact_row(c)).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&rule.join("  "));
    output.push('\n');
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    output.push_str(line.join("  ").trim_end());
    output.push('\n');
}

/// Format one contact as labelled lines
pub fn format_contact(contact: &Contact) -> String {
    let row = contact_row(contact);
    HEADERS
        .iter()
        .zip(row.iter())
        .map(|(label, value)| format!("{}: {}\n", label, value))
        .collect()
}

/// Format notes as a numbered list
pub fn format_note_list(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for (idx, note) in notes.iter().enumerate() {
        if note.tags.is_empty() {
            output.push_str(&format!("{}. {}\n", idx + 1, note.text));
        } else {
            output.push_str(&format!(
                "{}. {}  [{}]\n",
                idx + 1,
                note.text,
                note.tags.join(", ")
            ));
        }
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let tags: Vec<String> = tags.iter().map(|tag| format!("#{}", tag)).collect();
    format!("Tags: {}\n", tags.join(" "))
}

/// Format upcoming birthdays with their congratulation dates
pub fn format_birthdays(upcoming: &[UpcomingBirthday], days: i64) -> String {
    if upcoming.is_empty() {
        return format!("No birthdays in the next {} days", days);
    }

    let mut output = String::new();
    for entry in upcoming {
        if entry.congratulation_date == entry.birthday {
            output.push_str(&format!(
                "{} will be congratulated on {}\n",
                entry.name,
                entry.congratulation_date.format(DATE_FORMAT)
            ));
        } else {
            output.push_str(&format!(
                "{} will be congratulated on {} (birthday falls on {})\n",
                entry.name,
                entry.congratulation_date.format(DATE_FORMAT),
                entry.birthday.format("%A")
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, Email, Phone};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bob() -> Contact {
        Contact::new("Bob", Phone::parse("0501234567").unwrap()).unwrap()
    }

    #[test]
    fn test_format_empty_contacts() {
        assert_eq!(format_contact_table(&[]), "No contacts found");
    }

    #[test]
    fn test_format_contact_table_aligns_columns() {
        let alice = Contact::new("Alice Longname", Phone::parse("+380501234567").unwrap())
            .unwrap()
            .with_email(Email::parse("alice@example.com").unwrap())
            .with_birthday(Birthday::from(date(1990, 7, 15)));
        let bob = bob();

        let output = format_contact_table(&[&alice, &bob]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name            Phone"));
        assert!(lines[2].contains("alice@example.com"));
        assert!(lines[2].contains("15.07.1990"));
        assert!(lines[3].starts_with("Bob             0501234567"));
        assert!(lines[3].contains(" -"));
    }

    #[test]
    fn test_format_contact_labels() {
        let output = format_contact(&bob().with_address("Kyiv"));
        assert!(output.contains("Name: Bob\n"));
        assert!(output.contains("Address: Kyiv\n"));
        assert!(output.contains("Email: -\n"));
    }

    #[test]
    fn test_format_empty_note_list() {
        assert_eq!(format_note_list(&[]), "No notes found");
    }

    #[test]
    fn test_format_note_list() {
        let tagged = Note::new("Buy milk", vec!["shopping".to_string(), "home".to_string()]);
        let plain = Note::new("Call mom", Vec::new());

        let output = format_note_list(&[&tagged, &plain]);
        assert_eq!(output, "1. Buy milk  [shopping, home]\n2. Call mom\n");
    }

    #[test]
    fn test_format_empty_tag_list() {
        let tags = vec![];
        let output = format_tag_list(&tags);
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["personal".to_string(), "work".to_string()];
        let output = format_tag_list(&tags);
        assert_eq!(output, "Tags: #personal #work\n");
    }

    #[test]
    fn test_format_birthdays() {
        let upcoming = vec![
            UpcomingBirthday {
                name: "Ann".to_string(),
                birthday: date(2025, 1, 17),
                congratulation_date: date(2025, 1, 17),
            },
            UpcomingBirthday {
                name: "Sam".to_string(),
                birthday: date(2025, 1, 18),
                congratulation_date: date(2025, 1, 20),
            },
        ];

        let output = format_birthdays(&upcoming, 7);
        assert!(output.contains("Ann will be congratulated on 17.01.2025\n"));
        assert!(output.contains("Sam will be congratulated on 20.01.2025 (birthday falls on Saturday)"));
    }

    #[test]
    fn test_format_no_birthdays() {
        assert_eq!(format_birthdays(&[], 7), "No birthdays in the next 7 days");
    }
}
