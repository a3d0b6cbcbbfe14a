//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::config::TableSettings;
use crate::domain::Person;

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print failure status (red X, indented)
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {} {}", "✗".red(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Border character set for the roster table.
struct Borders {
    h: char,
    v: char,
    top: [char; 3],
    mid: [char; 3],
    bottom: [char; 3],
}

const UNICODE_BORDERS: Borders = Borders {
    h: '─',
    v: '│',
    top: ['┌', '┬', '┐'],
    mid: ['├', '┼', '┤'],
    bottom: ['└', '┴', '┘'],
};

const ASCII_BORDERS: Borders = Borders {
    h: '-',
    v: '|',
    top: ['+', '+', '+'],
    mid: ['+', '+', '+'],
    bottom: ['+', '+', '+'],
};

const HEADERS: [&str; 3] = ["Name", "Surname", "Age"];

/// Render the roster as a three-column table.
///
/// Column widths are fitted to content; the age column is right-aligned.
/// Borders use Unicode box drawing, or ASCII with `table.ascii = true`.
pub fn render_table(people: &[Person], settings: &TableSettings) {
    let widths = column_widths(people);
    let borders = if settings.ascii {
        &ASCII_BORDERS
    } else {
        &UNICODE_BORDERS
    };

    rule(&widths, borders.h, borders.top);
    header_row(&widths, borders.v);
    rule(&widths, borders.h, borders.mid);
    for person in people {
        row(
            &widths,
            borders.v,
            &person.name,
            &person.surname,
            &person.age.to_string(),
        );
    }
    rule(&widths, borders.h, borders.bottom);

    if people.is_empty() {
        detail(&"(empty)".dimmed());
    }
    if settings.show_count {
        let noun = if people.len() == 1 { "entry" } else { "entries" };
        detail(&format!("{} {}", people.len(), noun).dimmed());
    }
}

/// Widths of the three columns, fitted to headers and content.
fn column_widths(people: &[Person]) -> [usize; 3] {
    let mut widths = [HEADERS[0].len(), HEADERS[1].len(), HEADERS[2].len()];
    for person in people {
        widths[0] = widths[0].max(person.name.chars().count());
        widths[1] = widths[1].max(person.surname.chars().count());
        widths[2] = widths[2].max(person.age.to_string().chars().count());
    }
    widths
}

fn rule(widths: &[usize; 3], h: char, joints: [char; 3]) {
    let seg = |w: usize| h.to_string().repeat(w + 2);
    println!(
        "{}{}{}{}{}{}{}",
        joints[0],
        seg(widths[0]),
        joints[1],
        seg(widths[1]),
        joints[1],
        seg(widths[2]),
        joints[2]
    );
}

fn header_row(widths: &[usize; 3], v: char) {
    // Pad before colorizing: ANSI escapes would count toward the fmt width.
    let name = format!("{:<w$}", HEADERS[0], w = widths[0]);
    let surname = format!("{:<w$}", HEADERS[1], w = widths[1]);
    let age = format!("{:>w$}", HEADERS[2], w = widths[2]);
    println!(
        "{v} {} {v} {} {v} {} {v}",
        name.bold(),
        surname.bold(),
        age.bold()
    );
}

fn row(widths: &[usize; 3], v: char, name: &str, surname: &str, age: &str) {
    println!(
        "{v} {:<w0$} {v} {:<w1$} {v} {:>w2$} {v}",
        name,
        surname,
        age,
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
}
