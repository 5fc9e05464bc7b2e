use ansi_term::Colour;

use crate::{
    habit::day::{DayRecord, DaySet},
    utils::time::day_label,
};

const TITLE: &str = "Habit Tracker";
const CELLS_PER_ROW: usize = 7;

/// How done days are told apart from the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Green cells for done days, gray for the rest.
    Color,
    /// Done days are bracketed, for terminals without colors.
    Plain,
}

/// Renders the whole screen: title, streak and the grid of days.
pub fn render_screen(days: &DaySet, streak: usize, style: RenderStyle) -> String {
    let mut screen = format!("{TITLE}\n\nCurrent Streak: {streak}\n\n");
    screen.push_str(&render_grid(days, style));
    screen
}

pub fn render_grid(days: &DaySet, style: RenderStyle) -> String {
    days.days()
        .chunks(CELLS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|v| render_cell(v, style))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .fold(String::new(), |mut grid, row| {
            grid.push_str(&row);
            grid.push('\n');
            grid
        })
}

fn render_cell(record: &DayRecord, style: RenderStyle) -> String {
    let label = day_label(record.date);
    match style {
        RenderStyle::Color => {
            let background = if record.is_done {
                Colour::Green
            } else {
                Colour::Fixed(244)
            };
            Colour::White
                .on(background)
                .paint(format!(" {label:>2} "))
                .to_string()
        }
        RenderStyle::Plain if record.is_done => format!("[{label:>2}]"),
        RenderStyle::Plain => format!(" {label:>2} "),
    }
}
