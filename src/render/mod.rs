// Terminal rendering of the converter form
// Layout is fixed; every color, corner, spacing and button choice comes from the Theme

use crate::form::ConverterForm;
use crate::theme::{ButtonStyle, Color, Theme};
use colored::Colorize;

pub const TITLE: &str = "Unit Converter";
pub const PLACEHOLDER: &str = "Enter value";
pub const BUTTON_LABEL: &str = "Convert";

/// Width of the input box and button, in cells
const CONTENT_WIDTH: usize = 32;

/// Font sizes at or above this render bold
const BOLD_FONT_SIZE: u16 = 24;

/// Render with 24-bit terminal colors
pub fn render_form(form: &ConverterForm, theme: &Theme) -> String {
    paint_lines(&layout(form, theme), true)
}

/// Same layout, no escape codes
pub fn render_plain(form: &ConverterForm, theme: &Theme) -> String {
    paint_lines(&layout(form, theme), false)
}

#[derive(Debug, Clone)]
struct Segment {
    text: String,
    fg: Color,
    bg: Color,
    bold: bool,
}

type Line = Vec<Segment>;

/// Points to terminal cells, 10pt per cell
fn cells(points: u16) -> usize {
    (usize::from(points) + 5) / 10
}

struct Corners {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

fn corners(radius: u16) -> Corners {
    if radius == 0 {
        Corners {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
        }
    } else {
        Corners {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
        }
    }
}

fn layout(form: &ConverterForm, theme: &Theme) -> Vec<Line> {
    let palette = &theme.palette;
    let margin = cells(theme.spacing.padding);
    let gap = cells(theme.spacing.gap);
    let total_width = margin * 2 + CONTENT_WIDTH;
    let corner = corners(theme.radius);

    let seg = |text: String, fg: Color, bg: Color, bold: bool| Segment { text, fg, bg, bold };
    let plain = |text: String| seg(text, palette.text, palette.background, false);

    // Pads every line to the card width on the background color
    let framed = |mut body: Vec<Segment>| -> Line {
        let used: usize = body.iter().map(|s| s.text.chars().count()).sum();
        let mut line = vec![plain(" ".repeat(margin))];
        line.append(&mut body);
        let filler = total_width.saturating_sub(margin + used);
        line.push(plain(" ".repeat(filler)));
        line
    };
    let blank = || framed(Vec::new());

    let mut lines: Vec<Line> = Vec::new();
    lines.extend((0..margin.min(2)).map(|_| blank()));

    // Title
    lines.push(framed(vec![seg(
        center(TITLE, CONTENT_WIDTH),
        palette.title,
        palette.background,
        theme.font.title >= BOLD_FONT_SIZE,
    )]));
    lines.extend((0..gap).map(|_| blank()));

    // Input box
    let inner = CONTENT_WIDTH - 2;
    let pad = cells(theme.spacing.input_padding).min(inner / 4);
    let (shown, shown_color) = if form.value().is_empty() {
        (PLACEHOLDER.to_string(), palette.placeholder)
    } else {
        (truncate(form.value(), inner - pad * 2), palette.text)
    };
    let shown_len = shown.chars().count();
    let border = |text: String| seg(text, palette.border, palette.input_background, false);
    lines.push(framed(vec![border(format!(
        "{}{}{}",
        corner.top_left,
        "─".repeat(inner),
        corner.top_right
    ))]));
    lines.push(framed(vec![
        border("│".to_string()),
        seg(" ".repeat(pad), shown_color, palette.input_background, false),
        seg(
            shown,
            shown_color,
            palette.input_background,
            theme.font.input >= BOLD_FONT_SIZE,
        ),
        seg(
            " ".repeat(inner.saturating_sub(pad + shown_len)),
            shown_color,
            palette.input_background,
            false,
        ),
        border("│".to_string()),
    ]));
    lines.push(framed(vec![border(format!(
        "{}{}{}",
        corner.bottom_left,
        "─".repeat(inner),
        corner.bottom_right
    ))]));
    lines.extend((0..gap).map(|_| blank()));

    // Unit pickers
    let picker_width = (CONTENT_WIDTH - 4) / 2;
    let picker = |label: &str| {
        seg(
            format!(" {:<width$}▾", label, width = picker_width - 2),
            palette.text,
            palette.picker_background,
            false,
        )
    };
    lines.push(framed(vec![
        picker(form.from_unit().name()),
        seg(
            " → ".to_string(),
            palette.text,
            palette.background,
            theme.font.arrow >= BOLD_FONT_SIZE,
        ),
        picker(form.to_unit().name()),
    ]));
    lines.extend((0..gap).map(|_| blank()));

    // Convert button
    match theme.button {
        ButtonStyle::Filled => {
            lines.push(framed(vec![seg(
                center(BUTTON_LABEL, CONTENT_WIDTH),
                palette.button_text,
                palette.accent,
                true,
            )]));
        }
        ButtonStyle::Outlined => {
            let outline = |text: String| seg(text, palette.accent, palette.background, false);
            lines.push(framed(vec![outline(format!(
                "{}{}{}",
                corner.top_left,
                "─".repeat(inner),
                corner.top_right
            ))]));
            lines.push(framed(vec![
                outline("│".to_string()),
                seg(
                    center(BUTTON_LABEL, inner),
                    palette.button_text,
                    palette.background,
                    true,
                ),
                outline("│".to_string()),
            ]));
            lines.push(framed(vec![outline(format!(
                "{}{}{}",
                corner.bottom_left,
                "─".repeat(inner),
                corner.bottom_right
            ))]));
        }
    }
    lines.extend((0..gap).map(|_| blank()));

    // Result
    lines.push(framed(vec![seg(
        center(form.result(), CONTENT_WIDTH),
        palette.result,
        palette.background,
        theme.font.result >= BOLD_FONT_SIZE,
    )]));
    lines.extend((0..margin.min(2)).map(|_| blank()));

    lines
}

fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut kept: String = text.chars().take(width.saturating_sub(1)).collect();
    kept.push('…');
    kept
}

fn paint_lines(lines: &[Line], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        for segment in line {
            if color {
                let mut painted = segment
                    .text
                    .truecolor(segment.fg.r, segment.fg.g, segment.fg.b)
                    .on_truecolor(segment.bg.r, segment.bg.g, segment.bg.b);
                if segment.bold {
                    painted = painted.bold();
                }
                out.push_str(&painted.to_string());
            } else {
                out.push_str(&segment.text);
            }
        }
        out.push('\n');
    }
    out
}
