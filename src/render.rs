//! Presentation - turns an evaluation into a checklist or a condensed message.
//!
//! The view model carries only what the embedding UI needs to paint: rows,
//! text, valid/invalid state, classes and colors. [`Rendered::to_html`]
//! produces plain markup for hosts that just want a string.

use crate::config::{Appearance, ChecklistProps};
use crate::engine::{EvaluationResult, condensed_message};
use crate::rule::RuleName;

const VALID_ICON_PATH: &str = "M432 64l-240 240-112-112-80 80 192 192 320-320z";
const INVALID_ICON_PATH: &str = concat!(
    "M507.331 411.33c-0.002-0.002-0.004-0.004-0.006-0.005l-155.322-155.325 155.32",
    "2-155.325c0.002-0.002 0.004-0.003 0.006-0.005 1.672-1.673 2.881-3.627 3.656-",
    "5.708 2.123-5.688 0.912-12.341-3.662-16.915l-73.373-73.373c-4.574-4.573-11.2",
    "25-5.783-16.914-3.66-2.080 0.775-4.035 1.984-5.709 3.655 0 0.002-0.002 0.003",
    "-0.004 0.005l-155.324 155.326-155.324-155.325c-0.002-0.002-0.003-0.003-0.005",
    "-0.005-1.673-1.671-3.627-2.88-5.707-3.655-5.69-2.124-12.341-0.913-16.915 3.6",
    "6l-73.374 73.374c-4.574 4.574-5.784 11.226-3.661 16.914 0.776 2.080 1.985 4.",
    "036 3.656 5.708 0.002 0.001 0.003 0.003 0.005 0.005l155.325 155.324-155.325 ",
    "155.326c-0.001 0.002-0.003 0.003-0.004 0.005-1.671 1.673-2.88 3.627-3.657 5.",
    "707-2.124 5.688-0.913 12.341 3.661 16.915l73.374 73.373c4.575 4.574 11.226 5",
    ".784 16.915 3.661 2.080-0.776 4.035-1.985 5.708-3.656 0.001-0.002 0.003-0.00",
    "3 0.005-0.005l155.324-155.325 155.324 155.325c0.002 0.001 0.004 0.003 0.006 ",
    "0.004 1.674 1.672 3.627 2.881 5.707 3.657 5.689 2.123 12.342 0.913 16.914-3.",
    "661l73.373-73.374c4.574-4.574 5.785-11.227 3.662-16.915-0.776-2.080-1.985-4.",
    "034-3.657-5.707z",
);

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Checklist(ChecklistView),
    Message(MessageView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistView {
    pub class_name: Option<String>,
    /// Extra inline style, applied after the list's own.
    pub style: Option<String>,
    pub rows: Vec<RuleRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleRow {
    pub rule: RuleName,
    pub valid: bool,
    pub message: String,
    pub class_name: String,
    pub icon: Option<RowIcon>,
    pub text_color: Option<String>,
    pub opacity: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIcon {
    /// Built-in check or cross. `rtl` moves the margin to the left side.
    Builtin { size: u32, fill: String, rtl: bool },
    /// Caller supplied markup, inserted verbatim.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub class_name: Option<String>,
    /// Extra inline style, applied after the block's own.
    pub style: Option<String>,
    pub color: String,
    pub text: Option<String>,
}

/// Container class, with `rtl` appended when the layout is mirrored.
fn container_class(appearance: &Appearance) -> Option<String> {
    match (&appearance.class_name, appearance.rtl) {
        (Some(class), true) => Some(format!("{} rtl", class)),
        (None, true) => Some("rtl".to_string()),
        (class, false) => class.clone(),
    }
}

fn rule_row(rule: RuleName, result: &EvaluationResult, appearance: &Appearance) -> RuleRow {
    let outcome = result.outcome(rule);
    let valid = outcome.valid;
    let state = if valid { "valid" } else { "invalid" };

    let icon = if appearance.hide_icon {
        None
    } else if let Some(custom) = &appearance.icon_components {
        Some(RowIcon::Custom(if valid {
            custom.valid_icon.clone()
        } else {
            custom.invalid_icon.clone()
        }))
    } else {
        Some(RowIcon::Builtin {
            size: appearance.icon_size,
            fill: if valid {
                appearance.valid_color.clone()
            } else {
                appearance.invalid_color.clone()
            },
            rtl: appearance.rtl,
        })
    };

    let text_color = if valid {
        appearance.valid_text_color.clone()
    } else {
        appearance.invalid_text_color.clone()
    };

    let opacity = match (valid, &appearance.invalid_text_color) {
        (true, _) => Some(1.0),
        (false, None) => Some(0.5),
        (false, Some(_)) => None,
    };

    RuleRow {
        rule,
        valid,
        message: outcome.message.clone(),
        class_name: match &appearance.item_class_name {
            Some(item) => format!("{} {}", item, state),
            None => state.to_string(),
        },
        icon,
        text_color,
        opacity,
    }
}

/// Renders `result` according to the props' appearance.
pub fn render(result: &EvaluationResult, props: &ChecklistProps) -> Rendered {
    let appearance = &props.appearance;

    if appearance.render_as_messages_only {
        return Rendered::Message(MessageView {
            class_name: container_class(appearance),
            style: appearance.style.clone(),
            color: appearance.message_only_color.clone(),
            text: condensed_message(result, &appearance.message_only_prefix),
        });
    }

    Rendered::Checklist(ChecklistView {
        class_name: container_class(appearance),
        style: appearance.style.clone(),
        rows: result
            .enabled_rules
            .iter()
            .map(|rule| rule_row(*rule, result, appearance))
            .collect(),
    })
}

impl Rendered {
    /// Visible text: row messages separated by newlines, or the condensed message.
    pub fn text(&self) -> String {
        match self {
            Rendered::Checklist(view) => view
                .rows
                .iter()
                .map(|row| row.message.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Rendered::Message(view) => view.text.clone().unwrap_or_default(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            Rendered::Checklist(view) => {
                out.push_str("<ul");
                push_class(&mut out, view.class_name.as_deref());
                push_style(&mut out, "margin:0;padding:0", view.style.as_deref());
                out.push('>');
                for row in &view.rows {
                    push_row(&mut out, row);
                }
                out.push_str("</ul>");
            }
            Rendered::Message(view) => {
                out.push_str("<div");
                push_class(&mut out, view.class_name.as_deref());
                let base = format!(
                    "color:{};font-size:0.85rem;padding:4px 0",
                    escape(&view.color)
                );
                push_style(&mut out, &base, view.style.as_deref());
                out.push('>');
                if let Some(text) = &view.text {
                    out.push_str(&escape(text));
                }
                out.push_str("</div>");
            }
        }
        out
    }
}

fn push_class(out: &mut String, class_name: Option<&str>) {
    if let Some(class) = class_name {
        out.push_str(&format!(" class=\"{}\"", escape(class)));
    }
}

/// Writes a `style` attribute; caller declarations come last so they win.
fn push_style(out: &mut String, base: &str, extra: Option<&str>) {
    out.push_str(" style=\"");
    out.push_str(base);
    if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
        out.push(';');
        out.push_str(&escape(extra.trim_start_matches(';')));
    }
    out.push('"');
}

fn push_row(out: &mut String, row: &RuleRow) {
    out.push_str(&format!(
        "<li class=\"{}\" style=\"{}\">",
        escape(&row.class_name),
        "list-style-type:none;display:flex;align-items:center;margin:2px 0"
    ));

    match &row.icon {
        Some(RowIcon::Builtin { size, fill, rtl }) => {
            let (right, left) = if *rtl { (0, 5) } else { (5, 0) };
            let path = if row.valid {
                VALID_ICON_PATH
            } else {
                INVALID_ICON_PATH
            };
            out.push_str(&format!(
                "<svg class=\"checklist-icon\" width=\"{size}\" height=\"{size}\" \
                 viewBox=\"0 0 512 512\" style=\"margin-right:{right}px;margin-left:{left}px\">\
                 <path fill=\"{}\" d=\"{path}\"/></svg>",
                escape(fill),
            ));
        }
        Some(RowIcon::Custom(markup)) => out.push_str(markup),
        None => {}
    }

    out.push_str("<span style=\"padding-top:2px;flex:1");
    if let Some(opacity) = row.opacity {
        out.push_str(&format!(";opacity:{}", opacity));
    }
    if let Some(color) = &row.text_color {
        out.push_str(&format!(";color:{}", escape(color)));
    }
    out.push_str(&format!("\">{}</span></li>", escape(&row.message)));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
