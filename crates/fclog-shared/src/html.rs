//! HTML report rendering shared by all stages.
//!
//! Every cell is escaped; the Description column keeps internal line
//! breaks inside a scrollable preformatted block.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::FclogError;
use crate::severity::Severity;

/// Column whose cells are rendered preformatted (man text is multi-line).
const PRE_COLUMN: &str = "Description";

/// Column driving the row class when severity shading is on.
const SEVERITY_COLUMN: &str = "Severity";

/// Rendering options for one report page.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Add a WARNING/ERROR row class with background shading.
    pub shade_severity: bool,
}

/// Escape the characters that matter inside table cells.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one report page as a single HTML document.
pub fn render_report(
    title: &str,
    columns: &[String],
    rows: &[Vec<String>],
    options: RenderOptions,
) -> String {
    let mut page = String::new();
    page.push_str("<html><head><meta charset='UTF-8'>\n");
    page.push_str(&format!("<title>{}</title>\n", escape(title)));
    page.push_str("<style>\n");
    page.push_str("body { font-family: Arial, sans-serif; }\n");
    page.push_str("table { border-collapse: collapse; width: 100%; }\n");
    page.push_str("th, td { border: 1px solid #888; padding: 6px; vertical-align: top; }\n");
    page.push_str("th { background-color: #f0f0f0; }\n");
    page.push_str(".WARNING { background-color: #fff6cc; }\n");
    page.push_str(".ERROR { background-color: #ffd6d6; }\n");
    page.push_str("pre { white-space: pre-wrap; max-height: 320px; overflow-y: auto; }\n");
    page.push_str("</style></head><body>\n");

    page.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    page.push_str("<table>\n<tr>");
    for column in columns {
        page.push_str(&format!("<th>{}</th>", escape(column)));
    }
    page.push_str("</tr>\n");

    let severity_idx = columns.iter().position(|c| c == SEVERITY_COLUMN);
    let pre_idx = columns.iter().position(|c| c == PRE_COLUMN);

    for row in rows {
        let class = if options.shade_severity {
            severity_idx
                .and_then(|idx| row.get(idx))
                .and_then(|cell| Severity::from_cell(cell))
                .map(|severity| severity.as_class())
        } else {
            None
        };
        match class {
            Some(class) => page.push_str(&format!("<tr class='{class}'>")),
            None => page.push_str("<tr>"),
        }

        for (idx, cell) in row.iter().enumerate() {
            if Some(idx) == pre_idx {
                page.push_str(&format!("<td><pre>{}</pre></td>", escape(cell)));
            } else {
                page.push_str(&format!("<td>{}</td>", escape(cell)));
            }
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</table>\n");
    page.push_str(&format!(
        "<p>Generated {}</p>\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    page.push_str("</body></html>\n");
    page
}

/// Render and write a report page next to its CSV.
pub fn write_report(
    path: &Path,
    title: &str,
    columns: &[String],
    rows: &[Vec<String>],
    options: RenderOptions,
) -> Result<(), FclogError> {
    fs::write(path, render_report(title, columns, rows, options))?;
    Ok(())
}
