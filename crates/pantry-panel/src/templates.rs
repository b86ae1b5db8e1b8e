//! HTML building blocks for the panel.
//!
//! Plain `format!` templating over Tailwind classes. Everything here is a
//! pure function; dynamic text goes through [`escape`] before landing in
//! markup.

use crate::state::{Notice, Page};

/// Escape text for safe interpolation into HTML.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Pantry</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 min-h-screen">
    {nav}

    <main class="p-6 lg:p-8">
        <div class="max-w-6xl mx-auto">
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = escape(title),
        nav = nav_template(),
        content = content,
    )
}

fn nav_template() -> String {
    let links: String = Page::all()
        .iter()
        .map(|page| {
            let href = match page {
                Page::Dashboard => "/".to_string(),
                _ => format!("/{}", page.slug()),
            };
            format!(
                r#"<a href="{href}" class="px-3 py-2 rounded-lg text-sm font-medium text-emerald-100 hover:bg-emerald-700 hover:text-white">{title}</a>"#,
                title = page.title(),
            )
        })
        .collect();

    format!(
        r##"<nav class="bg-emerald-600 text-white px-4 py-3 sticky top-0 z-40 shadow-lg">
        <div class="max-w-6xl mx-auto flex items-center justify-between">
            <a href="/" class="text-lg font-semibold">Pantry</a>
            <div class="flex flex-wrap items-center gap-1">
                {links}
            </div>
        </div>
    </nav>"##
    )
}

/// Stats card component for the dashboard tiles.
pub fn stats_card(title: &str, value: &str) -> String {
    format!(
        r##"<div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <p class="text-sm text-gray-500">{title}</p>
            <p class="text-3xl font-bold text-gray-900 mt-1">{value}</p>
        </div>"##,
        title = escape(title),
        value = escape(value),
    )
}

/// Labeled input field.
pub fn input(name: &str, label: &str, input_type: &str, value: &str, required: bool) -> String {
    format!(
        r##"<div class="space-y-1">
            <label for="{name}" class="block text-sm font-medium text-gray-700">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" value="{value}"{step}{required}
                   class="w-full px-4 py-2 border border-gray-300 rounded-lg bg-white text-gray-900 focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500">
        </div>"##,
        label = escape(label),
        value = escape(value),
        step = if input_type == "number" { r#" step="any""# } else { "" },
        required = if required { " required" } else { "" },
    )
}

/// Table shell; the body rows arrive pre-rendered.
pub fn table(headers: &[&str], body_rows: &str) -> String {
    let headers_html: String = headers
        .iter()
        .map(|h| format!(r#"<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{h}</th>"#))
        .collect();

    format!(
        r##"<div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>{headers_html}</tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    {body_rows}
                </tbody>
            </table>
        </div>"##
    )
}

/// Modal shell around a form.
pub fn modal(title: &str, body: &str) -> String {
    format!(
        r##"<div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4">
            <div class="bg-white rounded-xl shadow-xl w-full max-w-lg p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">{title}</h2>
                {body}
            </div>
        </div>"##,
        title = escape(title),
    )
}

/// The blocking notice overlay. It sits above everything, including an
/// open modal, and offers nothing but its dismiss button.
pub fn notice_overlay(notice: &Notice) -> String {
    let tone = if notice.success {
        "text-emerald-700"
    } else {
        "text-red-700"
    };

    format!(
        r##"<div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/40 p-4">
            <div class="bg-white rounded-xl shadow-xl w-full max-w-md p-6 text-center">
                <p class="text-lg font-medium {tone}">{message}</p>
                <form method="post" action="/notice/dismiss" class="mt-4">
                    <button type="submit" class="bg-emerald-600 hover:bg-emerald-700 text-white px-6 py-2 rounded-lg font-medium">OK</button>
                </form>
            </div>
        </div>"##,
        message = escape(&notice.message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("Bread & Butter"), "Bread &amp; Butter");
    }

    #[test]
    fn layout_links_every_page() {
        let html = layout("Dashboard", "body");
        for page in Page::all() {
            assert!(html.contains(page.title()), "missing nav link: {}", page.title());
        }
    }

    #[test]
    fn notice_overlay_carries_the_dismiss_form() {
        let html = notice_overlay(&Notice::error("Error: boom"));
        assert!(html.contains("Error: boom"));
        assert!(html.contains(r#"action="/notice/dismiss""#));
    }
}
