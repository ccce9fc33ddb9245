// Layout rendering: stored project → HTML page.
// Renderers are pure. Colors come in through `StyleTokens`; mode and theme name are
// never inspected here.

pub mod bold;
pub mod handlers;
pub mod minimal;
pub mod modern;

use crate::models::content::GeneratedContent;
use crate::models::project::Project;
use crate::theme::{resolve_theme, LayoutVariant, StyleTokens};

/// A rendered landing page, before it is wrapped in the preview document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub description: String,
    /// Layout markup. Every interpolated value is already HTML-escaped.
    pub body: String,
}

/// One page template.
pub trait LayoutRenderer: Send + Sync {
    fn render(
        &self,
        content: &GeneratedContent,
        industry: &str,
        audience: &str,
        tokens: &StyleTokens,
    ) -> Page;
}

pub fn renderer_for(layout: LayoutVariant) -> &'static dyn LayoutRenderer {
    match layout {
        LayoutVariant::Modern => &modern::ModernLayout,
        LayoutVariant::Minimal => &minimal::MinimalLayout,
        LayoutVariant::Bold => &bold::BoldLayout,
    }
}

/// Resolves the theme once and hands the tokens to the matching renderer.
pub fn render_project(project: &Project) -> Page {
    let layout = LayoutVariant::from_stored(&project.layout);
    let tokens = resolve_theme(layout, &project.color_theme, project.mode);
    renderer_for(layout).render(
        &project.content,
        &project.industry,
        &project.audience,
        &tokens,
    )
}

/// Address shown in the preview chrome, e.g. "Acme Labs" → `https://acmelabs.com`.
pub fn preview_site_url(business_name: &str) -> String {
    let host: String = business_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("https://{host}.com")
}

/// Wraps a rendered page in a complete HTML document with the preview address strip.
pub fn preview_document(page: &Page, site_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Preview</title>
<meta name="description" content="{description}">
</head>
<body style="margin:0">
<div class="preview-address" style="background:#1a1a2e;color:rgba(255,255,255,0.5);font:12px monospace;padding:8px 16px">{site_url}</div>
{body}
</body>
</html>"#,
        title = escape(&page.title),
        description = escape(&page.description),
        site_url = escape(site_url),
        body = page.body,
    )
}

/// Document served when a preview id does not resolve to a project.
pub fn not_found_document() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Project Not Found</title>
</head>
<body style="margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:#0f0c29;color:#ffffff;font-family:system-ui,sans-serif">
<div style="text-align:center">
<h1>Project not found</h1>
<p>This landing page does not exist. Generate a new one from the dashboard.</p>
</div>
</body>
</html>"#
        .to_string()
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<li>` items for `features`, in stored order.
pub(crate) fn feature_items<F>(features: &[String], mut item: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    features
        .iter()
        .enumerate()
        .map(|(i, feature)| item(i, escape(feature).as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
