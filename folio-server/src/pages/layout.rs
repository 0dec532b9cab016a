//! Shared HTML scaffolding for server-rendered pages.

use folio_core::FieldErrors;

use axum::response::Html;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Wrap page body in the shared document shell.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }}
.container {{ max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }}
.card {{ background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 1.5rem; }}
label {{ display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.25rem; }}
input, textarea {{ width: 100%; box-sizing: border-box; padding: 0.5rem 0.75rem; border: 1px solid #cbd5e1; border-radius: 0.5rem; margin-bottom: 1rem; font: inherit; }}
button {{ background: #2563eb; color: #fff; border: 0; border-radius: 0.5rem; padding: 0.6rem 1.2rem; font: inherit; cursor: pointer; }}
.field-error {{ color: #dc2626; font-size: 0.8rem; margin: -0.75rem 0 1rem; }}
.banner-error {{ border: 1px solid #fca5a5; background: #fef2f2; color: #b91c1c; border-radius: 0.5rem; padding: 0.75rem 1rem; margin-bottom: 1rem; }}
.banner-success {{ border: 1px solid #86efac; background: #f0fdf4; color: #15803d; border-radius: 0.5rem; padding: 0.75rem 1rem; margin-bottom: 1rem; }}
.empty-state {{ text-align: center; border: 1px dashed #cbd5e1; border-radius: 0.75rem; padding: 3rem 1rem; color: #64748b; }}
.skill {{ display: inline-block; background: #f1f5f9; border-radius: 999px; padding: 0.15rem 0.6rem; font-size: 0.75rem; margin: 0 0.25rem 0.25rem 0; }}
.testimonial {{ background: #eff6ff; border-radius: 0.5rem; padding: 0.75rem; font-style: italic; font-size: 0.9rem; }}
.muted {{ color: #64748b; }}
</style>
</head>
<body>
<div class="container">
{body}
</div>
</body>
</html>
"#
    ))
}

/// Render the error message for a field path, if any.
pub fn field_error(errors: Option<&FieldErrors>, path: &str) -> String {
    match errors.and_then(|e| e.first_for_field(path)) {
        Some(message) => format!(r#"<p class="field-error">{}</p>"#, escape_html(message)),
        None => String::new(),
    }
}
