//! HTML rendering of a [`RenderedView`].
//!
//! The output is a self-contained document with inline CSS: sidebar,
//! report header, the view's blocks and a footer. It contains no
//! timestamps or random ids, so the same view always renders to the
//! same bytes.

use axum::http::StatusCode;
use dashboard_catalog::{DownloadAction, MenuOption, NoticeLevel, RenderedView, ViewBlock};

use crate::domain::config::PageConfig;

pub const SIDEBAR_HEADER: &str = "📁 Navegación";
pub const SIDEBAR_PROMPT: &str = "Selecciona una vista";
pub const REPORT_TITLE: &str = "Reporte de Tesis Doctoral";
pub const REPORT_SUBTITLE: &str = "Propensión Conductual al Ahorro y Sesgos Cognitivos";
pub const REPORT_NOTE: &str =
    "Esta versión integra los interactivos (Plotly HTML), imágenes y descargas de Excel.";

/// URL of the page for `option`.
pub fn view_href(option: MenuOption) -> String {
    format!("/views/{}", option.slug())
}

/// URL serving a static image.
pub fn image_href(filename: &str) -> String {
    format!("/artifacts/png/{}", urlencoding::encode(filename))
}

/// URL of a spreadsheet download.
pub fn download_href(filename: &str) -> String {
    format!("/downloads/{}", urlencoding::encode(filename))
}

/// Render the full page for a view.
pub fn render_page(page: &PageConfig, view: &RenderedView) -> String {
    let mut main = String::new();
    for block in &view.blocks {
        render_block(&mut main, block);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{icon}</text></svg>">
<style>{css}</style>
</head>
<body>
<nav class="sidebar">
<h2>{sidebar_header}</h2>
<p class="prompt">{sidebar_prompt}</p>
{menu}</nav>
<main>
<header>
<h1>{report_title}</h1>
<p><strong>{report_subtitle}</strong></p>
<blockquote>{report_note}</blockquote>
</header>
<section class="view" id="{slug}">
{main}</section>
<footer><small>{footer}</small></footer>
</main>
</body>
</html>
"#,
        title = esc(&page.title),
        icon = esc(&page.icon),
        css = STYLE,
        sidebar_header = esc(SIDEBAR_HEADER),
        sidebar_prompt = esc(SIDEBAR_PROMPT),
        menu = render_menu(view.option),
        report_title = esc(REPORT_TITLE),
        report_subtitle = esc(REPORT_SUBTITLE),
        report_note = esc(REPORT_NOTE),
        slug = esc(view.option.slug()),
        main = main,
        footer = esc(&page.footer),
    )
}

/// Sidebar list built from [`MenuOption::ALL`], current option marked.
fn render_menu(current: MenuOption) -> String {
    let mut out = String::from("<ul>\n");
    for option in MenuOption::ALL {
        if option == current {
            out.push_str(&format!(
                "<li><a class=\"selected\" aria-current=\"page\" href=\"{}\">{}</a></li>\n",
                esc(&view_href(option)),
                esc(option.label())
            ));
        } else {
            out.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                esc(&view_href(option)),
                esc(option.label())
            ));
        }
    }
    out.push_str("</ul>\n");
    out
}

fn render_block(out: &mut String, block: &ViewBlock) {
    match block {
        ViewBlock::Heading(text) => {
            out.push_str(&format!("<h2>{}</h2>\n", esc(text)));
        }
        ViewBlock::InteractiveDocument {
            filename,
            content,
            height,
        } => {
            out.push_str(&format!(
                "<iframe class=\"interactive\" title=\"{}\" height=\"{}\" scrolling=\"yes\" srcdoc=\"{}\"></iframe>\n",
                esc(filename),
                height.pixels(),
                esc(content)
            ));
        }
        ViewBlock::StaticImage { filename, caption } => {
            out.push_str("<figure>\n");
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                esc(&image_href(filename)),
                esc(caption.as_deref().unwrap_or(filename))
            ));
            if let Some(caption) = caption {
                out.push_str(&format!("<figcaption>{}</figcaption>\n", esc(caption)));
            }
            out.push_str("</figure>\n");
        }
        ViewBlock::Divider => out.push_str("<hr>\n"),
        ViewBlock::Notice { level, message } => {
            let role = match level {
                NoticeLevel::Info => "status",
                NoticeLevel::Warning | NoticeLevel::Error => "alert",
            };
            out.push_str(&format!(
                "<div class=\"notice notice-{}\" role=\"{}\">{}</div>\n",
                level.as_str(),
                role,
                esc(message)
            ));
        }
        ViewBlock::Download(action) => render_download(out, action),
    }
}

fn render_download(out: &mut String, action: &DownloadAction) {
    out.push_str(&format!(
        "<p><a class=\"download\" href=\"{}\" download=\"{}\" type=\"{}\">{}</a></p>\n",
        esc(&download_href(&action.filename)),
        esc(&action.filename),
        esc(&action.mime),
        esc(&action.label)
    ));
}

/// Minimal page for a request-level error.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let page = PageConfig::default();
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<main>
<h1>{code} {reason}</h1>
<div class="notice notice-error" role="alert">{message}</div>
<p><a href="/">{back}</a></p>
</main>
</body>
</html>
"#,
        title = esc(&page.title),
        css = STYLE,
        code = status.as_u16(),
        reason = esc(status.canonical_reason().unwrap_or("")),
        message = esc(message),
        back = esc(MenuOption::DEFAULT.label()),
    )
}

/// Escape text for HTML content and double- or single-quoted attributes.
pub fn esc<S: AsRef<str>>(s: S) -> String {
    let mut out = String::with_capacity(s.as_ref().len() + 8);
    for ch in s.as_ref().chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = r#"
body{margin:0;display:flex;font-family:system-ui,-apple-system,"Segoe UI",sans-serif;color:#262730;background:#fff}
.sidebar{width:18rem;min-height:100vh;padding:1.5rem 1rem;background:#f0f2f6;box-sizing:border-box;flex-shrink:0}
.sidebar h2{font-size:1.25rem;margin:0 0 .75rem}
.sidebar .prompt{font-size:.875rem;margin:0 0 .5rem}
.sidebar ul{list-style:none;margin:0;padding:0}
.sidebar li a{display:block;padding:.35rem .5rem;border-radius:.25rem;color:inherit;text-decoration:none}
.sidebar li a:hover{background:#e0e3ea}
.sidebar li a.selected{background:#ff4b4b;color:#fff}
main{flex:1;padding:2rem 3rem;max-width:1200px}
blockquote{margin:1rem 0;padding-left:1rem;border-left:.25rem solid #d0d3da;color:#555}
iframe.interactive{width:100%;border:0}
figure{margin:0}
figure img{width:100%;height:auto}
figcaption{font-size:.875rem;color:#808495;text-align:center}
hr{border:0;border-top:1px solid #e6e9ef;margin:1.5rem 0}
.notice{padding:1rem;border-radius:.5rem;margin:.75rem 0}
.notice-info{background:#e8f0fe;color:#0b4a8b}
.notice-warning{background:#fff8e1;color:#7a5a00}
.notice-error{background:#fdecea;color:#8b1a10}
a.download{display:inline-block;padding:.5rem 1rem;border:1px solid #d0d3da;border-radius:.5rem;color:inherit;text-decoration:none}
footer{margin-top:3rem;color:#808495}
"#;
