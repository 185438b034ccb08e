//! Shared HTML fragments used across all pages.
//!
//! These are maud functions returning `Markup` for composition into
//! full pages. All dynamic content is escaped by maud.

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::store::Snippet;

/// Inline CSS for all pages.
///
/// Flat design. Hairline card outlines, spacing for hierarchy.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#0b7285;--accent-hover:#095c6b;--surface:#fff;--border:rgba(11,114,133,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:680px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
h1{font-size:1.5rem;letter-spacing:-.02em;margin-bottom:1rem}
.nav{display:flex;align-items:center;justify-content:space-between;width:100%;max-width:680px;margin-bottom:2rem}
.nav-title{font-size:1.25rem;font-weight:800;letter-spacing:-.02em;color:var(--fg)}
.nav-title:hover{text-decoration:none;color:var(--accent)}
.nav nav{display:flex;align-items:center;gap:1rem}
.nav button{background:var(--accent);color:#fff;border:none;border-radius:6px;padding:.45rem .9rem;font-size:.9rem;font-weight:600;cursor:pointer}
.nav button:hover{background:var(--accent-hover)}
.empty{color:var(--fg3)}
.card-list{display:flex;flex-direction:column;gap:.5rem}
.card{display:block;padding:1rem 1.25rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);color:var(--fg);transition:border-color .15s}
.card:hover{border-color:var(--accent);text-decoration:none}
.card-title{font-weight:600}
.card-meta{display:flex;gap:1rem;font-size:.8rem;color:var(--fg3);font-family:var(--mono)}
.snippet{padding:1.5rem;border:1px solid var(--border);border-radius:10px;background:var(--surface)}
.snippet-header{display:flex;align-items:baseline;justify-content:space-between;gap:1rem;margin-bottom:1rem}
.snippet-header h1{margin-bottom:0}
.snippet-id{font-family:var(--mono);color:var(--fg3);font-size:.85rem}
.snippet-content{white-space:pre-wrap;word-break:break-word;font-family:var(--mono);font-size:.95rem;line-height:1.7;background:var(--bg);border-radius:8px;padding:1rem}
.snippet-meta{display:flex;gap:1.25rem;flex-wrap:wrap;margin-top:1rem;font-size:.85rem;color:var(--fg3)}
.footer{margin-top:2rem;font-size:.85rem;color:var(--fg3)}
"#;

/// CSS for standalone error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#fafafa;color:#111;min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.75rem;letter-spacing:-.02em;margin-bottom:.5rem}
.error-page p{color:#555;margin-bottom:1.25rem}
.error-page a{color:#0b7285;text-decoration:none}
.error-page a:hover{text-decoration:underline}
"#;

/// Full HTML document shell: head, nav, main content, footer.
pub fn page_shell(title: &str, site_name: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - " (site_name) }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="nav" {
                    a class="nav-title" href="/" { (site_name) }
                    nav {
                        a href="/" { "Home" }
                        form method="post" action="/snippet/create" {
                            button type="submit" { "New snippet" }
                        }
                    }
                }
                main { (body) }
                footer class="footer" {
                    "Snippets expire automatically."
                }
            }
        }
    }
}

/// One snippet in the home-page list.
pub fn snippet_card(snippet: &Snippet) -> Markup {
    html! {
        a class="card" href={ "/snippet/view?id=" (snippet.id) } {
            div class="card-title" { (snippet.title) }
            div class="card-meta" {
                span { "#" (snippet.id) }
                span { (format_time(snippet.created)) }
            }
        }
    }
}

/// Human-readable UTC timestamp, e.g. "07 Aug 2026 at 14:03 UTC".
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%d %b %Y at %H:%M UTC").to_string()
}
