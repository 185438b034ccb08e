//! HTML page rendering.
//!
//! Each page is a maud function taking the data it renders plus the
//! site name for the shared shell.

pub mod components;

use maud::{Markup, html};

use crate::store::Snippet;
use self::components::{format_time, page_shell, snippet_card};

/// Render the home page listing the latest snippets.
pub fn home_page(snippets: &[Snippet], site_name: &str) -> Markup {
    let body = html! {
        h1 { "Latest snippets" }
        @if snippets.is_empty() {
            p class="empty" { "There's nothing to see here yet. Create the first snippet." }
        } @else {
            div class="card-list" {
                @for snippet in snippets {
                    (snippet_card(snippet))
                }
            }
        }
    };

    page_shell("Home", site_name, body)
}

/// Render a single snippet page.
pub fn snippet_page(snippet: &Snippet, site_name: &str) -> Markup {
    let body = html! {
        article class="snippet" {
            header class="snippet-header" {
                h1 { (snippet.title) }
                span class="snippet-id" { "#" (snippet.id) }
            }
            pre class="snippet-content" { (snippet.content) }
            div class="snippet-meta" {
                span { "Created " (format_time(snippet.created)) }
                span { "Expires " (format_time(snippet.expires)) }
            }
        }
    };

    page_shell(&snippet.title, site_name, body)
}
