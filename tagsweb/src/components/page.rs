use maud::{html, Markup, DOCTYPE};

use super::tabs::{tabs, Tabs};

/// Takes 'content' and wraps the standard header and the tab strip around it,
/// with `selected_tab` marked as the current one.
pub fn page(selected_tab: Tabs, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html class="no-js" lang="en" {
            head {
                meta charset="utf-8";
                title { "Tags - " (selected_tab.to_string()) }
                link href="/assets/tags.css" rel="stylesheet" type="text/css";
            }
            body {
                (tabs(selected_tab, &content))
            }
        }
    }
}
