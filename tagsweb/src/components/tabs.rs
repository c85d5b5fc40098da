use std::fmt::Display;

use maud::{html, Markup};

/// The tabs at the top of the page, used to specify which one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tabs {
    Demo,
    Preview,
}

/// Returns the markup for the tab strip, with the content of the selected tab
/// shown in the panel below it.
pub fn tabs(selected_tab: Tabs, selected_tab_content: &Markup) -> Markup {
    html! {
        div role="tablist" class="tabs" {
            (tab(Tabs::Demo, selected_tab))
            (tab(Tabs::Preview, selected_tab))
        }
        div role="tabpanel" class="tab-content" {
            (selected_tab_content)
        }
    }
}

/// Creates a single tab.
fn tab(tab: Tabs, selected_tab: Tabs) -> Markup {
    if tab == selected_tab {
        html! {
            a role="tab" class="tab tab-active" aria-selected="true" href=(tab.href()) { (tab.to_string()) }
        }
    } else {
        html! {
            a role="tab" class="tab" href=(tab.href()) { (tab.to_string()) }
        }
    }
}

impl Display for Tabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Tabs::Demo => write!(f, "Demo"),
            Tabs::Preview => write!(f, "Preview"),
        }
    }
}

impl Tabs {
    /// Returns the href that a particular tab will route to.
    pub fn href(self) -> &'static str {
        match self {
            Tabs::Demo => "/",
            Tabs::Preview => "/preview",
        }
    }
}
