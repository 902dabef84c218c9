//! Desktop shell: window configuration and the Dioxus UI.

pub mod ui;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use rollcall::domain::config::WindowConfig;
use rollcall::Client;

/// Stylesheet embedded into the webview head; no asset pipeline needed.
const STYLESHEET: &str = include_str!("style.css");

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Rollcall".to_owned(), width: 960.0, height: 720.0 }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Applies the window section of the app configuration.
    #[must_use]
    pub fn with_window(self, window: &WindowConfig) -> Self {
        self.with_title(window.title.clone()).with_size(window.width, window.height)
    }

    /// The entry point for launching the app.
    ///
    /// The [`Client`] lands in the root context so any component can reach
    /// the submitter and the scan feed via `use_context`.
    pub fn launch(self, root: fn() -> Element, client: Client) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let head = format!(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>{STYLESHEET}</style>"#
        );
        let cfg = Config::default().with_window(window).with_custom_head(head);

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(client.clone()))
            .launch(root);
    }
}
