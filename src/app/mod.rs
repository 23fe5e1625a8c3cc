//! Application state and lifecycle management

use std::sync::Arc;

use anyhow::Result;
use gpui::{actions, AppContext, Application, KeyBinding, WindowOptions};

use crate::api::RestMailApi;
use crate::config::Config;
use crate::services::MailboxService;
use crate::ui::MainWindow;

mod events;
mod state;

pub use events::{ComposeEvent, DetailEvent, ListEvent, SidebarEvent};
pub use state::InboxState;

// Define application actions
actions!(cusana, [Quit, Compose, Dismiss]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run() -> Result<()> {
        let config = Config::from_env()?;

        // Network requests run on a dedicated tokio runtime; the UI thread
        // awaits their join handles through gpui's executor.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();

        let service = Arc::new(MailboxService::new(Arc::new(RestMailApi::new(&config))));

        Application::new().run(move |cx: &mut gpui::App| {
            Self::register_keybindings(cx);

            cx.on_action(|_: &Quit, cx| cx.quit());

            cx.open_window(WindowOptions::default(), move |window, cx| {
                cx.new(|cx| MainWindow::new(service, handle, window, cx))
            })
            .expect("Failed to open window");
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            // Quit
            KeyBinding::new("cmd-q", Quit, None),
            // Compose a new message
            KeyBinding::new("cmd-n", Compose, None),
            // Dismiss the compose modal
            KeyBinding::new("escape", Dismiss, None),
        ]);
    }
}
