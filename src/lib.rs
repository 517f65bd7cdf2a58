pub mod external_call;
pub mod logging;
pub mod model;
pub mod provider;
pub mod session;
pub mod token;
pub mod tui;

mod tui_shell;
