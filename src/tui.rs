use anyhow::Result;

use crate::model::AppConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: AppConfig,
    /// Prefills the sign-in form.
    pub email: Option<String>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
