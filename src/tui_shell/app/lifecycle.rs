use super::*;

use super::state::StatusEntry;

impl App {
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let provider = CognitoProvider::new(opts.config.auth.clone())
            .context("configure identity provider")?;
        tracing::info!(endpoint = provider.endpoint(), "session inspector started");

        let http = external_call::build_client()?;
        let mut app = App::new(opts.config, Box::new(provider), http);
        if let Some(email) = opts.email {
            app.email.set(email);
            app.sign_in_field = SignInField::Password;
        }
        Ok(app)
    }

    pub(in crate::tui_shell) fn new(
        config: AppConfig,
        provider: Box<dyn SessionProvider>,
        http: reqwest::blocking::Client,
    ) -> Self {
        let (call_tx, call_rx) = channel();

        let mut url = Input::default();
        url.set(config.external_api_url.clone());

        App {
            config,
            provider: ProviderWorker::spawn(provider),
            http,
            screen: Screen::SignIn,
            quit: false,
            email: Input::default(),
            password: Input::masked(),
            sign_in_field: SignInField::Email,
            signing_in: false,
            signed_in_as: None,
            panel: SessionPanel::new(),
            scroll: 0,
            url,
            bearer: Input::default(),
            editing: None,
            calling: false,
            call_result: String::new(),
            status: None,
            call_tx,
            call_rx,
        }
    }

    pub(in crate::tui_shell) fn push_info(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text.into());
    }

    pub(in crate::tui_shell) fn push_error(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Error, text.into());
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(StatusEntry {
            ts: super::render::now_hms(),
            kind,
            text,
        });
    }
}
