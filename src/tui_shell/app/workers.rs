use super::*;

impl App {
    pub(in crate::tui_shell) fn start_sign_in(&mut self) {
        if self.signing_in {
            return;
        }
        let email = self.email.buf.trim().to_string();
        let password = self.password.buf.clone();
        if email.is_empty() || password.is_empty() {
            self.push_error("email and password are required");
            return;
        }

        self.signing_in = true;
        self.push_info(format!("signing in as {}...", email));

        self.provider
            .send(ProviderCommand::SignIn { email, password });
    }

    /// Fire-and-forget session fetch.
    pub(in crate::tui_shell) fn load_session(&mut self, force: bool) {
        let req = self.panel.begin_load(force);
        tracing::debug!(seq = req.seq, force, "session load issued");
        self.provider.send(ProviderCommand::Load(req));
    }

    pub(in crate::tui_shell) fn start_call(&mut self) {
        if self.calling {
            return;
        }
        self.calling = true;
        self.call_result.clear();

        let call = ExternalCall::new(self.url.buf.clone(), self.bearer.buf.clone());
        let client = self.http.clone();
        let tx = self.call_tx.clone();
        std::thread::spawn(move || {
            let _ = tx.send(call.run(&client));
        });
    }

    /// Applies every worker result that has arrived, then fires a due refresh.
    pub(in crate::tui_shell) fn drain_workers(&mut self) {
        while let Some(event) = self.provider.try_recv() {
            match event {
                ProviderEvent::SignedIn { email, result } => self.finish_sign_in(email, result),
                ProviderEvent::Loaded(outcome) => self.finish_load(outcome),
                ProviderEvent::SignedOut => tracing::debug!("provider signed out"),
            }
        }

        while let Ok(text) = self.call_rx.try_recv() {
            self.calling = false;
            self.call_result = text;
        }

        if self.screen == Screen::Session && self.panel.take_due_refresh(Instant::now()) {
            self.push_info("access token expires soon; refreshing");
            self.load_session(true);
        }
    }

    fn finish_sign_in(&mut self, email: String, res: Result<()>) {
        self.signing_in = false;
        match res {
            Ok(()) => {
                self.password.clear();
                self.signed_in_as = Some(email.clone());
                self.screen = Screen::Session;
                self.push_info(format!("signed in as {}", email));
                self.load_session(false);
            }
            Err(err) => {
                self.password.clear();
                self.sign_in_field = SignInField::Password;
                self.push_error(format!("{:#}", err));
            }
        }
    }

    fn finish_load(&mut self, outcome: LoadOutcome) {
        let force = outcome.force;
        let failed = outcome.result.is_err();
        if !self
            .panel
            .apply(outcome, session::now_unix_ms(), Instant::now())
        {
            return;
        }
        if failed {
            let msg = self.panel.last_error().unwrap_or("session fetch failed").to_string();
            self.push_error(msg);
        } else if force {
            self.push_info("tokens refreshed");
        }
    }

    /// Clears the panel now; the provider drops its tokens once any
    /// request ahead of it finishes.
    pub(in crate::tui_shell) fn sign_out(&mut self) {
        self.provider.send(ProviderCommand::SignOut);
        self.panel.clear();
        self.signed_in_as = None;
        self.editing = None;
        self.scroll = 0;
        self.screen = Screen::SignIn;
        self.sign_in_field = SignInField::Email;
        self.push_info("signed out");
    }
}
