use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::model::{AuthSession, FetchOptions, SessionTokens};
use crate::provider::SessionProvider;

#[derive(Default)]
struct Calls {
    fetches: Vec<bool>,
    signed_out: bool,
}

struct FakeProvider {
    tokens: SessionTokens,
    signed_in: bool,
    calls: Arc<Mutex<Calls>>,
    // When set, the next fetch waits for a message on it.
    gate: Arc<Mutex<Option<Receiver<()>>>>,
}

impl SessionProvider for FakeProvider {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<()> {
        if password != "pw" {
            anyhow::bail!("NotAuthorizedException: Incorrect username or password.");
        }
        assert_eq!(email, "a@example.com");
        self.signed_in = true;
        Ok(())
    }

    fn fetch_session(&mut self, opts: FetchOptions) -> Result<AuthSession> {
        let held = self.gate.lock().expect("gate lock").take();
        if let Some(release) = held {
            let _ = release.recv();
        }
        self.calls
            .lock()
            .expect("calls lock")
            .fetches
            .push(opts.force_refresh);
        Ok(AuthSession {
            tokens: self.signed_in.then(|| self.tokens.clone()),
        })
    }

    fn sign_out(&mut self) {
        self.signed_in = false;
        self.calls.lock().expect("calls lock").signed_out = true;
    }
}

fn jwt(payload: serde_json::Value) -> String {
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

struct Harness {
    calls: Arc<Mutex<Calls>>,
    gate: Arc<Mutex<Option<Receiver<()>>>>,
}

impl Harness {
    fn fetches(&self) -> Vec<bool> {
        self.calls.lock().expect("calls lock").fetches.clone()
    }

    fn signed_out(&self) -> bool {
        self.calls.lock().expect("calls lock").signed_out
    }

    /// Makes the next fetch block until the returned sender fires or drops.
    fn hold_next_fetch(&self) -> mpsc::Sender<()> {
        let (tx, rx) = mpsc::channel();
        *self.gate.lock().expect("gate lock") = Some(rx);
        tx
    }
}

fn test_app() -> (App, Harness) {
    let calls = Arc::new(Mutex::new(Calls::default()));
    let gate = Arc::new(Mutex::new(None));
    let exp = time::OffsetDateTime::now_utc().unix_timestamp() + 3600;
    let provider = FakeProvider {
        tokens: SessionTokens {
            access_token: jwt(serde_json::json!({"exp": exp, "token_use": "access"})),
            id_token: Some(jwt(serde_json::json!({"email": "a@example.com"}))),
        },
        signed_in: false,
        calls: calls.clone(),
        gate: gate.clone(),
    };
    let config = AppConfig::new(
        Some("us-east-1_test".to_string()),
        Some("client".to_string()),
        None,
        Some("http://127.0.0.1:9/never".to_string()),
        None,
    );
    let http = external_call::build_client().expect("client");
    (
        App::new(config, Box::new(provider), http),
        Harness { calls, gate },
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn wait_until(app: &mut App, mut pred: impl FnMut(&App) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        app.drain_workers();
        if pred(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("condition not reached in time");
}

fn signed_in_app() -> (App, Harness) {
    let (mut app, calls) = test_app();
    type_text(&mut app, "a@example.com");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "pw");
    app.handle_key(key(KeyCode::Enter));
    wait_until(&mut app, |a| a.panel.access_token().is_some());
    (app, calls)
}

#[test]
fn sign_in_loads_session_once() {
    let (app, calls) = signed_in_app();
    assert_eq!(app.screen, Screen::Session);
    assert_eq!(app.signed_in_as.as_deref(), Some("a@example.com"));
    assert!(app.password.buf.is_empty());
    assert!(app.panel.scheduled_refresh().is_some());
    assert_eq!(calls.fetches(), vec![false]);
}

#[test]
fn wrong_password_stays_on_sign_in() {
    let (mut app, _calls) = test_app();
    type_text(&mut app, "a@example.com");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "nope");
    app.handle_key(key(KeyCode::Enter));
    wait_until(&mut app, |a| !a.signing_in);

    assert_eq!(app.screen, Screen::SignIn);
    let status = app.status.as_ref().expect("status");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("NotAuthorizedException"));
}

#[test]
fn force_refresh_key_requests_forced_fetch() {
    let (mut app, calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('f')));
    wait_until(&mut app, |a| !a.panel.is_loading());
    app.handle_key(key(KeyCode::Char('r')));
    wait_until(&mut app, |a| !a.panel.is_loading());
    assert_eq!(
        calls.fetches(),
        vec![false, true, false]
    );
}

#[test]
fn id_token_can_be_used_as_bearer_and_cleared() {
    let (mut app, _calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('i')));
    assert_eq!(Some(app.bearer.buf.as_str()), app.panel.id_token());
    app.handle_key(key(KeyCode::Char('x')));
    assert!(app.bearer.buf.is_empty());
}

#[test]
fn editing_url_captures_command_letters() {
    let (mut app, _calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('u')));
    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    type_text(&mut app, "http://quit.test/");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.url.buf, "http://quit.test/");
    assert!(!app.quit);
    assert!(app.editing.is_none());
}

#[test]
fn call_failure_is_rendered_as_error_text() {
    let (mut app, _calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('c')));
    wait_until(&mut app, |a| !a.calling);
    assert!(app.call_result.starts_with("ERROR:"), "got {}", app.call_result);
}

#[test]
fn sign_out_clears_session_and_provider() {
    let (mut app, calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('o')));
    assert_eq!(app.screen, Screen::SignIn);
    assert!(app.panel.access_token().is_none());
    assert!(app.panel.scheduled_refresh().is_none());
    wait_until(&mut app, |_| calls.signed_out());
}

#[test]
fn load_finishing_after_sign_out_is_discarded() {
    let (mut app, calls) = signed_in_app();
    app.handle_key(key(KeyCode::Char('f')));
    app.handle_key(key(KeyCode::Char('o')));
    // The forced fetch completes before the sign-out on the provider thread.
    wait_until(&mut app, |_| calls.signed_out());
    app.drain_workers();

    assert_eq!(calls.fetches(), vec![false, true]);
    assert_eq!(app.screen, Screen::SignIn);
    assert!(app.panel.access_token().is_none());
    assert!(app.panel.id_claims().is_none());
    assert!(app.panel.scheduled_refresh().is_none());
    let status = app.status.as_ref().expect("status");
    assert_eq!(status.text, "signed out");
}

#[test]
fn sign_out_does_not_wait_for_a_slow_fetch() {
    let (mut app, calls) = signed_in_app();
    let release = calls.hold_next_fetch();
    app.handle_key(key(KeyCode::Char('f')));

    let started = Instant::now();
    app.handle_key(key(KeyCode::Char('o')));
    app.drain_workers();
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(app.screen, Screen::SignIn);
    assert!(app.panel.access_token().is_none());
    assert!(!calls.signed_out());

    drop(release);
    wait_until(&mut app, |_| calls.signed_out());
    assert!(app.panel.access_token().is_none());
}

#[test]
fn session_view_shows_countdown_and_curl() {
    let (app, _calls) = signed_in_app();
    let text: Vec<String> = super::super::render::session_lines(&app, session::now_unix_ms())
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert!(text.iter().any(|l| l.contains("remaining ")));
    assert!(text.iter().any(|l| l.starts_with("curl -i")));
    assert!(
        text.iter()
            .any(|l| l.contains("https://your-api.example.com/dev/hello"))
    );
}
