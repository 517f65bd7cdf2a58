use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Screen {
    SignIn,
    Session,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum SignInField {
    Email,
    Password,
}

impl SignInField {
    pub(in crate::tui_shell) fn toggle(self) -> Self {
        match self {
            SignInField::Email => SignInField::Password,
            SignInField::Password => SignInField::Email,
        }
    }
}

/// Field being edited on the session screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EditTarget {
    Url,
    Bearer,
}

impl EditTarget {
    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            EditTarget::Url => "url",
            EditTarget::Bearer => "token",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: StatusKind,
    pub(in crate::tui_shell) text: String,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) config: AppConfig,
    pub(in crate::tui_shell) provider: ProviderWorker,
    pub(in crate::tui_shell) http: reqwest::blocking::Client,

    pub(in crate::tui_shell) screen: Screen,
    pub(in crate::tui_shell) quit: bool,

    // Sign-in form.
    pub(in crate::tui_shell) email: Input,
    pub(in crate::tui_shell) password: Input,
    pub(in crate::tui_shell) sign_in_field: SignInField,
    pub(in crate::tui_shell) signing_in: bool,
    pub(in crate::tui_shell) signed_in_as: Option<String>,

    pub(in crate::tui_shell) panel: SessionPanel,
    pub(in crate::tui_shell) scroll: u16,

    // External call.
    pub(in crate::tui_shell) url: Input,
    pub(in crate::tui_shell) bearer: Input,
    pub(in crate::tui_shell) editing: Option<EditTarget>,
    pub(in crate::tui_shell) calling: bool,
    pub(in crate::tui_shell) call_result: String,

    pub(in crate::tui_shell) status: Option<StatusEntry>,

    pub(in crate::tui_shell) call_tx: Sender<String>,
    pub(in crate::tui_shell) call_rx: Receiver<String>,
}
