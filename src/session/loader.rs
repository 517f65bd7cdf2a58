use std::sync::mpsc::{Receiver, Sender, channel};

use anyhow::Result;

use crate::model::{AuthSession, FetchOptions};
use crate::provider::SessionProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub seq: u64,
    pub force: bool,
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub seq: u64,
    pub force: bool,
    pub result: Result<AuthSession>,
}

impl LoadOutcome {
    pub fn fetch(provider: &mut dyn SessionProvider, req: LoadRequest) -> Self {
        Self {
            seq: req.seq,
            force: req.force,
            result: provider.fetch_session(FetchOptions::forced(req.force)),
        }
    }
}

pub enum ProviderCommand {
    SignIn { email: String, password: String },
    Load(LoadRequest),
    SignOut,
}

#[derive(Debug)]
pub enum ProviderEvent {
    SignedIn { email: String, result: Result<()> },
    Loaded(LoadOutcome),
    SignedOut,
}

/// Handle to the thread that owns the provider. Commands run one at a time
/// in the order they were sent; the caller never blocks on a request.
pub struct ProviderWorker {
    commands: Sender<ProviderCommand>,
    events: Receiver<ProviderEvent>,
}

impl ProviderWorker {
    /// The thread exits once this handle is dropped.
    pub fn spawn(mut provider: Box<dyn SessionProvider>) -> Self {
        let (cmd_tx, cmd_rx) = channel::<ProviderCommand>();
        let (event_tx, event_rx) = channel();

        std::thread::spawn(move || {
            for command in cmd_rx {
                let event = match command {
                    ProviderCommand::SignIn { email, password } => {
                        let result = provider.sign_in(&email, &password);
                        ProviderEvent::SignedIn { email, result }
                    }
                    ProviderCommand::Load(req) => {
                        ProviderEvent::Loaded(LoadOutcome::fetch(provider.as_mut(), req))
                    }
                    ProviderCommand::SignOut => {
                        provider.sign_out();
                        ProviderEvent::SignedOut
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            commands: cmd_tx,
            events: event_rx,
        }
    }

    pub fn send(&self, command: ProviderCommand) {
        if self.commands.send(command).is_err() {
            tracing::warn!("provider worker has exited; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<ProviderEvent> {
        self.events.try_recv().ok()
    }
}
