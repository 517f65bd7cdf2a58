use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::external_call::{self, ExternalCall};
use crate::model::AppConfig;
use crate::provider::{CognitoProvider, SessionProvider};
use crate::session::{
    self, LoadOutcome, ProviderCommand, ProviderEvent, ProviderWorker, SessionPanel,
};
use crate::token;

use super::input::Input;
use super::view::{dim, field_line, label, render_section, text_lines};

mod state;
pub(super) use state::App;
use state::{EditTarget, Screen, SignInField, StatusKind};

mod actions;
mod event_loop;
pub(super) use event_loop::run_loop;
mod lifecycle;
mod render;
mod workers;
