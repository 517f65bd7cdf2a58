use super::*;

impl App {
    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        match self.screen {
            Screen::SignIn => self.handle_sign_in_key(key),
            Screen::Session => {
                if self.editing.is_some() {
                    self.handle_edit_key(key);
                } else {
                    self.handle_session_key(key);
                }
            }
        }
    }

    pub(in crate::tui_shell) fn handle_paste(&mut self, text: &str) {
        match (self.screen, self.editing) {
            (Screen::SignIn, _) => self.sign_in_input().insert_str(text),
            (Screen::Session, Some(target)) => self.edit_input(target).insert_str(text),
            (Screen::Session, None) => {}
        }
    }

    fn sign_in_input(&mut self) -> &mut Input {
        match self.sign_in_field {
            SignInField::Email => &mut self.email,
            SignInField::Password => &mut self.password,
        }
    }

    fn edit_input(&mut self, target: EditTarget) -> &mut Input {
        match target {
            EditTarget::Url => &mut self.url,
            EditTarget::Bearer => &mut self.bearer,
        }
    }

    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.sign_in_field = self.sign_in_field.toggle();
            }
            KeyCode::Enter => match self.sign_in_field {
                SignInField::Email => self.sign_in_field = SignInField::Password,
                SignInField::Password => self.start_sign_in(),
            },
            _ => edit_with_key(self.sign_in_input(), key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(target) = self.editing else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                self.editing = None;
                self.push_info(format!("{} updated", target.label()));
            }
            KeyCode::Esc => {
                self.editing = None;
            }
            _ => edit_with_key(self.edit_input(target), key),
        }
    }

    fn handle_session_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') => {
                self.push_info("re-fetching session");
                self.load_session(false);
            }
            KeyCode::Char('f') => {
                self.push_info("forcing token refresh");
                self.load_session(true);
            }
            KeyCode::Char('u') => self.editing = Some(EditTarget::Url),
            KeyCode::Char('t') => self.editing = Some(EditTarget::Bearer),
            KeyCode::Char('i') => match self.panel.id_token() {
                Some(id) => {
                    let id = id.to_string();
                    self.bearer.set(id);
                    self.push_info("id token copied into the token field");
                }
                None => self.push_error("no id token in the current session"),
            },
            KeyCode::Char('x') => {
                self.bearer.clear();
                self.push_info("token field cleared");
            }
            KeyCode::Char('c') => self.start_call(),
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }
}

fn edit_with_key(input: &mut Input, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c)
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/actions_tests.rs"]
mod tests;
