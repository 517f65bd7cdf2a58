use super::*;

pub(in crate::tui_shell) fn now_hms() -> String {
    let now = time::OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}Z", now.hour(), now.minute(), now.second())
}

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    match app.screen {
        Screen::SignIn => draw_sign_in(frame, app, chunks[1]),
        Screen::Session => draw_session(frame, app, chunks[1]),
    }
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled(
            "Session Inspector",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
    ];
    match &app.signed_in_as {
        Some(who) => spans.push(Span::styled(
            format!("signed in: {}", who),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled(
            "signed out",
            Style::default().fg(Color::Gray),
        )),
    }
    if app.panel.is_loading() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "fetching...",
            Style::default().fg(Color::Yellow),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let hints = match (app.screen, app.editing) {
        (Screen::SignIn, _) => "Tab switch field  Enter next/sign in  Esc quit",
        (Screen::Session, Some(_)) => "Enter save  Esc cancel  Ctrl-U clear",
        (Screen::Session, None) => {
            "r re-fetch  f forceRefresh  u url  t token  i use id token  x clear token  c call  o sign out  q quit"
        }
    };
    let mut lines = vec![dim(hints)];
    if let Some(s) = &app.status {
        let style = match s.kind {
            StatusKind::Info => Style::default().fg(Color::White),
            StatusKind::Error => Style::default().fg(Color::Red),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", s.ts), Style::default().fg(Color::Gray)),
            Span::styled(s.text.clone(), style),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn draw_sign_in(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let mut lines = vec![
        dim("Sign in with the email registered in the user pool."),
        Line::from(""),
        field_line(
            "email",
            &app.email,
            app.sign_in_field == SignInField::Email && !app.signing_in,
        ),
        field_line(
            "password",
            &app.password,
            app.sign_in_field == SignInField::Password && !app.signing_in,
        ),
    ];
    if app.signing_in {
        lines.push(Line::from(""));
        lines.push(dim("signing in..."));
    }
    lines.push(Line::from(""));
    lines.push(label("Auth settings (effective)"));
    lines.extend(text_lines(&auth_settings_text(app), ""));
    render_section(frame, "Sign in", lines, 0, area);
}

fn draw_session(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_section(
        frame,
        "Session",
        session_lines(app, session::now_unix_ms()),
        app.scroll,
        cols[0],
    );
    render_section(frame, "External API", call_lines(app), 0, cols[1]);
}

pub(super) fn session_lines(app: &App, now_ms: i64) -> Vec<Line<'static>> {
    let panel = &app.panel;
    let mut lines = Vec::new();

    match panel.access_exp() {
        Some(exp) => {
            let at = session::expires_at_display(exp).unwrap_or_else(|| exp.to_string());
            let mut spans = vec![
                Span::styled("expires ", Style::default().fg(Color::Cyan)),
                Span::raw(at),
                Span::raw("  remaining "),
                Span::styled(
                    session::countdown(exp, now_ms),
                    Style::default().fg(Color::Yellow),
                ),
            ];
            if panel.scheduled_refresh().is_some() {
                spans.push(Span::styled(
                    "  (auto refresh armed)",
                    Style::default().fg(Color::Gray),
                ));
            }
            lines.push(Line::from(spans));
        }
        None => lines.push(dim("no expiry available")),
    }
    if let Some(err) = panel.last_error() {
        lines.push(Line::from(Span::styled(
            format!("last fetch failed: {}", err),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));

    lines.push(label("Access Token (JWT)"));
    lines.push(Line::from(panel.access_token().unwrap_or("—").to_string()));
    lines.push(label("access token claims"));
    lines.extend(text_lines(&token::pretty_json(panel.access_claims()), ""));
    lines.push(Line::from(""));

    lines.push(label("ID Token (JWT)"));
    lines.push(Line::from(panel.id_token().unwrap_or("—").to_string()));
    lines.push(label("id token claims"));
    lines.extend(text_lines(&token::pretty_json(panel.id_claims()), ""));
    lines.push(Line::from(""));

    lines.push(label("cURL"));
    match &app.config.api_url {
        Some(url) => lines.push(dim(&format!("API_URL = {}", url))),
        None => lines.push(dim(
            "set API_URL (or --api-url) to target your own API",
        )),
    }
    lines.extend(text_lines(
        &panel.curl_snippet(app.config.api_url_or_placeholder()),
        "access token not fetched yet",
    ));
    lines
}

fn call_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        field_line("url", &app.url, app.editing == Some(EditTarget::Url)),
        field_line("token", &app.bearer, app.editing == Some(EditTarget::Bearer)),
    ];
    if app.bearer.buf.trim().is_empty() {
        lines.push(dim("(no Authorization header will be sent)"));
    }
    lines.push(Line::from(""));
    if app.calling {
        lines.push(dim("calling..."));
    } else {
        lines.extend(text_lines(&app.call_result, "(result appears here; press c)"));
    }
    lines.push(Line::from(""));
    lines.push(label("Auth settings (effective)"));
    lines.extend(text_lines(&auth_settings_text(app), ""));
    lines
}

fn auth_settings_text(app: &App) -> String {
    token::pretty_json(Some(&app.config.auth.effective_json()))
}
