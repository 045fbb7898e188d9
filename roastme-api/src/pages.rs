//! Server-rendered HTML form for browsers without a separate frontend.

use crate::routes::log_failure;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use roastme_app::domain::{Roast, RoastLevel, RoastRequest};
use roastme_app::infrastructure::security::InputSanitizer;
use roastme_app::AppContext;
use roastme_errors::AppError;
use serde::Deserialize;
use std::collections::HashMap;

const MAX_CACHED_ROAST_CHARS: usize = 4000;
const SHARE_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct RoastForm {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub level: Option<String>,
    pub about: Option<String>,
    pub cached_soft: Option<String>,
    pub cached_medium: Option<String>,
    pub cached_brutal: Option<String>,
}

impl RoastForm {
    fn cached(&self, level: RoastLevel) -> Option<&str> {
        match level {
            RoastLevel::Soft => self.cached_soft.as_deref(),
            RoastLevel::Medium => self.cached_medium.as_deref(),
            RoastLevel::Brutal => self.cached_brutal.as_deref(),
        }
    }

    /// Roasts already generated for this persona, carried between pages in hidden fields.
    fn cached_roasts(&self) -> HashMap<RoastLevel, String> {
        RoastLevel::ALL
            .into_iter()
            .filter_map(|level| {
                let text = InputSanitizer::clean_field(self.cached(level)?, MAX_CACHED_ROAST_CHARS);
                (!text.is_empty()).then_some((level, text))
            })
            .collect()
    }
}

pub async fn form_page() -> Html<String> {
    Html(render_form_page())
}

pub async fn submit_form(
    State(ctx): State<AppContext>,
    form: Result<Form<RoastForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(e) => return error_response(&AppError::InvalidBody(e.body_text())),
    };

    let request = match InputSanitizer::validate_roast_input(
        form.name.as_deref(),
        form.profession.as_deref(),
        form.level.as_deref(),
        form.about.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    let mut cache = form.cached_roasts();
    let roast = match cache.get(&request.level) {
        Some(text) => {
            tracing::debug!("Serving saved {} roast for {}", request.level, request.name);
            Roast::new(request.name.clone(), request.level, text.clone())
        }
        None => {
            tracing::info!("Generating {} roast for {} (form)", request.level, request.name);
            match ctx.generate_roast.execute(request.clone()).await {
                Ok(roast) => roast,
                Err(e) => return error_response(&e),
            }
        }
    };
    cache.insert(roast.level, roast.roast_text.clone());

    Html(render_result_page(&request, &roast, &cache)).into_response()
}

fn error_response(e: &AppError) -> Response {
    log_failure(e);
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Html(render_error_page(e.user_message()))).into_response()
}

fn greeting(level: RoastLevel) -> &'static str {
    match level {
        RoastLevel::Soft => "Hey there, ",
        RoastLevel::Medium => "Alright ",
        RoastLevel::Brutal => "R.I.P. ",
    }
}

fn render_form_page() -> String {
    let level_options: String = RoastLevel::ALL
        .iter()
        .map(|level| {
            let checked = if *level == RoastLevel::Medium { " checked" } else { "" };
            format!(
                r#"<label class="level level--{value}"><input type="radio" name="level" value="{value}"{checked}> {label}</label>"#,
                value = level.as_str(),
                label = level.label(),
                checked = checked,
            )
        })
        .collect();

    page(
        "RoastMe AI",
        &format!(
            r#"<div class="hero">
            <h1 class="hero__title">RoastMe AI</h1>
            <p class="hero__subtitle">Tell us who you are. We'll take it from there.</p>
        </div>
        <form class="roast-form" method="post" action="/roast">
            <input class="roast-form__input" name="name" maxlength="50" placeholder="Your name" required>
            <input class="roast-form__input" name="profession" maxlength="100" placeholder="Your profession" required>
            <textarea class="roast-form__input" name="about" maxlength="300" placeholder="Tell us about yourself (optional)"></textarea>
            <div class="roast-form__levels">{level_options}</div>
            <button class="roast-form__button" type="submit">Roast Me</button>
        </form>"#,
            level_options = level_options,
        ),
    )
}

fn render_result_page(
    request: &RoastRequest,
    roast: &Roast,
    cache: &HashMap<RoastLevel, String>,
) -> String {
    let switch_buttons: String = RoastLevel::ALL
        .iter()
        .filter(|level| **level != roast.level)
        .map(|level| render_level_switch(&request.with_level(*level), cache))
        .collect();

    page(
        &format!("Roasted: {}", escape_html(&roast.name)),
        &format!(
            r#"<div class="roast">
            <h2 class="roast__title">{greeting}{name}</h2>
            <span class="roast__badge level--{level}">{label} ROAST</span>
            <div class="roast__content" id="roast-text">{content}</div>
            <div class="roast__actions">
                <button class="roast__button--primary" type="button" onclick="navigator.clipboard.writeText(document.getElementById('roast-text').innerText)">Copy</button>
                <a href="{share_url}" class="roast__button--secondary" target="_blank" rel="noopener">Share</a>
                {switch_buttons}
                <a href="/roast" class="roast__button--secondary">Roast Someone Else</a>
            </div>
        </div>"#,
            greeting = greeting(roast.level),
            name = escape_html(&roast.name),
            level = roast.level.as_str(),
            label = roast.level.label(),
            content = roast_to_html(&roast.roast_text),
            share_url = escape_html(&share_url(roast)),
            switch_buttons = switch_buttons,
        ),
    )
}

fn share_url(roast: &Roast) -> String {
    let snippet: String = roast.roast_text.chars().take(SHARE_SNIPPET_CHARS).collect();
    let text = format!(
        "I just got {} roasted by AI! 🔥\n\n\"{}...\"\n\nTry it yourself!",
        roast.level, snippet
    );
    format!(
        "https://twitter.com/intent/tweet?text={}",
        urlencoding::encode(&text)
    )
}

fn render_level_switch(request: &RoastRequest, cache: &HashMap<RoastLevel, String>) -> String {
    let cached_fields: String = RoastLevel::ALL
        .iter()
        .filter_map(|level| {
            cache.get(level).map(|text| {
                format!(
                    r#"<input type="hidden" name="cached_{level}" value="{text}">"#,
                    level = level.as_str(),
                    text = escape_html(text),
                )
            })
        })
        .collect();

    format!(
        r#"<form method="post" action="/roast" class="roast__switch">
                    <input type="hidden" name="name" value="{name}">
                    <input type="hidden" name="profession" value="{profession}">
                    <input type="hidden" name="about" value="{about}">
                    <input type="hidden" name="level" value="{level}">
                    {cached_fields}
                    <button class="roast__button level--{level}" type="submit">Try {label}</button>
                </form>"#,
        name = escape_html(&request.name),
        profession = escape_html(&request.profession),
        about = escape_html(&request.about),
        level = request.level.as_str(),
        label = request.level.label(),
        cached_fields = cached_fields,
    )
}

fn render_error_page(message: &str) -> String {
    page(
        "Error - RoastMe AI",
        &format!(
            r#"<div class="error">
            <p class="error__title">Well, that backfired.</p>
            <p class="error__message">{message}</p>
            <a href="/roast" class="error__retry">Try Again</a>
        </div>"#,
            message = escape_html(message),
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        {body}
    </main>
</body>
</html>"#,
        title = title,
        body = body,
        CSS = CSS,
    )
}

/// One paragraph per non-empty line; the model is asked for one burn per line.
fn roast_to_html(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect()
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 2rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; }
.roast-form { display: flex; flex-direction: column; gap: 1rem; margin: 2rem 0; }
.roast-form__input { padding: 1rem 1.25rem; border: 2px solid var(--overlay); border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem; }
.roast-form__input:focus { outline: none; border-color: var(--pine); }
.roast-form__levels { display: flex; gap: 1rem; justify-content: center; }
.roast-form__button { padding: 1rem 2rem; background: var(--love); color: var(--base); border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; }
.level--soft { color: var(--foam); }
.level--medium { color: var(--gold); }
.level--brutal { color: var(--love); }
.roast { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.5rem; margin: 2rem 0; }
.roast__title { color: var(--love); font-size: 1.4rem; margin-bottom: 0.5rem; }
.roast__badge { display: inline-block; font-weight: 700; font-size: 0.8rem; margin-bottom: 1rem; }
.roast__content { line-height: 1.8; font-size: 1.05rem; padding-top: 0.75rem; border-top: 2px solid var(--overlay); }
.roast__content p { margin-bottom: 1rem; }
.roast__actions { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.roast__button, .roast__button--primary, .roast__button--secondary { padding: 0.75rem 1.5rem; border-radius: 8px; font-weight: 600; cursor: pointer; text-decoration: none; }
.roast__button { background: var(--overlay); border: none; }
.roast__button--primary { background: var(--pine); color: var(--base); border: none; }
.roast__button--secondary { background: transparent; color: var(--subtle); border: 2px solid var(--overlay); }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__retry { display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border-radius: 4px; text-decoration: none; }
"#;
