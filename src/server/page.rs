use axum::response::Html;

pub const ERROR_PREFIX: &str = "⚠️ Error:";

/// What the output region shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Translation(String),
    Failure(String),
}

impl Outcome {
    pub fn error_message(description: impl std::fmt::Display) -> String {
        format!("{} {}", ERROR_PREFIX, description)
    }
}

const STYLE: &str = r#"
    body {
        max-width: 720px;
        margin: 3em auto;
        padding: 0 1em;
        font-family: "Segoe UI", sans-serif;
        background: #fffdf5;
    }
    h1 {
        text-align: center;
        color: #DAA520;
        font-weight: 900;
        font-family: Poppins, sans-serif;
    }
    .tagline {
        text-align: center;
        color: maroon;
        font-size: 21px;
        font-weight: 800;
        font-family: "Trebuchet MS", sans-serif;
    }
    form {
        display: flex;
        flex-direction: column;
        gap: 1em;
    }
    input[type="text"] {
        padding: 0.7em;
        font-size: 18px;
        border: 1px solid #ccc;
        border-radius: 8px;
    }
    button {
        align-self: flex-start;
        background-color: maroon;
        color: #FFFDE7;
        border: 2px solid #FFFACD;
        padding: 0.6em 1.3em;
        font-size: 18px;
        border-radius: 10px;
        font-weight: 800;
        letter-spacing: 0.5px;
        transition: all 0.3s ease-in-out;
        box-shadow: 0 0 10px #FFF9C4;
        cursor: pointer;
    }
    button:hover {
        transform: scale(1.07);
        box-shadow: 0 0 25px #FFFDE7;
        background-color: #4B0000;
        color: white;
    }
    #spinner {
        display: none;
        color: maroon;
        font-style: italic;
    }
    form.busy #spinner {
        display: block;
    }
    .translation {
        margin-top: 1.5em;
        background-color: #FFFBEA;
        padding: 15px;
        border-radius: 10px;
        font-size: 18px;
        font-weight: 700;
        color: maroon;
    }
    .error {
        margin-top: 1.5em;
        background-color: #ffe6e6;
        padding: 15px;
        border-radius: 10px;
        color: #7d0000;
    }
"#;

/// Renders the single page, with `input` kept in the field.
pub fn render(input: &str, outcome: Option<&Outcome>) -> Html<String> {
    let output_region = match outcome {
        None => String::new(),
        Some(Outcome::Translation(text)) => format!(
            r#"<div class="translation"><b>Translation:</b><br><span id="output">{}</span></div>"#,
            escape(text)
        ),
        Some(Outcome::Failure(message)) => format!(
            r#"<div class="error" role="alert"><span id="error">{}</span></div>"#,
            escape(message)
        ),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Tranzify</title>
<style>{style}</style>
</head>
<body>
<h1>⚡ Tranzify</h1>
<p class="tagline">Your bilingual bridge — effortless English ⇄ Roman Urdu translation</p>
<form id="translate_form" method="post" action="/" onsubmit="this.classList.add('busy')">
<input type="text" name="text" value="{value}" placeholder="💬 Type something to translate..." autofocus>
<button type="submit">TRANSLATE</button>
<div id="spinner">Translating... please wait.</div>
</form>
{output_region}
</body>
</html>
"#,
        style = STYLE,
        value = escape(input),
        output_region = output_region,
    ))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
