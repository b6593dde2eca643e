//! HTML page rendering
//!
//! Builder functions assembling the single page the service serves: the
//! input form, the summary panel with its download link, and the error
//! panel. All interpolated text goes through [`escape_html`].

use crate::web::flow::SubmissionOutcome;

const PAGE_TITLE: &str = "Recap";
const BACKGROUND_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1607746882042-944635dfe10e?auto=format&fit=crop&w=1470&q=80";

const PAGE_STYLE: &str = r#"
    body {
        background-image: url('__BACKGROUND__');
        background-size: cover;
        background-attachment: fixed;
        font-family: sans-serif;
        margin: 0;
        padding: 2rem;
    }
    .container { max-width: 720px; margin: 0 auto; }
    h1 { text-align: center; color: white; }
    .panel {
        background-color: rgba(0,0,0,0.6);
        border-radius: 10px;
        padding: 2rem;
        color: white;
        margin-top: 1rem;
    }
    textarea {
        width: 100%;
        height: 200px;
        border-radius: 8px;
        padding: 0.5em;
        box-sizing: border-box;
    }
    button {
        background-color: #ff4e84;
        color: white;
        border-radius: 8px;
        padding: 0.5em 2em;
        border: none;
        cursor: pointer;
        margin-top: 0.5em;
    }
    .error { color: #ffb3c6; }
    #animation { height: 180px; }
"#;

/// Escape text for safe interpolation into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
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

/// Build the full page for the given submission outcome.
///
/// `lottie_json` is the decorative animation descriptor fetched at startup;
/// `None` renders the page without it. `input_text` refills the textarea so
/// the user's text survives the round trip.
#[must_use]
pub fn page(outcome: &SubmissionOutcome, input_text: &str, lottie_json: Option<&str>) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>&#128221; {PAGE_TITLE}</h1>\n"));

    if let Some(json) = lottie_json {
        body.push_str(&animation_block(json));
    }

    body.push_str(&form_block(input_text));

    match outcome {
        SubmissionOutcome::Skipped => {}
        SubmissionOutcome::Completed {
            summary,
            pdf_data_uri,
        } => {
            body.push_str(&summary_block(summary, pdf_data_uri));
        }
        SubmissionOutcome::Failed { message } => {
            body.push_str(&error_block(message));
        }
    }

    let style = PAGE_STYLE.replace("__BACKGROUND__", BACKGROUND_IMAGE_URL);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{style}</style>\n</head>\n\
         <body>\n<div class=\"container\">\n{body}</div>\n</body>\n</html>\n"
    )
}

fn form_block(input_text: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/summarize\">\n\
         <textarea name=\"text\" placeholder=\"Paste text here...\">{}</textarea>\n\
         <br>\n<button type=\"submit\">Summarize</button>\n</form>\n",
        escape_html(input_text)
    )
}

fn summary_block(summary: &str, pdf_data_uri: &str) -> String {
    format!(
        "<div class=\"panel\">\n<h3>Summary:</h3>\n<p>{}</p>\n\
         <a href=\"{}\" download=\"summary.pdf\" style=\"text-decoration:none;\">\
         <button type=\"button\">&#128229; Download PDF</button></a>\n</div>\n",
        escape_html(summary),
        pdf_data_uri
    )
}

fn error_block(message: &str) -> String {
    format!(
        "<div class=\"panel\">\n<p class=\"error\">{}</p>\n</div>\n",
        escape_html(message)
    )
}

/// Inline the animation JSON and play it with the lottie-web player.
fn animation_block(lottie_json: &str) -> String {
    format!(
        "<div id=\"animation\"></div>\n\
         <script src=\"https://cdnjs.cloudflare.com/ajax/libs/bodymovin/5.12.2/lottie.min.js\"></script>\n\
         <script>\nlottie.loadAnimation({{\n  container: document.getElementById('animation'),\n\
  renderer: 'svg',\n  loop: true,\n  autoplay: true,\n  animationData: {lottie_json}\n}});\n</script>\n"
    )
}
