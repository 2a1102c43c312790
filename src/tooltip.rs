use crate::models::NormalizedEvent;
use chrono::{DateTime, Utc};

const ARROW_SVG: &str = r#"<svg class="arrow" viewBox="0 0 460.5 531.74"><polygon points="460,530.874 1,265.87 460,0.866 "/></svg>"#;

pub fn tooltip_content(event: &NormalizedEvent, show_location: bool) -> String {
    let header = format!(r#"<div class="card-header">{}</div>"#, escape_html(&event.title));

    let location = match (&event.location, show_location) {
        (Some(location), true) if !location.name.is_empty() => {
            format!("{}<br>", escape_html(&location.name))
        }
        _ => String::new(),
    };

    let description = event
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(|text| format!("<br>{}", escape_html(text)))
        .unwrap_or_default();

    let contact = event
        .contact_person
        .as_ref()
        .filter(|person| !person.name.is_empty() || !person.email.is_empty())
        .map(|person| {
            let name = if person.name.is_empty() {
                &person.email
            } else {
                &person.name
            };
            format!(
                r#"<a href="mailto:{}">{}</a><br>"#,
                escape_html(&person.email),
                escape_html(name)
            )
        })
        .unwrap_or_default();

    let participants = format!(
        "<p><strong>Participants: {} / {}</strong><br>Overbook: {}<br>Min. participants: {}</p>",
        event.assignment_count,
        optional_count(event.max_participants),
        event.overbook,
        optional_count(event.min_participants),
    );

    let body = format!(
        r#"<div class="card-body"><p>{location}{} - {}</p>{description}{contact}{participants}</div>"#,
        format_time(event.start),
        format_time(event.effective_end()),
    );

    format!(r#"<div class="fc-tooltip">{ARROW_SVG}<div class="card">{header}{body}</div></div>"#)
}

pub fn format_time(time: DateTime<Utc>) -> String {
    time.format("%H:%M").to_string()
}

fn optional_count(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |count| count.to_string())
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
