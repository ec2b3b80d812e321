// HTML rendering of screens for the web server

use crate::pet::PetId;
use std::borrow::Cow;
use crate::screen::{PetDetail, PetRow, Screen};

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2em auto;padding:0 1em}\
a.row{display:flex;gap:1em;align-items:center;padding:.5em;margin:.5em 0;border:1px solid #ddd;border-radius:6px;text-decoration:none;color:inherit}\
a.row:hover{background:#f5f5f5}\
.icon{font-size:2.5em}\
.label{color:#777;font-size:.8em}\
.facts{display:flex;gap:2em}";

pub fn render_page(screen: &Screen) -> String {
    let body = match screen {
        Screen::Overview { rows } => render_overview(rows),
        Screen::Detail(detail) => render_detail(detail),
        Screen::NotFound { pet_id } => render_not_found(*pet_id),
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        text(&screen.title()),
        STYLE,
        body
    )
}

fn render_overview(rows: &[PetRow]) -> String {
    let mut out = String::from("<h1>Pets</h1>\n");

    for row in rows {
        out.push_str(&format!(
            "<a class=\"row\" href=\"{}\"><span class=\"icon\">{}</span><div><h2>{}</h2><div class=\"facts\">{}{}</div></div></a>\n",
            attr(&row.route),
            text(&row.icon),
            text(&row.name),
            fact("Species", &row.species),
            fact("Gender", &row.gender),
        ));
    }

    out
}

fn render_detail(detail: &PetDetail) -> String {
    format!(
        "<a href=\"/\">&larr; Back</a>\n<h1><span class=\"icon\">{}</span> {}</h1>\n<div class=\"facts\">{}{}{}</div>\n<h2>History</h2>\n<p>{}</p>\n",
        text(&detail.icon),
        text(&detail.name),
        fact("Species", &detail.species_label),
        fact("Gender", &detail.gender),
        fact("Born", &detail.year_of_birth.to_string()),
        text(&detail.history),
    )
}

fn render_not_found(pet_id: PetId) -> String {
    format!(
        "<a href=\"/\">&larr; Back</a>\n<h1>Pet not found</h1>\n<p>There is no pet with id {}.</p>\n",
        pet_id
    )
}

fn fact(label: &str, value: &str) -> String {
    format!(
        "<div><div class=\"label\">{}</div><div>{}</div></div>",
        label,
        text(value)
    )
}

/// Escape element text
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Escape a value placed inside a double-quoted attribute
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
