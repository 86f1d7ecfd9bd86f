use chrono::Utc;
use idjassa_core::ui::BadgeTier;
use idjassa_core::utils::{format_prix, time_ago_str};
use serde_json::Value;

/// Print one line per listing. Accepts a bare array or `{ "annonces": [...] }`.
pub fn print_annonces(page: &Value) {
    let annonces = page
        .as_array()
        .or_else(|| page.get("annonces").and_then(Value::as_array));

    let Some(annonces) = annonces else {
        println!("{}", page);
        return;
    };
    if annonces.is_empty() {
        println!("No listings match.");
        return;
    }
    for annonce in annonces {
        println!("{}", annonce_line(annonce));
    }
    if let Some(total) = page.get("total").and_then(Value::as_u64) {
        println!("{} of {} listings", annonces.len(), total);
    }
}

fn annonce_line(annonce: &Value) -> String {
    let id = match annonce.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(id) => id.to_string(),
        None => "-".to_string(),
    };
    let prix = annonce
        .get("prix")
        .and_then(Value::as_i64)
        .map(format_prix)
        .unwrap_or_else(|| "-".to_string());
    let posted = annonce
        .get("created_at")
        .and_then(Value::as_str)
        .map(|date| time_ago_str(date, Utc::now()))
        .unwrap_or_default();
    let badge = BadgeTier::parse(text(annonce, "badge"));

    format!(
        "{:>6}  {:<32}  {:>14}  {:<12}  {}  {}",
        id,
        text(annonce, "titre"),
        prix,
        text(annonce, "ville"),
        badge,
        posted
    )
}

fn text<'a>(annonce: &'a Value, key: &str) -> &'a str {
    annonce.get(key).and_then(Value::as_str).unwrap_or("-")
}
