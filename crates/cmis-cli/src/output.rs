//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning to stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Read a property from a succinct object, whether bare or wrapped in `object`.
pub fn property<'a>(object: &'a Value, id: &str) -> Option<&'a Value> {
    object
        .get("succinctProperties")
        .or_else(|| object.get("object")?.get("succinctProperties"))?
        .get(id)
}

/// Property value rendered as plain text.
pub fn property_str(object: &Value, id: &str) -> String {
    match property(object, id) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// One line per object: kind marker, name, id.
pub fn object_line(object: &Value) {
    let marker = match property_str(object, "cmis:baseTypeId").as_str() {
        "cmis:folder" => "d".blue().bold(),
        "cmis:document" => "-".normal(),
        "cmis:relationship" => "r".magenta(),
        "cmis:policy" => "p".yellow(),
        "cmis:item" => "i".cyan(),
        _ => "?".dimmed(),
    };
    println!(
        "{} {}  {}",
        marker,
        property_str(object, "cmis:name"),
        property_str(object, "cmis:objectId").dimmed()
    );
}
