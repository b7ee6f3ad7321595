use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

static BOOL_STATE: LazyLock<Mutex<HashMap<String, bool>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static TEXT_STATE: LazyLock<Mutex<HashMap<String, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn key(id: &str, slot: &str) -> String {
    format!("{id}::{slot}")
}

pub fn bool_state(id: &str, slot: &str, controlled: Option<bool>, default: bool) -> bool {
    if let Some(value) = controlled {
        return value;
    }

    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        return *state.entry(composed).or_insert(default);
    }
    default
}

pub fn set_bool_state(id: &str, slot: &str, value: bool) {
    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        state.insert(composed, value);
    }
}

pub fn text_state(id: &str, slot: &str, default: String) -> String {
    let composed = key(id, slot);
    if let Ok(mut state) = TEXT_STATE.lock() {
        return state.entry(composed).or_insert(default).clone();
    }
    default
}

pub fn set_text_state(id: &str, slot: &str, value: String) {
    let composed = key(id, slot);
    if let Ok(mut state) = TEXT_STATE.lock() {
        state.insert(composed, value);
    }
}

/// Caret position of a text field, clamped to `len` characters.
pub fn caret(id: &str, len: usize) -> usize {
    text_state(id, "caret-index", len.to_string())
        .parse::<usize>()
        .map(|caret| caret.min(len))
        .unwrap_or(len)
}

pub fn set_caret(id: &str, caret: usize) {
    set_text_state(id, "caret-index", caret.to_string());
}

/// Adopts `rendered` as the live value of a text field unless it is the value
/// the field last reported, in which case edits made since then are kept.
pub fn sync_field_value(id: &str, rendered: &str) -> String {
    let value_key = key(id, "value");
    let reported_key = key(id, "value-reported");
    if let Ok(mut state) = TEXT_STATE.lock() {
        if state.get(&reported_key).map(String::as_str) != Some(rendered) {
            state.insert(value_key, rendered.to_string());
            state.insert(reported_key, rendered.to_string());
            return rendered.to_string();
        }
        if let Some(live) = state.get(&value_key) {
            return live.clone();
        }
    }
    rendered.to_string()
}

pub fn field_value(id: &str, fallback: &str) -> String {
    text_state(id, "value", fallback.to_string())
}

/// Records an edit the field has reported through its change handler.
pub fn report_field_value(id: &str, value: &str) {
    set_text_state(id, "value", value.to_string());
    set_text_state(id, "value-reported", value.to_string());
}
