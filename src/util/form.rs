//! Form serialization helpers.
//!
//! Browsers omit unchecked checkboxes from a form's field set entirely,
//! but the backend expects an explicit value for every checkbox it
//! renders. [`collect_form_data`] therefore appends `"off"` for each
//! checkbox missing from the serialized set.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Value submitted for checkboxes the browser omitted.
pub const CHECKBOX_OFF: &str = "off";

/// Name/value pairs to append for checkboxes missing from the submitted
/// field set. Empty names are skipped; duplicate names (checkbox groups)
/// are filled once.
#[must_use]
pub fn unchecked_fill_pairs(
    checkbox_names: &[String],
    submitted: &[String],
) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for name in checkbox_names {
        if name.is_empty() {
            continue;
        }
        if submitted.iter().any(|s| s == name) {
            continue;
        }
        if pairs.iter().any(|(n, _)| n == name) {
            continue;
        }
        pairs.push((name.clone(), CHECKBOX_OFF.to_owned()));
    }
    pairs
}

/// Serialize `form` into multipart `FormData`, normalizing absent
/// checkbox fields to an explicit `"off"` value.
///
/// # Errors
///
/// Returns a message when the form element cannot be serialized.
#[cfg(feature = "hydrate")]
pub fn collect_form_data(form: &web_sys::HtmlFormElement) -> Result<web_sys::FormData, String> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|_| "failed to read the form fields".to_owned())?;

    let names = checkbox_names(form);
    let submitted: Vec<String> = names.iter().filter(|name| data.has(name)).cloned().collect();
    for (name, value) in unchecked_fill_pairs(&names, &submitted) {
        data.append_with_str(&name, &value)
            .map_err(|_| format!("failed to append checkbox field '{name}'"))?;
    }
    Ok(data)
}

/// Names of every checkbox input inside `form`.
#[cfg(feature = "hydrate")]
fn checkbox_names(form: &web_sys::HtmlFormElement) -> Vec<String> {
    use wasm_bindgen::JsCast;

    let Ok(nodes) = form.query_selector_all("input[type=checkbox]") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<web_sys::HtmlInputElement>() else {
            continue;
        };
        let name = input.name();
        if !name.is_empty() {
            names.push(name);
        }
    }
    names
}
