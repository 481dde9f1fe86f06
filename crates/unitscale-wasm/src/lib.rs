use unitscale_core::{Domain, FormatOptions, NumberStyle};
use wasm_bindgen::prelude::*;

fn domain(name: &str) -> Result<Domain, JsValue> {
    Domain::from_name(name).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Re-render `input` in `table` (empty string for the domain default). Errors come back as text.
#[wasm_bindgen]
pub fn format(domain_name: &str, input: &str, table: &str) -> String {
    format_with(domain_name, input, table, "fixed", -1)
}

/// Like [format]; `precision < 0` means shortest.
#[wasm_bindgen(js_name = formatWith)]
pub fn format_with(domain_name: &str, input: &str, table: &str, style: &str, precision: i32) -> String {
    match options(style, precision) {
        Ok(options) => {
            let table = (!table.is_empty()).then_some(table);
            Domain::from_name(domain_name)
                .and_then(|d| d.convert(input, table, &options))
                .unwrap_or_else(|e| e.to_string())
        }
        Err(e) => e,
    }
}

/// Same style names and error text as the command line.
fn options(style: &str, precision: i32) -> Result<FormatOptions, String> {
    let style = NumberStyle::from_name(style).ok_or_else(|| format!("unknown style `{style}`"))?;
    let mut options = FormatOptions::new().style(style);
    if let Ok(digits) = usize::try_from(precision) {
        options = options.precision(digits);
    }
    Ok(options)
}

/// Raw magnitude in the domain's base unit (bytes, nanometres, ...).
#[wasm_bindgen]
pub fn parse(domain_name: &str, input: &str) -> Result<f64, JsValue> {
    let raw = domain(domain_name)?
        .magnitude(input)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    // JS numbers are f64; magnitudes above 2^53 lose precision.
    Ok(raw as f64)
}

/// Table names for a domain, comma separated.
#[wasm_bindgen(js_name = tableNames)]
pub fn table_names(domain_name: &str) -> Result<String, JsValue> {
    Ok(domain(domain_name)?.table_names().join(","))
}
