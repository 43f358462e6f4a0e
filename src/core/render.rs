use crate::core::{Messages, QueryResponse, RenderStyle};
use serde_json::Value;

/// 將伺服器回應轉成顯示區的文字
pub fn render(response: &QueryResponse, style: RenderStyle, messages: &Messages) -> String {
    match style {
        RenderStyle::Raw => render_raw(response),
        RenderStyle::List => render_list(response, &messages.heading),
    }
}

pub fn render_raw(response: &QueryResponse) -> String {
    // Value 的序列化不會失敗，保險起見退回單行格式
    serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
}

pub fn render_list(response: &QueryResponse, heading: &str) -> String {
    let mut lines = vec![heading.to_string()];

    match response {
        Value::Object(fields) => {
            for (key, value) in fields {
                lines.push(format!("- {}: {}", humanize_label(key), value_text(value)));
            }
        }
        other => lines.push(value_text(other)),
    }

    lines.join("\n")
}

/// `legal_flow` -> `legal flow`
pub fn humanize_label(key: &str) -> String {
    key.replace('_', " ")
}

// 陣列以 ", " 連接；物件輸出精簡 JSON，不會變成 "[object Object]"
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        // objects stay compact JSON; numbers, bools and null use their JSON text
        other => other.to_string(),
    }
}
