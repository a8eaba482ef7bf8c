use serde_json::Value;

/// Well-known mortgage figures, in the order a caller most likely wants one.
const PRIORITY_KEYS: [&str; 4] = [
    "total_monthly_payment",
    "monthly_principal_interest",
    "housing_ratio",
    "total_interest_paid",
];

/// Print just the headline figure from a result.
///
/// Objects are searched for the well-known figures in priority order,
/// skipping nulls so a non-finite ratio never prints as the answer. Row
/// arrays print one compact JSON object per line.
pub fn print_minimal(value: &Value) {
    let result = match value {
        Value::Object(map) => map.get("result").unwrap_or(value),
        _ => value,
    };

    match result {
        Value::Object(map) => {
            let headline = PRIORITY_KEYS
                .iter()
                .find_map(|key| map.get(*key).filter(|v| !v.is_null()));
            match headline {
                Some(figure) => println!("{}", format_minimal(figure)),
                None => {
                    if let Some((key, val)) = map.iter().next() {
                        println!("{}: {}", key, format_minimal(val));
                    }
                }
            }
        }
        Value::Array(rows) => {
            for row in rows {
                println!("{}", serde_json::to_string(row).unwrap_or_default());
            }
        }
        other => println!("{}", format_minimal(other)),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
