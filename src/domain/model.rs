use serde_json::Value;
use std::collections::HashMap;

/// One object from the customer export. Only `package`, `price` and
/// `bandwidth` are ever read; everything else is carried along untouched.
#[derive(Debug, Clone, Default)]
pub struct CustomerRecord {
    pub data: HashMap<String, Value>,
}

impl CustomerRecord {
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    /// The grouping key. Empty strings, zero, null and non-scalar values
    /// count as "no package".
    pub fn package_name(&self) -> Option<String> {
        match self.data.get("package")? {
            Value::String(name) if !name.is_empty() => Some(name.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn price(&self) -> Value {
        match self.data.get("price") {
            None | Some(Value::Null) => Value::from(0),
            Some(price) => price.clone(),
        }
    }

    /// Falsy values (null, "", 0, false, [] and {}) are treated as no
    /// bandwidth and later render as `N/A`.
    pub fn bandwidth(&self) -> String {
        match self.data.get("bandwidth") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
            Some(Value::Array(items)) if items.is_empty() => String::new(),
            Some(Value::Object(fields)) if fields.is_empty() => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageSummary {
    pub name: String,
    pub price: Value,
    pub bandwidth: String,
    pub count: usize,
}

impl PackageSummary {
    pub fn bandwidth_label(&self) -> &str {
        if self.bandwidth.is_empty() {
            "N/A"
        } else {
            &self.bandwidth
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub packages: Vec<PackageSummary>,
    pub seeder_source: String,
    pub skipped_records: usize,
}
