use crate::core::{PackageSummary, SeederSettings};
use regex::Regex;
use serde_json::Value;
use std::fmt::Write;
use std::sync::LazyLock;

static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("valid numeric regex"));

/// Renders package summaries into a Laravel seeder class that calls
/// `firstOrCreate` once per package.
#[derive(Debug, Clone, Default)]
pub struct SeederTemplate {
    settings: SeederSettings,
}

impl SeederTemplate {
    pub fn new(settings: SeederSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, packages: &[PackageSummary]) -> String {
        let SeederSettings {
            namespace,
            class_name,
            model,
            model_namespace,
        } = &self.settings;

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<?php\n\
             \n\
             namespace {namespace};\n\
             \n\
             use Illuminate\\Database\\Seeder;\n\
             use {model_namespace}\\{model};\n\
             \n\
             class {class_name} extends Seeder\n\
             {{\n\
             \x20   public function run()\n\
             \x20   {{\n\
             \x20       $packages = [\n"
        );

        for package in packages {
            let _ = writeln!(out, "            {}", render_entry(package));
        }

        let _ = write!(
            out,
            "        ];\n\
             \n\
             \x20       foreach ($packages as $pkg) {{\n\
             \x20           {model}::firstOrCreate(\n\
             \x20               ['name' => $pkg['name']],\n\
             \x20               [\n\
             \x20                   'price' => $pkg['price'], \n\
             \x20                   'bandwidth_label' => $pkg['bandwidth_label']\n\
             \x20               ]\n\
             \x20           );\n\
             \x20       }}\n\
             \x20   }}\n\
             }}\n"
        );

        out
    }
}

pub fn render_entry(package: &PackageSummary) -> String {
    format!(
        "['name' => {}, 'price' => {}, 'bandwidth_label' => {}],",
        php_string(&package.name),
        php_price(&package.price),
        php_string(package.bandwidth_label())
    )
}

/// Single-quoted PHP literal. Only `\` and `'` are special inside one.
pub fn php_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

pub fn php_price(price: &Value) -> String {
    match price {
        Value::Null => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) if NUMERIC_LITERAL.is_match(s) => s.clone(),
        Value::String(s) => php_string(s),
        other => php_string(&other.to_string()),
    }
}
