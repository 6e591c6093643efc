use crate::core::render::php_price;
use crate::core::PackageSummary;
use crate::utils::error::{Result, SeederError};

/// CSV summary of the aggregated packages. This is the only place the
/// per-package customer count is surfaced.
pub fn render_report(packages: &[PackageSummary]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "price", "bandwidth_label", "count"])?;

    for package in packages {
        let price = match &package.price {
            serde_json::Value::String(s) => s.clone(),
            other => php_price(other),
        };
        writer.write_record([
            package.name.as_str(),
            price.as_str(),
            package.bandwidth_label(),
            package.count.to_string().as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| SeederError::IoError(e.into_error()))
}
