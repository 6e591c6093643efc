use crate::core::{CustomerRecord, PackageSummary};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub packages: Vec<PackageSummary>,
    pub skipped_records: usize,
}

/// Folds customer records into one summary per package, in first-seen order.
///
/// Price and bandwidth come from the first record carrying a given package
/// name; later records only bump `count`. Records without a package are
/// counted in `skipped_records` and otherwise ignored.
pub fn aggregate_packages(records: &[CustomerRecord]) -> Aggregation {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut aggregation = Aggregation::default();

    for record in records {
        let Some(name) = record.package_name() else {
            aggregation.skipped_records += 1;
            continue;
        };

        match index.get(&name) {
            Some(&position) => aggregation.packages[position].count += 1,
            None => {
                index.insert(name.clone(), aggregation.packages.len());
                aggregation.packages.push(PackageSummary {
                    name,
                    price: record.price(),
                    bandwidth: record.bandwidth(),
                    count: 1,
                });
            }
        }
    }

    aggregation
}
