use crate::core::aggregate::aggregate_packages;
use crate::core::render::SeederTemplate;
use crate::core::report::render_report;
use crate::core::{ConfigProvider, CustomerRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{Result, SeederError};
use serde_json::Value;

pub const DRY_RUN_TARGET: &str = "<stdout>";

/// Reads the customer export, folds it into packages and writes the seeder.
pub struct SeederPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SeederPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Parses the export. The document must be an array of objects.
pub fn parse_customer_records(bytes: &[u8]) -> Result<Vec<CustomerRecord>> {
    let document: Value = serde_json::from_slice(bytes)?;

    let Value::Array(items) = document else {
        return Err(SeederError::InputFormatError {
            message: "expected a JSON array of customer records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(obj) => Ok(CustomerRecord::new(obj.into_iter().collect())),
            other => Err(SeederError::InputFormatError {
                message: format!(
                    "record {} is not an object (found {})",
                    position,
                    json_kind(&other)
                ),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SeederPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CustomerRecord>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading customer export from: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", bytes.len());

        parse_customer_records(&bytes)
    }

    async fn transform(&self, data: Vec<CustomerRecord>) -> Result<TransformResult> {
        let aggregation = aggregate_packages(&data);

        for package in &aggregation.packages {
            tracing::debug!(
                "Package '{}': price={}, bandwidth={}, customers={}",
                package.name,
                package.price,
                package.bandwidth_label(),
                package.count
            );
        }

        let seeder_source = SeederTemplate::new(self.config.seeder()).render(&aggregation.packages);

        Ok(TransformResult {
            packages: aggregation.packages,
            seeder_source,
            skipped_records: aggregation.skipped_records,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        if self.config.dry_run() {
            tracing::info!("Dry run: printing seeder instead of writing it");
            print!("{}", result.seeder_source);
            return Ok(DRY_RUN_TARGET.to_string());
        }

        let output_path = self.config.output_path();
        tracing::debug!(
            "Writing seeder ({} bytes) to {}",
            result.seeder_source.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.seeder_source.as_bytes())
            .await?;

        if let Some(report_path) = self.config.report_path() {
            let report = render_report(&result.packages)?;
            self.storage.write_file(report_path, &report).await?;
            tracing::info!("Package report written to: {}", report_path);
        }

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::render_entry;
    use crate::core::SeederSettings;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| SeederError::ReadError {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        report_path: Option<String>,
        dry_run: bool,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                report_path: None,
                dry_run: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            "customers.json"
        }

        fn output_path(&self) -> &str {
            "seeders/ImportPackagesSeeder.php"
        }

        fn report_path(&self) -> Option<&str> {
            self.report_path.as_deref()
        }

        fn dry_run(&self) -> bool {
            self.dry_run
        }

        fn seeder(&self) -> SeederSettings {
            SeederSettings::default()
        }
    }

    #[test]
    fn parse_rejects_non_array_documents() {
        let err = parse_customer_records(br#"{"package": "Basic"}"#).unwrap_err();
        assert!(matches!(err, SeederError::InputFormatError { .. }));
    }

    #[test]
    fn parse_rejects_non_object_records() {
        let err = parse_customer_records(br#"[{"package": "Basic"}, 42]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: record 1 is not an object (found number)"
        );
    }

    #[test]
    fn parse_reports_malformed_json() {
        let err = parse_customer_records(b"[{").unwrap_err();
        assert!(matches!(err, SeederError::SerializationError(_)));
    }

    #[test]
    fn falsy_bandwidth_renders_na() {
        let records = parse_customer_records(
            br#"[{"package": "A", "price": 1, "bandwidth": 0},
                 {"package": "B", "price": 2, "bandwidth": false}]"#,
        )
        .unwrap();

        let lines: Vec<String> = aggregate_packages(&records)
            .packages
            .iter()
            .map(render_entry)
            .collect();

        assert_eq!(
            lines,
            vec![
                "['name' => 'A', 'price' => 1, 'bandwidth_label' => 'N/A'],",
                "['name' => 'B', 'price' => 2, 'bandwidth_label' => 'N/A'],",
            ]
        );
    }

    #[tokio::test]
    async fn extract_reads_configured_input() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "customers.json",
                br#"[{"package": "Basic", "price": 100}, {"name": "x"}]"#,
            )
            .await;

        let pipeline = SeederPipeline::new(storage, MockConfig::new());
        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].package_name().as_deref(), Some("Basic"));
    }

    #[tokio::test]
    async fn extract_fails_on_missing_input() {
        let pipeline = SeederPipeline::new(MockStorage::new(), MockConfig::new());
        let err = pipeline.extract().await.unwrap_err();
        assert!(err.to_string().contains("customers.json"));
    }

    #[tokio::test]
    async fn load_writes_seeder_and_report() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "customers.json",
                br#"[
                    {"package": "Basic", "price": 100, "bandwidth": "5M"},
                    {"package": "Basic", "price": 200},
                    {"package": "Pro", "price": 300}
                ]"#,
            )
            .await;

        let config = MockConfig {
            report_path: Some("report.csv".to_string()),
            dry_run: false,
        };
        let pipeline = SeederPipeline::new(storage.clone(), config);

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        let path = pipeline.load(result).await.unwrap();

        assert_eq!(path, "seeders/ImportPackagesSeeder.php");

        let seeder = String::from_utf8(storage.get_file(&path).await.unwrap()).unwrap();
        assert!(seeder.contains(
            "            ['name' => 'Basic', 'price' => 100, 'bandwidth_label' => '5M'],\n"
        ));
        assert!(seeder.contains(
            "            ['name' => 'Pro', 'price' => 300, 'bandwidth_label' => 'N/A'],\n"
        ));

        let report = String::from_utf8(storage.get_file("report.csv").await.unwrap()).unwrap();
        assert_eq!(
            report,
            "name,price,bandwidth_label,count\nBasic,100,5M,2\nPro,300,N/A,1\n"
        );
    }

    #[tokio::test]
    async fn dry_run_does_not_write() {
        let storage = MockStorage::new();
        let config = MockConfig {
            report_path: None,
            dry_run: true,
        };
        let pipeline = SeederPipeline::new(storage.clone(), config);

        let result = pipeline.transform(Vec::new()).await.unwrap();
        let target = pipeline.load(result).await.unwrap();

        assert_eq!(target, DRY_RUN_TARGET);
        assert!(storage.get_file("seeders/ImportPackagesSeeder.php").await.is_none());
    }
}
