use crate::domain::model::{CustomerRecord, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Seeder template settings. Defaults reproduce the Laravel seeder the
/// import has always produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederSettings {
    pub namespace: String,
    pub class_name: String,
    pub model: String,
    pub model_namespace: String,
}

impl Default for SeederSettings {
    fn default() -> Self {
        Self {
            namespace: "Database\\Seeders".to_string(),
            class_name: "ImportPackagesSeeder".to_string(),
            model: "Package".to_string(),
            model_namespace: "App\\Models".to_string(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn report_path(&self) -> Option<&str>;
    fn dry_run(&self) -> bool;
    fn seeder(&self) -> SeederSettings;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CustomerRecord>>;
    async fn transform(&self, data: Vec<CustomerRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
