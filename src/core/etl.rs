use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting package import");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} customer records", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Aggregated {} packages ({} records without a package skipped)",
            result.packages.len(),
            result.skipped_records
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Load finished, output target: {}", output_path);

        Ok(output_path)
    }
}
