use crate::core::columns::ColumnSelector;
use crate::core::scoring::EmptyInterestPolicy;
use crate::domain::model::{MatchReport, SurveyData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Resolves a file-name substring to the path of the first matching file.
    fn find_file(&self, pattern: &str)
        -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn mentee_file(&self) -> &str;
    fn mentor_file(&self) -> &str;
    fn mentee_columns(&self) -> &[ColumnSelector];
    fn mentor_columns(&self) -> &[ColumnSelector];
    fn name_column(&self) -> Option<&ColumnSelector>;
    fn has_index_column(&self) -> bool;
    fn empty_interest_policy(&self) -> EmptyInterestPolicy;
    fn lowercase_interests(&self) -> bool;
    fn output_name(&self) -> &str;

    fn output_file(&self) -> String {
        format!("{}.csv", self.output_name().to_lowercase())
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SurveyData>;
    async fn transform(&self, data: SurveyData) -> Result<MatchReport>;
    async fn load(&self, report: &MatchReport) -> Result<String>;
}
