use crate::core::loader::parse_user_table;
use crate::core::report::render_markdown;
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult, UserAnalysis, UserTable};
use crate::domain::model::SalarySummary;
use crate::domain::services::{count_email_domains, rank_occupations};
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::same_path_error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct UserAnalysisPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UserAnalysisPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn analyze(&self, table: &UserTable) -> Result<UserAnalysis> {
        let salary = SalarySummary::from_salaries(&table.salaries()).ok_or_else(|| {
            AnalysisError::ProcessingError {
                message: "cannot compute salary statistics of an empty table".to_string(),
            }
        })?;

        let (top_occupations, missing_occupation) =
            rank_occupations(table, self.config.top_occupations());
        let (email_domains, missing_domain) = count_email_domains(table);

        Ok(UserAnalysis {
            total_users: table.len(),
            salary,
            top_occupations,
            email_domains,
            missing_occupation,
            missing_domain,
            salary_kind: table.salary_kind(),
        })
    }

    /// Config validation only sees the raw strings; the storage knows where
    /// they actually point.
    fn ensure_output_is_not_input(&self) -> Result<()> {
        let (input, output) = (self.config.input_path(), self.config.output_path());
        if self.storage.same_location(input, output) {
            return Err(same_path_error(output));
        }
        Ok(())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for UserAnalysisPipeline<S, C> {
    fn extract(&self) -> Result<UserTable> {
        self.ensure_output_is_not_input()?;

        let path = self.config.input_path();
        tracing::debug!("Reading user data from: {}", path);

        // 整個檔案讀入記憶體後才解析，檔案句柄不會延續到解析階段
        let data = self.storage.read_file(path)?;
        let content = data.strip_prefix(UTF8_BOM).unwrap_or(&data);
        if content.iter().all(u8::is_ascii_whitespace) {
            return Err(AnalysisError::EmptyInput {
                path: path.to_string(),
            });
        }

        parse_user_table(content, path)
    }

    fn transform(&self, table: UserTable) -> Result<TransformResult> {
        let analysis = self.analyze(&table)?;

        if analysis.missing_occupation > 0 {
            tracing::warn!(
                "⚠️ {} row(s) have no occupation and are left out of the ranking",
                analysis.missing_occupation
            );
        }
        if analysis.missing_domain > 0 {
            tracing::warn!(
                "⚠️ {} row(s) have no '@' in their email and are left out of the domain counts",
                analysis.missing_domain
            );
        }
        tracing::debug!(
            "Salary summary: min={} max={} mean={:.2} median={}",
            analysis.salary.min,
            analysis.salary.max,
            analysis.salary.mean,
            analysis.salary.median
        );

        let markdown = render_markdown(&analysis, self.config.top_occupations());
        Ok(TransformResult { analysis, markdown })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        self.ensure_output_is_not_input()?;
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing report ({} bytes) to: {}",
            result.markdown.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.markdown.as_bytes())?;

        Ok(output_path.to_string())
    }
}
