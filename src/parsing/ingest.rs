use rayon::prelude::*;
use std::path::PathBuf;

use crate::core::error::Result;
use crate::parsing::parser::SampleParser;
use crate::stats::Aggregator;

/// Parse every report and accumulate all samples into one aggregator.
///
/// Each report is parsed into its own shard in parallel; shards are merged
/// in the order the paths were given. The first failing report aborts the
/// whole ingestion.
pub fn ingest_paths<P>(parser: &P, paths: &[PathBuf]) -> Result<Aggregator>
where
    P: SampleParser + Sync,
{
    let shards: Vec<Aggregator> = paths
        .par_iter()
        .map(|path| -> Result<Aggregator> {
            let samples = parser.parse_path(path)?;
            Ok(samples.into_iter().collect())
        })
        .collect::<Result<Vec<_>>>()?;

    let mut aggregator = Aggregator::new();
    for shard in shards {
        aggregator.merge(shard);
    }
    Ok(aggregator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ReportError;
    use crate::parsing::RecordParser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn report(content: &str) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_ingest_merges_reports() -> TestResult {
        let first = report("a x x x 1 x 10\nt t t 0.5\n\na x x x 1 x 10\nt t t 1.5\n\n")?;
        let second = report("a x x x 1 x 10\nt t t 1.0\n0.01\nb x x x 1 x 10\nt t t 2.0\n\n")?;
        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];

        let aggregator = ingest_paths(&RecordParser::default(), &paths)?;
        assert_eq!(aggregator.len(), 4);

        let aggregate = aggregator.finalize()?;
        assert_eq!(aggregate.cell("a", 1, 10)?.trials(), 3);
        assert_eq!(aggregate.cell("a", 1, 10)?.elapsed().mean(), 1.0);
        assert_eq!(aggregate.cell("b", 1, 10)?.trials(), 1);
        Ok(())
    }

    #[test]
    fn test_ingest_fails_on_any_malformed_report() -> TestResult {
        let good = report("a x x x 1 x 10\nt t t 0.5\n\n")?;
        let bad = report("a x x x 1 x ten\nt t t 0.5\n\n")?;
        let paths = vec![good.path().to_path_buf(), bad.path().to_path_buf()];

        let result = ingest_paths(&RecordParser::default(), &paths);
        assert!(matches!(result, Err(ReportError::MalformedRecord { .. })));
        Ok(())
    }

    #[test]
    fn test_ingest_no_paths_yields_empty_aggregator() -> TestResult {
        let aggregator = ingest_paths(&RecordParser::default(), &[])?;
        assert!(aggregator.is_empty());
        Ok(())
    }
}
