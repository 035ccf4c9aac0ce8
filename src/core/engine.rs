use crate::core::report::{run, summarize};
use crate::domain::model::{FuelReport, MissingInputPolicy, ModuleList};
use crate::domain::ports::MassSource;
use crate::utils::error::{FuelError, Result};

pub struct FuelEngine<S: MassSource> {
    source: S,
    missing_input: MissingInputPolicy,
}

impl<S: MassSource> FuelEngine<S> {
    pub fn new(source: S) -> Self {
        Self::new_with_policy(source, MissingInputPolicy::default())
    }

    pub fn new_with_policy(source: S, missing_input: MissingInputPolicy) -> Self {
        Self {
            source,
            missing_input,
        }
    }

    pub fn run(&self) -> Result<FuelReport> {
        tracing::info!("Reading module masses from {}", self.source.describe());

        let report = match self.source.open() {
            // reader is dropped as soon as `run` returns
            Ok(reader) => run(reader)?,
            Err(e @ FuelError::SourceUnavailable { .. })
                if self.missing_input == MissingInputPolicy::Empty =>
            {
                tracing::warn!("{}; continuing with no modules", e);
                summarize(&ModuleList::default())?
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "Computed totals for {} modules: simple={}, recursive={}",
            report.module_count,
            report.simple_total,
            report.recursive_total
        );
        tracing::info!("Fuel report ready");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Cursor;

    struct MockSource {
        content: Option<&'static str>,
        opens: Cell<usize>,
    }

    impl MockSource {
        fn new(content: Option<&'static str>) -> Self {
            Self {
                content,
                opens: Cell::new(0),
            }
        }
    }

    impl MassSource for MockSource {
        type Reader = Cursor<&'static str>;

        fn describe(&self) -> String {
            "mock".to_string()
        }

        fn open(&self) -> Result<Self::Reader> {
            self.opens.set(self.opens.get() + 1);
            match self.content {
                Some(content) => Ok(Cursor::new(content)),
                None => Err(FuelError::SourceUnavailable {
                    path: "mock".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                }),
            }
        }
    }

    #[test]
    fn test_run_reads_source_once() {
        let engine = FuelEngine::new(MockSource::new(Some("12\n14\n1969\n100756\n")));
        let report = engine.run().unwrap();
        assert_eq!(report.totals(), (34241, 51316));
        assert_eq!(engine.source.opens.get(), 1);
    }

    #[test]
    fn test_missing_source_fails_by_default() {
        let engine = FuelEngine::new(MockSource::new(None));
        let err = engine.run().unwrap_err();
        assert!(matches!(err, FuelError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_missing_source_with_empty_policy_yields_zero() {
        let engine =
            FuelEngine::new_with_policy(MockSource::new(None), MissingInputPolicy::Empty);
        let report = engine.run().unwrap();
        assert_eq!(report.totals(), (0, 0));
        assert_eq!(report.module_count, 0);
    }

    #[test]
    fn test_parse_error_is_fatal_even_with_empty_policy() {
        let engine = FuelEngine::new_with_policy(
            MockSource::new(Some("12\nx\n")),
            MissingInputPolicy::Empty,
        );
        assert!(matches!(
            engine.run().unwrap_err(),
            FuelError::ParseError { line: 2, .. }
        ));
    }
}
