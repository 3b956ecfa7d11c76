// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bundled sample datasets, resolved under a configurable directory.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::format::{ingest, GraphFormat, ParseError};
use crate::model::{Canvas, GraphDocument};
use crate::suggest::closest_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub key: &'static str,
    pub title: &'static str,
    pub file_name: &'static str,
}

impl Sample {
    pub fn format(&self) -> Result<GraphFormat, ParseError> {
        GraphFormat::from_path(self.file_name)
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name)
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        key: "eurosis",
        title: "EuroSiS",
        file_name: "eurosis.gexf",
    },
    Sample {
        key: "diseasome",
        title: "Diseasome",
        file_name: "diseasome.gexf",
    },
    Sample {
        key: "celegans",
        title: "C. elegans neural network",
        file_name: "celegans.gexf",
    },
    Sample {
        key: "java",
        title: "Java class dependencies",
        file_name: "java.gexf",
    },
    Sample {
        key: "lesmis",
        title: "Les Misérables",
        file_name: "les-miserables.gexf",
    },
    Sample {
        key: "powergrid",
        title: "US power grid",
        file_name: "power-grid.gexf",
    },
    Sample {
        key: "got",
        title: "Game of Thrones",
        file_name: "game-of-thrones.graphml",
    },
    Sample {
        key: "marvel",
        title: "Marvel universe",
        file_name: "marvel.graphml",
    },
    Sample {
        key: "quakers",
        title: "Quakers",
        file_name: "quakers.graphml",
    },
];

#[derive(Debug)]
pub enum SampleError {
    Unknown {
        key: String,
        suggestion: Option<String>,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: Box<ParseError>,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { key, suggestion } => {
                write!(f, "unknown sample: {key}")?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
            Self::Io { path, source } => write!(f, "cannot read sample {path:?}: {source}"),
            Self::Parse { path, source } => write!(f, "cannot parse sample {path:?}: {source}"),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unknown { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source.as_ref()),
        }
    }
}

pub fn find_sample(key: &str) -> Result<&'static Sample, SampleError> {
    let needle = key.trim().to_ascii_lowercase();
    SAMPLES
        .iter()
        .find(|sample| sample.key == needle)
        .ok_or_else(|| SampleError::Unknown {
            key: key.to_owned(),
            suggestion: closest_match(&needle, SAMPLES.iter().map(|sample| sample.key))
                .map(str::to_owned),
        })
}

/// Reads and ingests the sample `key` from `dir`.
pub fn load_sample(dir: &Path, key: &str, canvas: Canvas) -> Result<GraphDocument, SampleError> {
    let sample = find_sample(key)?;
    let path = sample.path_in(dir);
    let parse_error = |source: ParseError| SampleError::Parse {
        path: path.clone(),
        source: Box::new(source),
    };

    let format = sample.format().map_err(parse_error)?;
    let text = std::fs::read_to_string(&path).map_err(|source| SampleError::Io {
        path: path.clone(),
        source,
    })?;
    let document = ingest(&text, format, canvas).map_err(parse_error)?;
    tracing::info!(sample = sample.key, path = %path.display(), "loaded sample");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;

    use super::{find_sample, load_sample, SampleError, SAMPLES};
    use crate::config::SamplesConfig;
    use crate::format::GraphFormat;
    use crate::model::Canvas;

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let path = std::env::temp_dir().join(format!(
                "netweave-{prefix}-{}-{counter}",
                std::process::id()
            ));
            std::fs::create_dir_all(&path).expect("create temp dir");
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn catalog_formats_follow_extensions() {
        let gexf = SAMPLES
            .iter()
            .filter(|sample| sample.format().ok() == Some(GraphFormat::Gexf))
            .count();
        let graphml = SAMPLES
            .iter()
            .filter(|sample| sample.format().ok() == Some(GraphFormat::GraphMl))
            .count();
        assert_eq!((gexf, graphml), (6, 3));
    }

    #[rstest]
    #[case("lesmis", "data/samples/les-miserables.gexf")]
    #[case("powergrid", "data/samples/power-grid.gexf")]
    #[case("got", "data/samples/game-of-thrones.graphml")]
    #[case("eurosis", "data/samples/eurosis.gexf")]
    fn keys_resolve_under_the_default_dir(#[case] key: &str, #[case] expected: &str) {
        let dir = SamplesConfig::default().dir;
        let sample = find_sample(key).expect("known sample");
        assert_eq!(sample.path_in(&dir), PathBuf::from(expected));
    }

    #[test]
    fn unknown_sample_suggests_closest_key() {
        let err = find_sample("lesmiz").unwrap_err();
        assert!(matches!(
            err,
            SampleError::Unknown { ref suggestion, .. } if suggestion.as_deref() == Some("lesmis")
        ));
    }

    #[test]
    fn loads_sample_from_directory() {
        let tmp = TempDir::new("samples");
        std::fs::write(
            tmp.path.join("quakers.graphml"),
            r#"<graphml><graph><node id="fox"/><node id="penn"/><edge source="fox" target="penn"/></graph></graphml>"#,
        )
        .expect("write sample");

        let doc = load_sample(&tmp.path, "Quakers", Canvas::default()).expect("sample");
        assert_eq!(doc.nodes().len(), 2);
        assert_eq!(doc.edges().len(), 1);
    }

    #[test]
    fn missing_sample_file_is_io_error() {
        let tmp = TempDir::new("samples-missing");
        let err = load_sample(&tmp.path, "got", Canvas::default()).unwrap_err();
        assert!(matches!(err, SampleError::Io { .. }));
    }
}
