//! Asynchronous and parallel scanning front-ends.
//!
//! A [`Scanner`](crate::Scanner) is synchronous and owns its cursor, so
//! concurrent scanning simply means one scanner per source. These wrappers
//! add async file loading and a thread pool on top of that.
//!
//! # Example
//!
//! ```ignore
//! use lox_lexer::AsyncScanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = AsyncScanner::new();
//!     let output = scanner.scan_file("script.lox").await.unwrap();
//!     println!("{} tokens", output.tokens.len());
//! }
//! ```

#[cfg(feature = "async")]
use std::path::Path;

#[cfg(feature = "async")]
use tokio::fs;

#[cfg(feature = "async")]
use crate::Error;
use crate::{ScanOutput, tokenize};

/// Loads source files without blocking and scans them.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncScanner;

#[cfg(feature = "async")]
impl AsyncScanner {
    /// Creates a new async scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scans source text. Scanning itself never suspends.
    pub async fn scan(&self, source: &str) -> ScanOutput {
        tokenize(source)
    }

    /// Reads a file with tokio's async file I/O and scans it.
    pub async fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanOutput, Error> {
        let path = path.as_ref();

        let source = fs::read_to_string(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "scanning file");
        Ok(self.scan(&source).await)
    }

    /// Scans several files concurrently.
    ///
    /// Results come back in the same order as `paths`.
    pub async fn scan_files(&self, paths: &[impl AsRef<Path>]) -> Vec<Result<ScanOutput, Error>> {
        let futures: Vec<_> = paths.iter().map(|p| self.scan_file(p)).collect();

        futures::future::join_all(futures).await
    }
}

/// Scans many sources on a rayon thread pool.
#[cfg(feature = "parallel")]
pub struct ParallelScanner {
    /// Thread pool for CPU-bound work
    pool: rayon::ThreadPool,
}

#[cfg(feature = "parallel")]
impl ParallelScanner {
    /// Creates a parallel scanner with the default number of threads.
    pub fn new() -> Result<Self, crate::Error> {
        Self::build(rayon::ThreadPoolBuilder::new())
    }

    /// Creates a parallel scanner with a specific number of threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, crate::Error> {
        Self::build(rayon::ThreadPoolBuilder::new().num_threads(num_threads))
    }

    fn build(builder: rayon::ThreadPoolBuilder) -> Result<Self, crate::Error> {
        let pool = builder
            .build()
            .map_err(|e| crate::Error::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Scans each source with its own scanner.
    ///
    /// Results come back in the same order as `sources`.
    pub fn scan_parallel(&self, sources: &[&str]) -> Vec<ScanOutput> {
        use rayon::prelude::*;

        self.pool
            .install(|| sources.par_iter().map(|source| tokenize(source)).collect())
    }
}
