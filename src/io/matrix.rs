//! # Matrix
//!
//! The Matrix-Format stores the adjacency matrix of a graph row by row: every non-comment-line
//! holds the weights `w(u, 0) ... w(u, n - 1)` of one node `u` separated by whitespace. The
//! number of lines determines `n`, so there is no header. Empty lines are skipped.
//!
//! ```text
//! c a directed triangle
//! 0 1 0
//! 0 0 -3
//! 1 0 0
//! ```

use std::io::{BufRead, ErrorKind, Write};

use itertools::Itertools;
use tracing::debug;

use super::*;

/// A GraphReader for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl MatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> MatrixReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses a single row of weights; `line_no` is only used for error messages
    fn parse_row(line: &str, line_no: usize) -> Result<Vec<Weight>> {
        line.split_whitespace()
            .map(|token| {
                token.parse::<Weight>().map_err(|_| {
                    io_error!(
                        ErrorKind::InvalidData,
                        format!("Invalid weight `{token}` in line {line_no}.")
                    )
                })
            })
            .collect()
    }
}

impl GraphReader<GraphMatrix> for MatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<GraphMatrix> {
        let mut rows = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with(&self.comment_identifier) || line.trim().is_empty() {
                continue;
            }
            rows.push(Self::parse_row(&line, line_no + 1)?);
        }

        debug!(rows = rows.len(), "parsed matrix input");
        Ok(GraphMatrix::from_matrix(rows)?)
    }
}

/// Trait for creating graphs from a MatrixReader.
/// Used as shorthand for default MatrixReader settings
pub trait MatrixRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl MatrixRead for GraphMatrix {
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self> {
        MatrixReader::default().try_read_graph(reader)
    }
}

/// A GraphWriter for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixWriter {
    /// Prefix of the optional summary line
    comment_identifier: String,
    /// Write `summary()` as a comment before the rows
    summary: bool,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
            summary: false,
        }
    }
}

impl MatrixWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier used for the summary line
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> MatrixWriter {
        self.comment_identifier = c.into();
        self
    }

    /// If *true*, a comment line holding the graph's summary precedes the rows
    pub fn summary(mut self, summary: bool) -> MatrixWriter {
        self.summary = summary;
        self
    }
}

impl GraphWriter<GraphMatrix> for MatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &GraphMatrix, mut writer: W) -> Result<()> {
        if self.summary {
            writeln!(writer, "{} {}", self.comment_identifier, graph.summary())?;
        }

        for row in graph.matrix() {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }
        writer.flush()
    }
}

/// Trait for writing a graph in the Matrix-Format.
/// Shorthand for default settings.
pub trait MatrixWrite {
    /// Tries to write the graph to a writer
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_matrix(BufWriter::new(File::create(path)?))
    }
}

impl MatrixWrite for GraphMatrix {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()> {
        MatrixWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn read_with_comments() {
        let input = "c first\n0 1 0\n\nc second\n0 0 -3\n1   0 0\n";
        let graph = GraphMatrix::try_read_matrix(input.as_bytes()).unwrap();
        assert_eq!(
            graph.matrix(),
            &[vec![0, 1, 0], vec![0, 0, -3], vec![1, 0, 0]]
        );
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "# note\n2 0\n0 2\n";
        let graph: GraphMatrix = MatrixReader::new()
            .comment_identifier("#")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(graph.edge_count(), 2);

        assert!(GraphMatrix::try_read_matrix(input.as_bytes()).is_err());
    }

    #[test]
    fn empty_input() {
        let graph = GraphMatrix::try_read_matrix("c nothing\n".as_bytes()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn reject_invalid_input() {
        let err = GraphMatrix::try_read_matrix("0 1\n0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let err = GraphMatrix::try_read_matrix("0 x\n0 0\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn write_with_summary() {
        let graph = GraphMatrix::from_matrix(vec![vec![0, 4], vec![-1, 0]]).unwrap();

        let mut buffer = Vec::new();
        MatrixWriter::new()
            .summary(true)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "c Graph with 2 vertices and 2 edges.\n0 4\n-1 0\n"
        );
    }

    #[test]
    fn write_and_read() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..20 {
            let n = rng.random_range(0..12);
            let graph = random_graph(rng, n, 0.4);

            let mut buffer = Vec::new();
            MatrixWriter::new()
                .summary(rng.random_bool(0.5))
                .try_write_graph(&graph, &mut buffer)
                .unwrap();

            let read = GraphMatrix::try_read_matrix(buffer.as_slice()).unwrap();
            assert_eq!(read, graph);
        }
    }
}
