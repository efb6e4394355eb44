//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (coloured) nodes and
//! weighted edges.
//!
//! For example, drawing a graph where the two sides of its bipartition are coloured can be
//! achieved via
//! ```
//! # use matgraph::{prelude::*, algo::*, io::*};
//! # let graph = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
//! # let mut writer = Vec::new();
//! let parts = graph.bipartition().unwrap();
//!
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer)?;
//! dot_writer.write_edges(&mut writer, graph.weighted_edges(), None)?;
//! dot_writer.color_nodes(&mut writer, parts.left().iter().copied(), DotColor::Red)?;
//! dot_writer.color_nodes(&mut writer, parts.right().iter().copied(), DotColor::Blue)?;
//! dot_writer.finish_graph(&mut writer)?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Note that for nodes, the latest colouring is the one that will be applied in a visualizer,
//! whereas for edges, each new coloured edge adds another edge to the graph.
use std::{fmt::Display, io::Write};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Attach `[label=w]` to every edge
    weight_labels: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
            weight_labels: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes are written with their index in `0..n`
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// If *false*, edges are drawn without their weight
    pub fn weight_labels(mut self, weight_labels: bool) -> Self {
        self.weight_labels = weight_labels;
        self
    }

    /// Writes the opening brackets of the graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of weighted edges to `writer`, optionally coloured
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I, color: Option<DotColor>) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = WeightedEdge>,
    {
        let mut attributes = Vec::with_capacity(2);
        for edge in edges {
            attributes.clear();
            if self.weight_labels {
                attributes.push(format!("label={}", edge.weight));
            }
            if let Some(c) = color {
                attributes.push(format!("color={c}"));
            }

            write!(
                writer,
                "{}->{}",
                self.format_node(edge.source()),
                self.format_node(edge.target())
            )?;
            if !attributes.is_empty() {
                write!(writer, "[{}]", attributes.join(", "))?;
            }
            writeln!(writer, ";")?;
        }
        Ok(())
    }

    /// Writes a list of coloured nodes to `writer`.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            writeln!(
                writer,
                "{}[style=filled, color={color}];",
                self.format_node(u)
            )?;
        }
        Ok(())
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_edges(&mut writer, graph.weighted_edges(), None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Basic colours of the SVG colour scheme, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Purple,
    Red,
    White,
    Yellow,
}
