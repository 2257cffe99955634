//! Binary code tree over dit/dah edges.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. The tree is
//! built once from [`CODE_TABLE`] and shared read-only by every decoder.

use std::sync::OnceLock;

use crate::patterns::{MorsePattern, CODE_TABLE};
use crate::types::{Mark, Symbol};

/// Index of a node in a [`MorseTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; 2],
    symbol: Option<Symbol>,
}

#[derive(Debug, Clone)]
pub struct MorseTree {
    nodes: Vec<Node>,
}

static ITU_TREE: OnceLock<MorseTree> = OnceLock::new();

impl MorseTree {
    /// Build the tree for the canonical code table.
    pub fn build() -> Self {
        Self::from_table(&CODE_TABLE)
    }

    /// Process-wide tree for the canonical table, built on first use.
    pub fn itu() -> &'static MorseTree {
        ITU_TREE.get_or_init(Self::build)
    }

    pub fn from_table(table: &[(Symbol, MorsePattern)]) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
        };
        for &(symbol, pattern) in table {
            tree.insert(symbol, pattern);
        }
        tracing::debug!(
            symbols = table.len(),
            nodes = tree.node_count(),
            "built morse code tree"
        );
        tree
    }

    fn insert(&mut self, symbol: Symbol, pattern: MorsePattern) {
        debug_assert!(
            self.lookup(pattern).is_none(),
            "duplicate code for {symbol:?}"
        );
        let mut node = NodeId::ROOT;
        for &mark in pattern {
            node = match self.child(node, mark) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(Node::default());
                    self.nodes[node.0].children[mark as usize] = Some(next);
                    next
                }
            };
        }
        self.nodes[node.0].symbol = Some(symbol);
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow one edge. `None` when the path is not a prefix of any code.
    pub fn child(&self, node: NodeId, mark: Mark) -> Option<NodeId> {
        self.nodes.get(node.0)?.children[mark as usize]
    }

    /// Symbol terminating at `node`, `None` for transit-only nodes and the root.
    pub fn symbol_at(&self, node: NodeId) -> Option<Symbol> {
        self.nodes.get(node.0)?.symbol
    }

    /// Walk a whole mark sequence from the root.
    pub fn lookup(&self, pattern: &[Mark]) -> Option<Symbol> {
        let node = pattern
            .iter()
            .try_fold(self.root(), |node, &mark| self.child(node, mark))?;
        self.symbol_at(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for MorseTree {
    fn default() -> Self {
        Self::build()
    }
}
