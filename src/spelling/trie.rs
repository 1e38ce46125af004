//! Prefix tree over canonical vocabulary words.
//!
//! Nodes live in a flat arena owned by the [`Trie`] and refer to their
//! children by index, so the whole tree is released in one deallocation and
//! dropping a deep trie never recurses.

/// Index of a node inside its owning [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// One position in the shared prefix space.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children sorted by character; lookup is a binary search.
    children: Vec<(char, NodeId)>,
    /// True iff the path from the root spells a stored word.
    terminal: bool,
}

impl TrieNode {
    /// Whether this node ends a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(ch, _)| ch)
            .ok()
            .map(|index| self.children[index].1)
    }

    /// Children in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().copied()
    }
}

/// Arena-backed trie. The root spells the empty string.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Trie {
    const ROOT: NodeId = NodeId(0);

    /// Create an empty trie holding only the root.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert a word. Empty words are ignored so the root is never terminal.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = Self::ROOT;
        for c in word.chars() {
            current = match self.nodes[current.index()]
                .children
                .binary_search_by_key(&c, |&(ch, _)| ch)
            {
                Ok(pos) => self.nodes[current.index()].children[pos].1,
                Err(pos) => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.index()].children.insert(pos, (c, child));
                    child
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    /// Exact membership by walking the path of `word`.
    pub fn contains_exact(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = Self::ROOT;
        for c in word.chars() {
            match self.node(current).child(c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.node(current).terminal
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Borrow a node by id.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
