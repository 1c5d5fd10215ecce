//! Initial tree data.
//!
//! Seeds describe a tree without ids; ids are assigned when the tree is built
//! so they always come from the same never-reused counter as inserted nodes.
//!
//! ```json
//! [
//!   { "name": "src", "type": "folder", "children": [
//!     { "name": "main.rs", "type": "file" }
//!   ] }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::node::{Node, NodeKind};
use crate::tree::Tree;

/// Description of one node in the initial tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Seed>>,
}

impl Seed {
    pub fn folder(name: impl Into<String>, children: Vec<Seed>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children: Some(children),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    fn build(&self) -> Result<Node, SeedError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SeedError::EmptyName);
        }

        match self.kind {
            NodeKind::Folder => {
                let children = self
                    .children
                    .iter()
                    .flatten()
                    .map(Seed::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::folder_with(name, children))
            }
            NodeKind::File => {
                if self.children.is_some() {
                    return Err(SeedError::FileWithChildren(name.to_string()));
                }
                Ok(Node::file(name))
            }
        }
    }
}

impl Tree {
    /// Build a tree from seeds, assigning fresh ids.
    pub fn from_seeds(seeds: &[Seed]) -> Result<Tree, SeedError> {
        let roots = seeds.iter().map(Seed::build).collect::<Result<Vec<_>, _>>()?;
        Ok(Tree::new(roots))
    }
}

/// Parse a JSON array of seeds.
pub fn parse_seeds(json: &str) -> Result<Vec<Seed>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of seeds from `path`.
pub fn load_seeds(path: &Path) -> Result<Vec<Seed>, SeedError> {
    let json = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seeds(&json)
}

/// Small demo project used when no tree is supplied.
pub fn sample() -> Vec<Seed> {
    vec![
        Seed::folder(
            "src",
            vec![
                Seed::folder(
                    "components",
                    vec![Seed::file("Header.js"), Seed::file("Footer.js")],
                ),
                Seed::folder("pages", vec![Seed::file("Home.js"), Seed::file("About.js")]),
            ],
        ),
        Seed::folder(
            "public",
            vec![Seed::file("index.html"), Seed::file("favicon.ico")],
        ),
    ]
}
