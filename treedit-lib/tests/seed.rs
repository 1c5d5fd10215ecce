use std::collections::HashSet;

use treedit_lib::seed::{load_seeds, parse_seeds, sample};
use treedit_lib::{NodeKind, Seed, SeedError, Tree};

#[test]
fn test_parse_nested_json() {
    let seeds = parse_seeds(
        r#"[
            { "name": "src", "type": "folder", "children": [
                { "name": "main.rs", "type": "file" },
                { "name": "empty", "type": "folder" }
            ] },
            { "name": "LICENSE", "type": "file" }
        ]"#,
    )
    .unwrap();

    let tree = Tree::from_seeds(&seeds).unwrap();

    assert_eq!(tree.len(), 2);
    let src = &tree.roots()[0];
    assert_eq!(src.kind(), NodeKind::Folder);
    assert_eq!(src.children()[0].name(), "main.rs");
    assert!(src.children()[1].is_folder());
    assert!(src.children()[1].children().is_empty());
}

#[test]
fn test_file_with_children_rejected() {
    let seeds = vec![Seed {
        name: "a.txt".into(),
        kind: NodeKind::File,
        children: Some(vec![]),
    }];
    assert!(matches!(
        Tree::from_seeds(&seeds),
        Err(SeedError::FileWithChildren(name)) if name == "a.txt"
    ));
}

#[test]
fn test_blank_name_rejected() {
    let seeds = vec![Seed::folder("ok", vec![Seed::file("  ")])];
    assert!(matches!(Tree::from_seeds(&seeds), Err(SeedError::EmptyName)));
}

#[test]
fn test_unknown_type_rejected() {
    let result = parse_seeds(r#"[{ "name": "x", "type": "symlink" }]"#);
    assert!(matches!(result, Err(SeedError::Json(_))));
}

#[test]
fn test_missing_file() {
    let result = load_seeds(std::path::Path::new("/definitely/not/here.json"));
    assert!(matches!(result, Err(SeedError::Io { .. })));
}

#[test]
fn test_sample_tree() {
    let tree = Tree::from_seeds(&sample()).unwrap();
    let ids = tree.ids();
    let unique: HashSet<_> = ids.iter().collect();

    assert_eq!(ids.len(), 10);
    assert_eq!(unique.len(), 10);
    assert_eq!(tree.roots()[0].name(), "src");
    assert_eq!(tree.roots()[1].name(), "public");
}

#[test]
fn test_building_twice_gives_fresh_ids() {
    let a = Tree::from_seeds(&sample()).unwrap();
    let b = Tree::from_seeds(&sample()).unwrap();
    let a_ids: HashSet<_> = a.ids().into_iter().collect();
    assert!(b.ids().iter().all(|id| !a_ids.contains(id)));
}
