use treedit_lib::{Action, Node, Tree, ViewState, outline};

fn tree() -> Tree {
    Tree::new(vec![
        Node::folder_with(
            "src",
            vec![
                Node::folder_with("bin", vec![Node::file("cli.rs")]),
                Node::file("lib.rs"),
            ],
        ),
        Node::file("Cargo.toml"),
    ])
}

fn names(rows: &[treedit_lib::Row]) -> Vec<(usize, &str)> {
    rows.iter().map(|r| (r.depth, r.name.as_str())).collect()
}

#[test]
fn test_expanded_tree_shows_everything() {
    let tree = tree();
    let view = ViewState::for_tree(&tree);

    let rows = outline(&tree, &view);

    assert_eq!(
        names(&rows),
        vec![(0, "src"), (1, "bin"), (2, "cli.rs"), (1, "lib.rs"), (0, "Cargo.toml")]
    );
}

#[test]
fn test_collapsed_folder_hides_children() {
    let tree = tree();
    let mut view = ViewState::for_tree(&tree);
    let bin = tree.roots()[0].children()[0].id();
    view.collapse(bin);

    let rows = outline(&tree, &view);

    assert_eq!(names(&rows), vec![(0, "src"), (1, "bin"), (1, "lib.rs"), (0, "Cargo.toml")]);
    assert_eq!(rows[1].expanded, Some(false));
}

#[test]
fn test_collapsed_root_hides_nested_expanded_folders() {
    let tree = tree();
    let mut view = ViewState::for_tree(&tree);
    view.collapse(tree.roots()[0].id());

    let rows = outline(&tree, &view);

    assert_eq!(names(&rows), vec![(0, "src"), (0, "Cargo.toml")]);
}

#[test]
fn test_row_flags() {
    let tree = tree();
    let mut view = ViewState::for_tree(&tree);
    let cargo = tree.roots()[1].id();
    view.set_editing(cargo, true);

    let rows = outline(&tree, &view);
    let cargo_row = rows.last().unwrap();

    assert_eq!(cargo_row.expanded, None);
    assert!(cargo_row.editing);
    assert!(!rows[0].editing);
}

#[test]
fn test_actions_per_kind() {
    let tree = tree();
    let view = ViewState::for_tree(&tree);
    let rows = outline(&tree, &view);

    assert_eq!(
        rows[0].actions(),
        &[Action::AddFolder, Action::AddFile, Action::Rename, Action::Delete]
    );
    assert_eq!(rows[2].actions(), &[Action::AddFile, Action::Rename, Action::Delete]);
}

#[test]
fn test_indent() {
    let tree = tree();
    let view = ViewState::for_tree(&tree);
    let rows = outline(&tree, &view);

    assert_eq!(rows[0].indent(2), "");
    assert_eq!(rows[2].indent(2), "    ");
}

#[test]
fn test_empty_tree() {
    assert!(outline(&Tree::empty(), &ViewState::new()).is_empty());
}
