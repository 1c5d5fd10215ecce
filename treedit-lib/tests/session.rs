use std::cell::RefCell;

use treedit_lib::{Intent, Node, NodeId, NodeKind, Session, ThemeMode, Tree};

fn yes(_: &str) -> bool {
    true
}

fn no(_: &str) -> bool {
    false
}

fn session() -> Session {
    Session::new(Tree::new(vec![
        Node::folder_with("src", vec![Node::file("main.rs")]),
        Node::file("README.md"),
    ]))
}

fn id_of(session: &Session, name: &str) -> NodeId {
    session
        .tree()
        .depth_first()
        .find(|(_, node)| node.name() == name)
        .map(|(_, node)| node.id())
        .unwrap_or_else(|| panic!("no node named {name}"))
}

#[test]
fn test_add_expands_target_folder() {
    let mut session = session();
    let src = id_of(&session, "src");
    session.dispatch(Intent::ToggleExpanded(src), &mut yes);
    assert!(!session.view().is_expanded(src));

    assert!(session.dispatch(Intent::AddFolder(src), &mut yes));

    assert!(session.view().is_expanded(src));
    let new = session.last_inserted().unwrap();
    assert_eq!(session.tree().find(new).unwrap().name(), "New Folder");
    assert!(session.view().is_expanded(new));
}

#[test]
fn test_add_from_file_row_targets_parent() {
    let mut session = session();
    let src = id_of(&session, "src");
    let main = id_of(&session, "main.rs");

    assert!(session.dispatch(Intent::AddFile(main), &mut yes));

    let children = session.tree().find(src).unwrap().children().to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].name(), "New File.txt");
}

#[test]
fn test_add_from_root_file_is_noop() {
    let mut session = session();
    let readme = id_of(&session, "README.md");
    let before = session.tree().clone();

    assert!(!session.dispatch(Intent::AddFile(readme), &mut yes));
    assert_eq!(session.tree(), &before);
    assert_eq!(session.last_inserted(), None);
}

#[test]
fn test_add_root() {
    let mut session = Session::new(Tree::empty());

    assert!(session.dispatch(Intent::AddRoot(NodeKind::Folder), &mut yes));

    assert_eq!(session.rows().len(), 1);
    assert!(session.rows()[0].is_folder());
}

#[test]
fn test_rename_flow() {
    let mut session = session();
    let main = id_of(&session, "main.rs");

    session.dispatch(Intent::StartRename(main), &mut yes);
    assert!(session.view().is_editing(main));

    assert!(session.dispatch(Intent::CommitRename(main, " lib.rs ".into()), &mut yes));

    assert!(!session.view().is_editing(main));
    assert_eq!(session.tree().find(main).unwrap().name(), "lib.rs");
}

#[test]
fn test_empty_rename_discarded_and_exits_editing() {
    let mut session = session();
    let main = id_of(&session, "main.rs");
    session.dispatch(Intent::StartRename(main), &mut yes);

    session.dispatch(Intent::CommitRename(main, "   ".into()), &mut yes);

    assert!(!session.view().is_editing(main));
    assert_eq!(session.tree().find(main).unwrap().name(), "main.rs");
}

#[test]
fn test_cancel_rename() {
    let mut session = session();
    let main = id_of(&session, "main.rs");
    session.dispatch(Intent::StartRename(main), &mut yes);

    assert!(session.dispatch(Intent::CancelRename(main), &mut yes));
    assert_eq!(session.view().editing(), None);
}

#[test]
fn test_starting_rename_ends_other_rename() {
    let mut session = session();
    let main = id_of(&session, "main.rs");
    let src = id_of(&session, "src");

    session.dispatch(Intent::StartRename(main), &mut yes);
    session.dispatch(Intent::StartRename(src), &mut yes);

    assert_eq!(session.view().editing(), Some(src));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let mut session = session();
    let main = id_of(&session, "main.rs");
    let asked = RefCell::new(Vec::new());
    let mut confirm = |message: &str| {
        asked.borrow_mut().push(message.to_string());
        false
    };

    assert!(!session.dispatch(Intent::Delete(main), &mut confirm));

    assert_eq!(
        asked.borrow().as_slice(),
        ["Are you sure you want to delete main.rs?".to_string()]
    );
    assert!(session.tree().contains(main));
}

#[test]
fn test_delete_declined_changes_nothing() {
    let mut session = session();
    let src = id_of(&session, "src");
    let before = session.tree().clone();

    assert!(!session.dispatch(Intent::Delete(src), &mut no));
    assert_eq!(session.tree(), &before);
    assert!(session.view().contains(src));
}

#[test]
fn test_delete_purges_view_state() {
    let mut session = session();
    let src = id_of(&session, "src");
    let main = id_of(&session, "main.rs");
    session.dispatch(Intent::AddFolder(src), &mut yes);
    let added = session.last_inserted().unwrap();
    session.dispatch(Intent::StartRename(main), &mut yes);

    assert!(session.dispatch(Intent::Delete(src), &mut yes));

    for id in [src, main, added] {
        assert!(!session.tree().contains(id));
        assert!(!session.view().contains(id));
    }
    assert_eq!(session.view().editing(), None);
    assert_eq!(session.last_inserted(), None);
    assert_eq!(session.view().len(), 1);
}

#[test]
fn test_stale_intents_are_noops() {
    let mut session = session();
    let main = id_of(&session, "main.rs");
    session.dispatch(Intent::Delete(main), &mut yes);
    let before = session.tree().clone();

    assert!(!session.dispatch(Intent::Delete(main), &mut yes));
    assert!(!session.dispatch(Intent::AddFile(main), &mut yes));
    assert!(!session.dispatch(Intent::CommitRename(main, "x".into()), &mut yes));
    assert!(!session.dispatch(Intent::ToggleExpanded(main), &mut yes));
    assert_eq!(session.tree(), &before);
}

#[test]
fn test_toggle_theme() {
    let mut session = session().with_theme(ThemeMode::Light);

    assert!(session.dispatch(Intent::ToggleTheme, &mut yes));
    assert_eq!(session.theme(), ThemeMode::Dark);
    assert!(session.dispatch(Intent::ToggleTheme, &mut yes));
    assert_eq!(session.theme(), ThemeMode::Light);
}
