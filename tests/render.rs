use std::fs;

use proptest::prelude::*;
use stencil::render::{self, strip_ansi};
use stencil::tree::Directory;
use tempfile::TempDir;

fn plain(dir: &Directory) -> Vec<String> {
    render::plain_lines(dir).collect()
}

#[test]
fn connectors_branch_then_terminal() {
    let mut root = Directory::new("root");
    root.add_file("a", None, None);
    root.add_file("b", None, None);
    root.add_file("c", None, None);

    assert_eq!(plain(&root), ["├── a", "├── b", "└── c"]);
}

#[test]
fn last_parent_contributes_spacing_non_last_contributes_pipe() {
    let mut root = Directory::new("root");
    root.add_directory("first");
    root.dir_mut("first").unwrap().add_file("x", None, None);
    root.add_directory("second");
    root.dir_mut("second").unwrap().add_file("y", None, None);

    assert_eq!(
        plain(&root),
        [
            "├── first",
            "│   └── x",
            "└── second",
            "    └── y",
        ]
    );
}

#[test]
fn nested_single_child_uses_spacing_and_terminal() {
    let mut root = Directory::new("root");
    root.add_file("hello.txt", Some("hi".into()), None);
    root.add_directory("sub");
    root.dir_mut("sub").unwrap().add_file("x.py", None, None);

    assert_eq!(
        plain(&root),
        ["├── hello.txt", "└── sub", "    └── x.py"]
    );
}

#[test]
fn ignored_names_never_render_at_any_depth() {
    let mut root = Directory::new("root");
    root.add_directory(".git");
    root.add_file("keep.txt", None, None);
    root.add_directory("nested");
    let nested = root.dir_mut("nested").unwrap();
    nested.add_directory("__pycache__");
    nested.add_file("env", None, None);
    nested.add_file("inner.txt", None, None);

    let lines = plain(&root);
    assert_eq!(lines, ["├── keep.txt", "└── nested", "    └── inner.txt"]);
}

#[test]
fn an_ignored_final_entry_still_makes_its_predecessor_terminal() {
    let mut root = Directory::new("root");
    root.add_file("a", None, None);
    root.add_directory("venv");

    assert_eq!(plain(&root), ["└── a"]);
}

#[test]
fn rendering_is_restartable() {
    let mut root = Directory::new("root");
    root.add_file("a.py", None, None);
    root.add_directory("sub");

    let first: Vec<_> = render::tree_lines(&root).collect();
    let second: Vec<_> = render::tree_lines(&root).collect();
    assert_eq!(first, second);
}

#[test]
fn colorized_lines_carry_escapes_plain_lines_do_not() {
    let mut root = Directory::new("root");
    root.add_file("a.py", None, None);

    let colorized: Vec<_> = render::tree_lines(&root).collect();
    assert!(colorized[0].contains('\u{1b}'));
    assert!(!plain(&root)[0].contains('\u{1b}'));
}

#[test]
fn strip_ansi_removes_csi_sequences() {
    assert_eq!(strip_ansi("\u{1b}[1;38;2;0;255;255mfoo\u{1b}[0m"), "foo");
    assert_eq!(strip_ansi("no escapes"), "no escapes");
}

#[test]
fn streaming_render_matches_the_visual_contract() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/b.txt"), "").unwrap();

    let lines: Vec<_> = render::plain_from_path(&root)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, ["└── a", "    └── b.txt"]);
}

#[test]
fn streaming_render_skips_ignored_names() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD"), "ref").unwrap();
    fs::write(root.join("x.txt"), "").unwrap();

    let lines: Vec<_> = render::plain_from_path(&root)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, ["└── x.txt"]);
}

#[test]
fn streaming_render_of_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(render::tree_from_path(&temp_dir.path().join("gone")).is_err());
}

// Generators for arbitrary small trees.

#[derive(Debug, Clone)]
enum NodeSpec {
    File(String),
    Dir(String, Vec<NodeSpec>),
}

fn arb_node() -> impl Strategy<Value = NodeSpec> {
    let name = "[a-z]{1,6}(\\.(py|txt|md|pdf|xyz))?";
    name.prop_map(NodeSpec::File).prop_recursive(3, 16, 4, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| NodeSpec::Dir(name, children))
    })
}

fn build(dir: &mut Directory, specs: &[NodeSpec]) {
    for spec in specs {
        match spec {
            NodeSpec::File(name) => dir.add_file(name, None, None),
            NodeSpec::Dir(name, children) => {
                dir.add_directory(name);
                if let Some(sub) = dir.dir_mut(name) {
                    build(sub, children);
                }
            }
        }
    }
}

proptest! {
    /// strip(colorized(T)) == plain(T) for all trees.
    #[test]
    fn plain_is_exactly_stripped_colorized(specs in prop::collection::vec(arb_node(), 0..6)) {
        let mut root = Directory::new("root");
        build(&mut root, &specs);

        let stripped: Vec<_> = render::tree_lines(&root)
            .map(|line| strip_ansi(&line))
            .collect();
        let plain: Vec<_> = render::plain_lines(&root).collect();
        prop_assert_eq!(stripped, plain);
    }

    /// One line per non-ignored entry, and no escape bytes survive stripping.
    #[test]
    fn stripped_lines_have_no_escape_bytes(specs in prop::collection::vec(arb_node(), 0..6)) {
        let mut root = Directory::new("root");
        build(&mut root, &specs);

        for line in render::plain_lines(&root) {
            prop_assert!(!line.contains('\u{1b}'), "line contains escape byte");
        }
    }
}
