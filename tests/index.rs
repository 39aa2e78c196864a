use jdepgraph::core::{Declarations, ExtractedFile, PackageIndex};

fn extracted(relative: &str, package: Option<&str>) -> ExtractedFile {
    ExtractedFile {
        relative: relative.to_string(),
        declarations: Declarations {
            package: package.map(String::from),
            imports: Default::default(),
        },
    }
}

#[test]
fn maps_packages_to_declaring_files() {
    let files = vec![
        extracted("a/Foo.java", Some("a")),
        extracted("b/Bar.java", Some("b")),
    ];

    let index = PackageIndex::build(&files);
    assert_eq!(index.len(), 2);
    assert_eq!(index.resolve("a"), Some("a/Foo.java"));
    assert_eq!(index.resolve("b"), Some("b/Bar.java"));
}

#[test]
fn duplicate_package_keeps_last_file_scanned() {
    let files = vec![
        extracted("a/First.java", Some("shared.pkg")),
        extracted("a/Second.java", Some("shared.pkg")),
    ];

    let index = PackageIndex::build(&files);
    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve("shared.pkg"), Some("a/Second.java"));
}

#[test]
fn files_without_package_contribute_no_entry() {
    let files = vec![extracted("scripts/Main.java", None)];
    let index = PackageIndex::build(&files);
    assert!(index.is_empty());
    assert_eq!(index.resolve("scripts"), None);
}
