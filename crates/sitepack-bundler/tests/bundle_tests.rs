//! Integration tests for bundling real site trees on disk.

use sitepack_bundler::{
    AssetKind, AssetSpec, BundlePlan, Error, SourceList, build_css_bundle, build_js_bundle,
    run_all,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_css_bundle_two_files_in_order() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.css", ".x{color:red}");
    write(temp.path(), "b.css", ".y{color:blue}");

    build_css_bundle(
        temp.path(),
        &SourceList::new(["a.css", "b.css"]),
        Path::new("pack.css"),
    )
    .unwrap();

    let pack = fs::read_to_string(temp.path().join("pack.css")).unwrap();
    let x = pack.find(".x{color:red}").expect("first rule present");
    let y = pack.find(".y{color:").expect("second rule present");
    assert!(x < y, "rules out of order: {pack}");
    assert!(!pack.contains(' '));
}

#[test]
fn test_css_bundle_reversed_list_reverses_output() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.css", ".x{color:red}");
    write(temp.path(), "b.css", ".y{color:blue}");

    build_css_bundle(
        temp.path(),
        &SourceList::new(["b.css", "a.css"]),
        Path::new("pack.css"),
    )
    .unwrap();

    let pack = fs::read_to_string(temp.path().join("pack.css")).unwrap();
    assert!(pack.find(".y{").unwrap() < pack.find(".x{").unwrap());
}

#[test]
fn test_css_files_browsers_accept_still_bundle() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "css/normalize.css", ".clearfix { *zoom: 1; }\nbody { margin: 0 }\n");
    write(
        temp.path(),
        "css/site.css",
        "@import url(\"fonts.css\");\n.nav { color: blue }\n",
    );

    build_css_bundle(
        temp.path(),
        &SourceList::new(["css/normalize.css", "css/site.css"]),
        Path::new("pack.css"),
    )
    .unwrap();

    let pack = fs::read_to_string(temp.path().join("pack.css")).unwrap();
    assert!(pack.find("body{").unwrap() < pack.find(".nav{").unwrap());
    assert!(!pack.contains("zoom"));
}

#[test]
fn test_js_syntax_error_leaves_artifact_untouched() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "js/ok.js", "function ok() { return 1; }");
    write(temp.path(), "js/broken.js", "function broken( {");
    write(temp.path(), "pack.js", "previous");

    let err = build_js_bundle(
        temp.path(),
        &SourceList::new(["js/ok.js", "js/broken.js"]),
        Path::new("pack.js"),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Minify { kind: AssetKind::Js, .. }));
    assert_eq!(
        fs::read_to_string(temp.path().join("pack.js")).unwrap(),
        "previous"
    );
}

#[test]
fn test_missing_source_leaves_artifact_untouched() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.css", ".a{color:red}");
    write(temp.path(), "pack.css", "previous");

    let err = build_css_bundle(
        temp.path(),
        &SourceList::new(["a.css", "missing.css"]),
        Path::new("pack.css"),
    )
    .unwrap_err();

    assert!(err.to_string().contains("missing.css"));
    assert_eq!(
        fs::read_to_string(temp.path().join("pack.css")).unwrap(),
        "previous"
    );
}

#[test]
fn test_missing_source_without_prior_artifact_writes_nothing() {
    let temp = TempDir::new().unwrap();

    let result = build_js_bundle(
        temp.path(),
        &SourceList::new(["nope.js"]),
        Path::new("pack.js"),
    );

    assert!(result.is_err());
    assert!(!temp.path().join("pack.js").exists());
    assert!(!temp.path().join("pack.js.tmp").exists());
}

#[test]
fn test_run_all_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "css/base.css", "html { font-size: 16px }\n/* note */\n");
    write(temp.path(), "css/site.css", ".nav a { text-decoration: none }");
    write(temp.path(), "js/lib.js", "var Site = {};\n");
    write(
        temp.path(),
        "js/site.js",
        "Site.init = function (root) { var links = root.links; return links.length; };",
    );

    let plan = BundlePlan {
        root: temp.path().to_path_buf(),
        css: AssetSpec::new(SourceList::new(["css/base.css", "css/site.css"]), "pack.css"),
        js: AssetSpec::new(SourceList::new(["js/lib.js", "js/site.js"]), "pack.js"),
    };

    let first = run_all(&plan, &mut ()).unwrap();
    let css_first = fs::read(temp.path().join("pack.css")).unwrap();
    let js_first = fs::read(temp.path().join("pack.js")).unwrap();

    let second = run_all(&plan, &mut ()).unwrap();
    let css_second = fs::read(temp.path().join("pack.css")).unwrap();
    let js_second = fs::read(temp.path().join("pack.js")).unwrap();

    assert_eq!(css_first, css_second);
    assert_eq!(js_first, js_second);
    assert!(first.iter().all(|r| r.changed));
    assert!(second.iter().all(|r| !r.changed));
    assert_eq!(first[0].digest, second[0].digest);
    assert_eq!(first[1].digest, second[1].digest);
}

#[test]
fn test_run_all_stops_before_js_when_css_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "site.js", "var a = 1;");

    let plan = BundlePlan {
        root: temp.path().to_path_buf(),
        css: AssetSpec::new(SourceList::new(["missing.css"]), "pack.css"),
        js: AssetSpec::new(SourceList::new(["site.js"]), "pack.js"),
    };

    assert!(run_all(&plan, &mut ()).is_err());
    assert!(!temp.path().join("pack.js").exists());
}

#[test]
fn test_output_outside_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.css", ".a{}");

    let err = build_css_bundle(
        temp.path(),
        &SourceList::new(["a.css"]),
        Path::new("../escape.css"),
    )
    .unwrap_err();

    assert!(matches!(err, Error::InvalidOutputPath(_)));
}
