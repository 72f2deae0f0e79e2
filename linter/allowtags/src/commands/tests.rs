use super::*;
use crate::Manifest;
use allowtags_ir::{FieldDecl, TypeDecl};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn output(format: OutputFormat) -> OutputArgs {
    OutputArgs {
        format,
        color: ColorChoice::Never,
    }
}

fn tag_args(allow: &[&str], literal: &str, format: OutputFormat) -> TagArgs {
    TagArgs {
        allow_key: allow.iter().map(ToString::to_string).collect(),
        bare: false,
        output: output(format),
        literal: literal.to_owned(),
    }
}

fn run(f: impl FnOnce(&mut Vec<u8>) -> u8) -> (u8, String) {
    let mut out = Vec::new();
    let status = f(&mut out);
    (status, String::from_utf8(out).unwrap())
}

fn manifest(path: &str, source: Option<&str>, decls: Vec<TypeDecl>) -> Manifest {
    Manifest {
        path: path.to_owned(),
        source: source.map(str::to_owned),
        decls,
    }
}

// ─── Helpers ────────────────────────────────────────────────────

#[test]
fn exit_status_reflects_problem_count() {
    assert_eq!(exit_status(0), EXIT_CLEAN);
    assert_eq!(exit_status(1), EXIT_PROBLEMS);
    assert_eq!(exit_status(17), EXIT_PROBLEMS);
}

#[test]
fn allowed_keys_split_commas() {
    let allowed = allowed_keys(&["json,xml".to_owned(), "binary".to_owned()]);
    assert_eq!(allowed.iter().collect::<Vec<_>>(), vec!["binary", "json", "xml"]);
}

#[test]
fn color_choice_maps_to_color_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn json_renderer_without_diagnostics_is_empty_array() {
    let (_, text) = run(|out| {
        Renderer::new(out, &output(OutputFormat::Json), false).finish(0);
        EXIT_CLEAN
    });
    assert_eq!(text, "[]\n");
}

// ─── tag ────────────────────────────────────────────────────────

#[test]
fn tag_clean_literal_prints_nothing() {
    let args = tag_args(&["json"], r#"`json:"id,omitempty"`"#, OutputFormat::Human);
    let (status, text) = run(|out| run_tag(&args, out, false));
    assert_eq!(status, EXIT_CLEAN);
    assert_eq!(text, "");
}

#[test]
fn tag_unknown_key_human() {
    let args = tag_args(&["json"], r#"`xml:"id"`"#, OutputFormat::Human);
    let (status, text) = run(|out| run_tag(&args, out, false));

    assert_eq!(status, EXIT_PROBLEMS);
    assert!(text.starts_with("error[T0004]: unknown tag key 'xml'\n"), "got:\n{text}");
    assert!(text.contains(" --> 1:2\n"), "got:\n{text}");
    assert!(text.contains("1 | `xml:\"id\"`\n"), "got:\n{text}");
    assert!(text.contains("  |  ^^^ not in the allow-list"), "got:\n{text}");
    assert!(text.contains("= help: pass `--allow-key xml` to accept it"));
    assert!(text.ends_with("error: 1 tag problem found\n"), "got:\n{text}");
}

#[test]
fn tag_malformed_literal_json() {
    let args = tag_args(&["json"], "json:\"id\"", OutputFormat::Json);
    let (status, text) = run(|out| run_tag(&args, out, false));
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, EXIT_PROBLEMS);
    assert_eq!(value[0]["code"], json!("T0001"));
    assert_eq!(value[0]["file"], Value::Null);
}

#[test]
fn tag_bare_content() {
    let mut args = tag_args(&["json"], "json:id", OutputFormat::Json);
    args.bare = true;
    let (status, text) = run(|out| run_tag(&args, out, false));
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, EXIT_PROBLEMS);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["code"], json!("T0006"));
    assert_eq!(value[0]["labels"][0]["start"], json!(5));
    assert_eq!(value[0]["labels"][0]["column"], json!(6));
}

// ─── check ──────────────────────────────────────────────────────

#[test]
fn check_renders_each_manifest_with_its_path() {
    let manifests = vec![
        manifest(
            "a.go",
            None,
            vec![TypeDecl::new("A", 0).with_field(FieldDecl::new("X", 10).with_tag(r#"`xml:"x"`"#, 20))],
        ),
        manifest(
            "b.go",
            None,
            vec![TypeDecl::new("B", 0).with_field(FieldDecl::new("Y", 10).with_tag(r#"`json:""`"#, 30))],
        ),
        manifest("c.go", None, vec![]),
    ];
    let allowed = allowed_keys(&["json".to_owned()]);

    let (status, text) = run(|out| {
        check_manifests(&manifests, &allowed, &output(OutputFormat::Json), out, false)
    });
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(status, EXIT_PROBLEMS);
    assert_eq!(
        value,
        json!([
            {
                "code": "T0004",
                "severity": "error",
                "message": "unknown tag key 'xml'",
                "file": "a.go",
                "labels": [{ "start": 21, "end": 24, "message": "not in the allow-list" }],
                "notes": ["in field `X` of `A`"],
                "suggestions": ["pass `--allow-key xml` to accept it"],
            },
            {
                "code": "T0005",
                "severity": "error",
                "message": "empty tag value",
                "file": "b.go",
                "labels": [{ "start": 36, "end": 36, "message": "value expected here" }],
                "notes": ["in field `Y` of `B`"],
                "suggestions": ["give the key a quoted value or remove the pair"],
            },
        ])
    );
}

#[test]
fn check_with_source_shows_snippet() {
    let source = "type A struct {\n\tX int `xml:\"x\"`\n}\n";
    let manifests = vec![manifest(
        "a.go",
        Some(source),
        vec![TypeDecl::new("A", 5).with_field(FieldDecl::new("X", 17).with_tag(r#"`xml:"x"`"#, 23))],
    )];
    let allowed = allowed_keys(&["json".to_owned()]);

    let (status, text) = run(|out| {
        check_manifests(&manifests, &allowed, &output(OutputFormat::Human), out, false)
    });

    assert_eq!(status, EXIT_PROBLEMS);
    assert!(text.contains(" --> a.go:2:9\n"), "got:\n{text}");
    assert!(text.contains("2 | \tX int `xml:\"x\"`\n"), "got:\n{text}");
    assert!(text.contains("^^^ not in the allow-list"), "got:\n{text}");
    assert!(text.contains("= note: in field `X` of `A`"), "got:\n{text}");
    assert!(text.ends_with("error: 1 tag problem found\n"), "got:\n{text}");
}

#[test]
fn check_clean_manifests() {
    let manifests = vec![manifest(
        "a.go",
        None,
        vec![TypeDecl::new("A", 0)
            .with_field(FieldDecl::new("X", 10).with_tag(r#"`json:"x" xml:"x"`"#, 20))
            .with_field(FieldDecl::new("Untagged", 40))],
    )];
    let allowed = allowed_keys(&["json,xml".to_owned()]);

    let (status, text) = run(|out| {
        check_manifests(&manifests, &allowed, &output(OutputFormat::Human), out, false)
    });
    assert_eq!(status, EXIT_CLEAN);
    assert_eq!(text, "");
}

#[test]
fn run_check_fails_on_unreadable_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let args = CheckArgs {
        allow_key: vec!["json".into()],
        output: OutputArgs::default(),
        manifests: vec![dir.path().join("nope.json")],
    };
    let mut out = Vec::new();
    let err = run_check(&args, &mut out, false).unwrap_err();

    assert!(matches!(err, crate::DriverError::Read { .. }));
    assert!(out.is_empty());
}

// ─── explain ────────────────────────────────────────────────────

#[test]
fn explain_known_code() {
    let args = ExplainArgs {
        code: Some("t0004".into()),
    };
    let mut out = Vec::new();
    let status = run_explain(&args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(status, EXIT_CLEAN);
    assert!(text.starts_with("# T0004:"), "got:\n{text}");
}

#[test]
fn explain_lists_codes_without_argument() {
    let mut out = Vec::new();
    run_explain(&ExplainArgs { code: None }, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 8);
    assert!(text.starts_with("T0001  tag is not a string literal\n"));
}

#[test]
fn explain_unknown_code() {
    let args = ExplainArgs {
        code: Some("E0001".into()),
    };
    let err = run_explain(&args, Vec::new()).unwrap_err();
    assert!(matches!(&err, crate::DriverError::UnknownCode(code) if code == "E0001"));
}
