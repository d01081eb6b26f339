#![allow(missing_docs)]

use serialsub::{
    ArgumentError, ReplaceError, ReplaceOptions, ReplacementRule, RuleSet, THREAD_SAFE, VERSION,
    baseline::sequential_replace, batch_replace, scalars, serialized_batch_replace,
    serialized_replace,
};

#[test]
fn exposes_version_and_thread_safety() {
    assert!(!VERSION.is_empty());
    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    assert!(THREAD_SAFE);
}

#[test]
fn owned_rules_and_tuples_are_interchangeable() {
    let owned = vec![
        ReplacementRule::new("Hello", "Hi"),
        ReplacementRule::new(b"world".to_vec(), String::from("everyone")),
    ];
    let tuples = [("Hello", "Hi"), ("world", "everyone")];
    let input = "Hello world, hello ruby";
    assert_eq!(
        batch_replace(input, owned).unwrap(),
        batch_replace(input, tuples).unwrap()
    );
}

#[test]
fn rule_set_exposes_its_rules() {
    let rules = RuleSet::with_options(
        [("a", "b"), ("c", "d")],
        ReplaceOptions {
            case_insensitive: true,
        },
    )
    .unwrap();
    assert_eq!(rules.len(), 2);
    assert!(!rules.is_empty());
    assert!(rules.options().case_insensitive);
    assert_eq!(rules.rules()[1].pattern(), "c");
    assert_eq!(rules.rules()[1].replacement(), "d");
}

#[test]
fn engine_does_not_chain_rules_like_the_baseline() {
    // The baseline lets rule 2 rewrite rule 1's output; the engine does not.
    let rules = RuleSet::new([("http://", "https://"), ("https://", "ftp://")]).unwrap();
    let input = "http://a https://b";
    assert_eq!(rules.apply(input), b"https://a ftp://b");
    assert_eq!(sequential_replace(input, &rules), b"ftp://a ftp://b");
}

#[test]
fn database_dump_row_round_trip() {
    // One row of a `wp_options` export: a plain column and a serialized one.
    let row = concat!(
        "(1,'siteurl','http://old.test','yes'),",
        r#"(2,'widget','a:2:{s:5:"title";s:4:"Blog";s:4:"link";s:20:"http://old.test/blog";}','yes');"#,
    );
    let out = serialized_replace(row, "http://old.test", "https://new.example").unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        concat!(
            "(1,'siteurl','http://old.test','yes'),",
            r#"(2,'widget','a:2:{s:5:"title";s:4:"Blog";s:4:"link";s:24:"https://new.example/blog";}','yes');"#,
        )
    );

    // Plain columns are the batch replacer's job.
    let out = batch_replace(&out, [("'http://old.test'", "'https://new.example'")]).unwrap();
    assert!(out.starts_with(b"(1,'siteurl','https://new.example','yes')"));
}

#[test]
fn scalar_iterator_reports_positions() {
    let blob = br#"i:7;s:3:"abc";s:0:"";"#;
    let found: Vec<(usize, usize, Vec<u8>)> = scalars(blob)
        .map(|s| s.map(|s| (s.offset(), s.declared_len(), s.payload().to_vec())))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(found, vec![(4, 3, b"abc".to_vec()), (14, 0, Vec::new())]);
}

#[test]
fn serialized_batch_with_validated_rules() {
    let rules = RuleSet::new([("old", "new"), ("o", "0")]).unwrap();
    let out = serialized_batch_replace(r#"s:7:"old foo";"#, &rules).unwrap();
    assert_eq!(out, br#"s:7:"new f00";"#);
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = batch_replace("x", [("", "y")]).unwrap_err();
    assert_error(&err);
    assert!(matches!(
        err,
        ReplaceError::InvalidArgument(ArgumentError::EmptyPattern { index: 0 })
    ));
}
