use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn filter_help_mentions_every_facet() {
    let mut cmd = cargo_bin_cmd!("hypnoctl");
    let output = cmd
        .arg("filter")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--search", "--category", "--status", "--platform", "--from-url"]
    {
        assert!(text.contains(flag), "filter help missing {flag}");
    }
}

#[test]
fn top_level_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("hypnoctl");
    let out = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    for command in ["list", "featured", "show", "search", "filter", "facets"] {
        assert!(text.contains(command), "help missing {command}");
    }
    assert!(text.contains("--catalog"), "help missing catalog flag");
}
