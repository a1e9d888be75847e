fn main() {
    let yaml = r#"
item:
  example:
    wand:
      .: Magic Wand
      tooltip: Almost certainly does nothing
"#;

    let json = yamlang::Flattener::new()
        .pretty(true)
        .from_str(yaml)
        .unwrap();

    println!("{json}");
}
