use serde_derive::Serialize;

// The converter takes any JSON map, so a typed table works just as well as a
// file read from disk.
#[derive(Serialize)]
struct Lang {
    #[serde(rename = "itemGroup.example")]
    item_group: String,
    #[serde(rename = "item.example.wand")]
    wand: String,
    #[serde(rename = "item.example.wand.tooltip")]
    wand_tooltip: String,
    #[serde(rename = "item.example.manual")]
    manual: String,
}

fn main() {
    let lang = Lang {
        item_group: "Example Mod".to_owned(),
        wand: "Magic Wand".to_owned(),
        wand_tooltip: "Waving it around produces sparks, sometimes a rabbit, and on one \
                       memorable occasion an entire wardrobe of slightly damp hats."
            .to_owned(),
        manual: "Chapter one.\nIn which nothing happens.".to_owned(),
    };

    let value = serde_json::to_value(&lang).unwrap();
    let tree = yamlang::nest(value.as_object().unwrap())
        .unwrap()
        .collapse();
    let lines = yamlang::Emitter::new().apply(&tree);

    println!("{}", lines.join("\n"));
}
