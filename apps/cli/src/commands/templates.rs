use chortle_template::TemplateCatalog;

pub fn run(catalog: &impl TemplateCatalog) -> anyhow::Result<()> {
    for template in catalog.templates() {
        let fields: Vec<&str> = template.fields.iter().map(|f| f.name.as_str()).collect();
        println!("{}\t{}\t{}", template.key, template.title, fields.join(", "));
    }
    Ok(())
}
