use wordindex::ComponentRegistry;

/// Args for the component listing command.
#[derive(clap::Args, Debug)]
pub struct ListComponentsArgs {}

impl ListComponentsArgs {
    /// Run the component listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let registry = ComponentRegistry::default();

        println!("segmenters:");
        for name in registry.segmenter_names() {
            println!("  * \"{name}\"");
        }

        println!("pretreatments:");
        for name in registry.pretreatment_names() {
            println!("  * \"{name}\"");
        }

        Ok(())
    }
}
