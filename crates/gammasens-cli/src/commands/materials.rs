use crate::cli::{MaterialsArgs, MaterialsCommands};
use crate::error::Result;
use gammasens::core::models::material::Material;

pub fn run(args: MaterialsArgs) -> Result<()> {
    match args.command {
        MaterialsCommands::List => {
            println!("{:<10} {:>16}", "Material", "Density (g/cm³)");
            for material in Material::presets() {
                println!("{:<10} {:>16.2}", material.name, material.density_g_cm3);
            }
        }
    }
    Ok(())
}
