use anyhow::Result;
use clap::Args;
use console::Style;

use emulsion_core::catalog::Catalog;
use emulsion_core::preset::Category;

use super::parse_category;

#[derive(Args)]
pub struct PresetsArgs {
    /// Only list one category (negative, slide, cinema, instant, bw)
    #[arg(long)]
    pub category: Option<String>,
}

pub fn run(args: &PresetsArgs) -> Result<()> {
    let catalog = Catalog::built_in()?;
    let header = Style::new().cyan().bold();
    let id_style = Style::new().green();
    let dim = Style::new().dim();

    let categories: Vec<Category> = match &args.category {
        Some(name) => vec![parse_category(name)?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let presets = catalog.list(category);
        println!("{}", header.apply_to(category));
        for preset in presets {
            println!(
                "  {:<16} {:<16} {}",
                id_style.apply_to(&preset.id),
                preset.label,
                dim.apply_to(format!(
                    "{} {} (ISO {})",
                    preset.stock.manufacturer, preset.stock.name, preset.stock.speed
                ))
            );
        }
        println!();
    }

    Ok(())
}
