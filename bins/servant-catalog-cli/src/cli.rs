use std::path::PathBuf;

use clap::{Parser, Subcommand};
use servant_catalog::LoadCatalogRequest;

#[derive(Debug, Parser)]
#[command(name = "servant-catalog-cli")]
#[command(about = "Inspect the servant catalog and render servant embeds")]
#[command(
    after_help = "Examples:\n  servant-catalog-cli tiers\n  servant-catalog-cli list --tier EX\n  servant-catalog-cli render --name Gilgamesh --master Shirou\n  servant-catalog-cli --image-table images.json validate"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SERVANT_CATALOG_PATH",
        help = "Catalog JSON file (built-in roster when omitted)"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(
        long = "image-table",
        global = true,
        env = "SERVANT_IMAGE_TABLE_PATH",
        help = "JSON object mapping servant name to image URL"
    )]
    pub image_table: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Servant count per tier
    Tiers,
    /// Records of one tier, in display order
    List {
        #[arg(long)]
        tier: String,
    },
    /// One servant by exact name
    Show {
        #[arg(long)]
        name: String,
    },
    /// First servant whose name contains the query
    Search {
        #[arg(long)]
        query: String,
    },
    ByClass {
        #[arg(long = "class")]
        servant_class: String,
    },
    /// Embed JSON for one servant
    Render {
        #[arg(long)]
        name: String,
        #[arg(long)]
        master: Option<String>,
        #[arg(long, help = "Plain servant card without tier styling or image table")]
        plain: bool,
    },
    /// Embed JSON listing one tier
    Roster {
        #[arg(long)]
        tier: String,
        #[arg(long)]
        master: Option<String>,
    },
    Validate,
    Hash {
        #[arg(long)]
        file: PathBuf,
    },
    /// Merged catalog config, suitable as a starting catalog file
    Export,
}

impl Cli {
    pub fn load_request(&self) -> LoadCatalogRequest {
        LoadCatalogRequest {
            catalog_path: self.catalog.clone(),
            image_table_path: self.image_table.clone(),
        }
    }

    pub fn command_name(&self) -> &'static str {
        match self.command {
            Command::Tiers => "tiers",
            Command::List { .. } => "list",
            Command::Show { .. } => "show",
            Command::Search { .. } => "search",
            Command::ByClass { .. } => "by-class",
            Command::Render { .. } => "render",
            Command::Roster { .. } => "roster",
            Command::Validate => "validate",
            Command::Hash { .. } => "hash",
            Command::Export => "export",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_master() {
        let cli = Cli::try_parse_from([
            "servant-catalog-cli",
            "render",
            "--name",
            "Gilgamesh",
            "--master",
            "Shirou",
        ])
        .expect("parse render");

        match cli.command {
            Command::Render {
                name,
                master,
                plain,
            } => {
                assert_eq!(name, "Gilgamesh");
                assert_eq!(master.as_deref(), Some("Shirou"));
                assert!(!plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn accepts_global_paths_after_subcommand() {
        let cli = Cli::try_parse_from([
            "servant-catalog-cli",
            "validate",
            "--catalog",
            "catalog.json",
            "--image-table",
            "images.json",
        ])
        .expect("parse validate");

        let request = cli.load_request();
        assert_eq!(request.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(request.image_table_path, Some(PathBuf::from("images.json")));
        assert_eq!(cli.command_name(), "validate");
    }

    #[test]
    fn by_class_uses_class_flag() {
        let cli = Cli::try_parse_from(["servant-catalog-cli", "by-class", "--class", "Saber"])
            .expect("parse by-class");
        assert!(matches!(
            cli.command,
            Command::ByClass { ref servant_class } if servant_class == "Saber"
        ));
    }

    #[test]
    fn list_requires_tier() {
        assert!(Cli::try_parse_from(["servant-catalog-cli", "list"]).is_err());
    }
}
