use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sprout", bin_name = "sprout", version)]
#[command(about = "Keep track of when your plants need water", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a plant
    #[command(alias = "n", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: PlantFields,
    },

    /// List plants with their watering status
    #[command(alias = "ls", display_order = 2)]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show every detail of one or more plants
    #[command(alias = "v", display_order = 3)]
    View {
        #[command(flatten)]
        view: ViewArgs,

        /// Indexes of the plants (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Change a plant's details
    #[command(alias = "e", display_order = 4)]
    Edit {
        #[command(flatten)]
        view: ViewArgs,

        /// Index of the plant
        index: String,

        #[command(flatten)]
        fields: PlantFields,
    },

    /// Record that plants were watered just now
    #[command(alias = "w", display_order = 5)]
    Water {
        #[command(flatten)]
        view: ViewArgs,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Indexes of the plants (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete plants
    #[command(alias = "rm", display_order = 6)]
    Delete {
        #[command(flatten)]
        view: ViewArgs,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Indexes of the plants (e.g. 1 3 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Live countdown board (f: filter, s: sort, q: quit)
    #[command(display_order = 7)]
    Watch {
        #[command(flatten)]
        view: ViewArgs,

        /// Exit after this many seconds
        #[arg(long = "for", value_name = "SECS")]
        duration: Option<u64>,
    },

    /// Get or set configuration values
    #[command(display_order = 8)]
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

/// The filter and sort a list is shown with. Index arguments are resolved
/// against the same view, so `sprout water --sort asc 1` waters the plant
/// that `sprout list --sort asc` numbers 1.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only show plants with this sunlight requirement ("all" shows every plant)
    #[arg(long, value_name = "SUNLIGHT")]
    pub filter: Option<String>,

    /// Sort by watering frequency: none, asc or desc
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlantFields {
    /// Plant name
    #[arg(long)]
    pub name: Option<String>,

    /// Species
    #[arg(long)]
    pub species: Option<String>,

    /// Water every N days
    #[arg(long, value_name = "DAYS")]
    pub every: Option<String>,

    /// Sunlight requirement
    #[arg(long)]
    pub sunlight: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["sprout"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn water_takes_indexes_and_view() {
        let cli =
            Cli::try_parse_from(["sprout", "w", "--sort", "asc", "--yes", "1", "3-4"]).unwrap();
        match cli.command {
            Some(Commands::Water { view, yes, indexes }) => {
                assert!(yes);
                assert_eq!(view.sort.as_deref(), Some("asc"));
                assert_eq!(indexes, ["1", "3-4"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_separates_view_filter_from_fields() {
        let cli = Cli::try_parse_from([
            "sprout", "edit", "2", "--filter", "Low Light", "--sunlight", "Full Sun",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Edit { index, fields, view }) => {
                assert_eq!(index, "2");
                assert_eq!(fields.sunlight.as_deref(), Some("Full Sun"));
                assert_eq!(view.filter.as_deref(), Some("Low Light"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn delete_requires_an_index() {
        assert!(Cli::try_parse_from(["sprout", "rm"]).is_err());
    }
}
