use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tors",
    about = "Tors: invariants of lattices of torsion classes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a lattice: bricks, simples and interval classification
    Summary {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print kappa of every brick and the extended kappa of every element
    Kappa {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the brick label of every covering relation
    Labels {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe the heart of the interval [lower, upper]
    Heart {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Lower torsion class (label)
        lower: String,

        /// Upper torsion class (label)
        upper: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a derived lattice or poset
    Derived {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Which structure to build
        #[arg(value_enum)]
        kind: DerivedKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the support tau-tilting pair of every torsion class
    Pairs {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the support tau-tilting simplicial complex
    Complex {
        /// Path to a lattice description (.json or .toml)
        lattice: String,

        /// Only tau-tilting modules (sincere torsion classes)
        #[arg(long)]
        positive: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DerivedKind {
    /// Wide subcategories
    Wide,
    /// ICE-closed subcategories
    Ice,
    /// IKE-closed subcategories
    Ike,
    /// All interval hearts
    Heart,
}

impl DerivedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Ice => "ice",
            Self::Ike => "ike",
            Self::Heart => "heart",
        }
    }
}
