use super::input::parse_class_level;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollbook", bin_name = "rollbook", version)]
#[command(about = "Student roster with generated IDs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to load instead of the default location
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print results as JSON (ignored by the interactive shell)
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu: search, add, exit (the default)
    Shell,

    /// Look up students by their full ID
    #[command(alias = "s")]
    Show {
        /// Student IDs, e.g. 24-25STU5567
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Add a student record and print it with its new ID
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        name: String,

        /// Class level, e.g. 10
        #[arg(long = "class", value_parser = parse_class_level, allow_negative_numbers = true)]
        class_level: i32,

        #[arg(long, default_value = "")]
        address: String,

        /// Date of birth as DD/MM/YYYY
        #[arg(long = "dob", default_value = "")]
        date_of_birth: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Comma-separated, e.g. "Math, Science, English"
        #[arg(long, default_value = "")]
        subjects: String,
    },

    /// List every student, ordered by ID
    #[command(alias = "ls")]
    List,
}
