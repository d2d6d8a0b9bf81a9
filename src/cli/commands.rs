//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snapshelf")]
#[command(about = "Keep an ordered shelf of photos in a single file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new shelf
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add one or more image files to the end of the shelf
    Add {
        /// Image files (png, jpeg, gif, webp, bmp, tiff, heic)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List stored images in shelf order
    List,

    /// Delete an image by position or id
    Delete {
        /// Position in the shelf (see `list`)
        #[arg(required_unless_present = "id", conflicts_with = "id")]
        index: Option<usize>,

        /// Image id instead of a position
        #[arg(long)]
        id: Option<String>,
    },

    /// Move an image to another position
    Move {
        /// Current position
        from: usize,

        /// New position
        to: usize,
    },

    /// Write a stored image back out to a file
    Export {
        /// Destination file
        output: PathBuf,

        /// Position in the shelf
        #[arg(short, long, required_unless_present = "id", conflicts_with = "id")]
        index: Option<usize>,

        /// Image id instead of a position
        #[arg(long)]
        id: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
