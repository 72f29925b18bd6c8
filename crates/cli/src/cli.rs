//! Argument definitions for the `bookclub` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bookclub",
    version,
    about = "Book club client: browse books, manage your reviews"
)]
pub struct Cli {
    /// Directory holding `base.toml` and the per-environment overlays.
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the navigation bar.
    Nav,

    /// Render the page at a path, following redirects.
    Open {
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,
    },

    /// Log in and persist the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and persist the session.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session.
    Logout,

    /// Show the logged-in member.
    Profile,

    #[command(subcommand)]
    Books(BooksCommand),

    #[command(subcommand)]
    Reviews(ReviewsCommand),
}

#[derive(Subcommand)]
pub enum BooksCommand {
    /// List books with their reviews.
    List,

    /// Add a book.
    Add(BookArgs),

    /// Edit one of your books; omitted fields keep their current value.
    Edit {
        #[arg(value_name = "BOOK_ID")]
        id: i64,
        #[command(flatten)]
        changes: BookChanges,
    },

    /// Delete one of your books.
    Delete {
        #[arg(value_name = "BOOK_ID")]
        id: i64,
    },
}

#[derive(Args)]
pub struct BookArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    /// Year of publication, 1000 up to the current year.
    #[arg(long = "year")]
    pub year_published: String,
    #[arg(long)]
    pub description: String,
}

#[derive(Args)]
pub struct BookChanges {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long = "year")]
    pub year_published: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// Review a book.
    Add {
        #[arg(value_name = "BOOK_ID")]
        book_id: i64,
        /// Whole number from 1 to 5.
        #[arg(long)]
        rating: String,
        #[arg(long)]
        comment: String,
    },

    /// Edit one of your reviews; omitted fields keep their current value.
    Edit {
        #[arg(value_name = "REVIEW_ID")]
        id: i64,
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },

    /// Delete one of your reviews.
    Delete {
        #[arg(value_name = "REVIEW_ID")]
        id: i64,
    },
}
