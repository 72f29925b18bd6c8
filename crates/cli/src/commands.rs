//! Subcommand handlers. Each returns the text to print on stdout.

use anyhow::{anyhow, bail};
use bookclub_app::forms::{BookForm, LoginForm, ReviewForm, SignupForm};
use bookclub_app::pages::books::{self, BooksPage, BooksView, ViewError};
use bookclub_app::pages::{home, login, profile, signup, LoginPage, ProfilePage, SignupPage};
use bookclub_app::App;
use bookclub_kernel::model::{BookId, ReviewId};
use bookclub_kernel::ClientError;

use crate::cli::{BookArgs, BookChanges, BooksCommand, Command, ReviewsCommand};

pub async fn run(app: &App, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Nav => Ok(app.registry().render_nav()),
        Command::Open { path } => app.open(&path).await,
        Command::Login { username, password } => {
            let form = LoginForm::new(username, password);
            let navigation = LoginPage
                .submit(&app.ctx(), &form)
                .await
                .map_err(client_failure)?;
            app.follow(navigation, login::PATH).await
        }
        Command::Signup {
            username,
            email,
            password,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
            };
            let navigation = SignupPage
                .submit(&app.ctx(), &form)
                .await
                .map_err(client_failure)?;
            app.follow(navigation, signup::PATH).await
        }
        Command::Logout => {
            ProfilePage.logout(&app.ctx()).await?;
            tracing::info!("logged out");
            app.open(home::PATH).await
        }
        Command::Profile => app.open(profile::PATH).await,
        Command::Books(command) => run_books(app, command).await,
        Command::Reviews(command) => run_reviews(app, command).await,
    }
}

async fn run_books(app: &App, command: BooksCommand) -> anyhow::Result<String> {
    let ctx = app.ctx();
    let mut view = match command {
        BooksCommand::List => return app.open(books::PATH).await,
        _ => signed_in_view(app).await?,
    };

    let outcome = match command {
        BooksCommand::List => Ok(()),
        BooksCommand::Add(args) => {
            view.open_book_form();
            view.submit_book(&ctx, &book_form(args)).await
        }
        BooksCommand::Edit { id, changes } => {
            let session = app.session().current().await;
            match view.begin_edit(&session, BookId(id)) {
                Ok(form) => view.submit_book(&ctx, &apply_book_changes(form, changes)).await,
                Err(e) => Err(e),
            }
        }
        BooksCommand::Delete { id } => view.delete_book(&ctx, BookId(id)).await,
    };
    outcome.map_err(view_failure)?;

    Ok(view.render(&app.session().current().await))
}

async fn run_reviews(app: &App, command: ReviewsCommand) -> anyhow::Result<String> {
    let ctx = app.ctx();
    let mut view = signed_in_view(app).await?;

    let outcome = match command {
        ReviewsCommand::Add {
            book_id,
            rating,
            comment,
        } => {
            let book_id = BookId(book_id);
            match view.open_review_form(book_id) {
                Ok(()) => {
                    view.submit_review(&ctx, book_id, &ReviewForm { rating, comment })
                        .await
                }
                Err(e) => Err(e),
            }
        }
        ReviewsCommand::Edit {
            id,
            rating,
            comment,
        } => {
            let id = ReviewId(id);
            let session = app.session().current().await;
            let book_id = view.reviews().find(id).map(|review| review.book_id);
            match (view.begin_review_edit(&session, id), book_id) {
                (Ok(mut form), Some(book_id)) => {
                    if let Some(rating) = rating {
                        form.rating = rating;
                    }
                    if let Some(comment) = comment {
                        form.comment = comment;
                    }
                    view.submit_review(&ctx, book_id, &form).await
                }
                (Err(e), _) => Err(e),
                (Ok(_), None) => Err(ViewError::UnknownReview(id)),
            }
        }
        ReviewsCommand::Delete { id } => view.delete_review(&ctx, ReviewId(id)).await,
    };
    outcome.map_err(view_failure)?;

    Ok(view.render(&app.session().current().await))
}

/// Load the books view, refusing to go further without a session.
async fn signed_in_view(app: &App) -> anyhow::Result<BooksView> {
    if !app.session().is_authenticated().await {
        bail!(ClientError::Unauthenticated.user_message());
    }
    Ok(BooksPage::new().load(&app.ctx()).await)
}

fn book_form(args: BookArgs) -> BookForm {
    BookForm {
        title: args.title,
        author: args.author,
        year_published: args.year_published,
        description: args.description,
    }
}

fn apply_book_changes(mut form: BookForm, changes: BookChanges) -> BookForm {
    if let Some(title) = changes.title {
        form.title = title;
    }
    if let Some(author) = changes.author {
        form.author = author;
    }
    if let Some(year) = changes.year_published {
        form.year_published = year;
    }
    if let Some(description) = changes.description {
        form.description = description;
    }
    form
}

fn client_failure(error: ClientError) -> anyhow::Error {
    anyhow!(error.user_message())
}

fn view_failure(error: ViewError) -> anyhow::Error {
    match error {
        ViewError::Alert { message, source } => {
            anyhow!("{message}: {}", source.user_message())
        }
        ViewError::Invalid(errors) => anyhow!(errors.to_string()),
        ViewError::Client(e) => client_failure(e),
        other => anyhow!(other),
    }
}
