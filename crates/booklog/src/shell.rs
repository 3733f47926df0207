// SPDX-FileCopyrightText: 2026 Booklog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `booklog shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline history.
//! The shell is purely a rendering and input layer: every slash command maps
//! onto an [`App`] operation, and all user confirmations (logout, shelf
//! removal, review removal) happen here before the store is touched.

use std::str::FromStr;

use booklog_api::BookDetail;
use booklog_client::App;
use booklog_config::BooklogConfig;
use booklog_core::{BooklogError, NewBook, ShelfStatus};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Runs the `booklog shell` interactive REPL.
pub async fn run_shell(config: BooklogConfig) -> Result<(), BooklogError> {
    let mut app = App::new(&config).await?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| BooklogError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "booklog shell".bold().green());
    println!(
        "Type {} for commands, {} to exit.\n",
        "/help".yellow(),
        "/quit".yellow()
    );
    match app.current_identity() {
        Some(username) => println!("logged in as {}\n", username.cyan()),
        None => println!(
            "{}\n",
            "no session -- /login or /register to begin".dimmed()
        ),
    }

    loop {
        let prompt = match app.current_identity() {
            Some(username) => format!("{}:{}> ", "booklog".green(), username.cyan()),
            None => format!("{}> ", "booklog".green()),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }

                if let Err(e) = handle_command(&mut app, &mut rl, trimmed).await {
                    report_error(&e);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                // Ctrl+C / Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatch a single slash command.
async fn handle_command(
    app: &mut App,
    rl: &mut DefaultEditor,
    input: &str,
) -> Result<(), BooklogError> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "/help" => print_help(),

        "/register" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(username), Some(email), Some(password)) => {
                    app.register(username, email, password).await?;
                    println!(
                        "Welcome {}! Your account has been created.",
                        username.cyan()
                    );
                }
                _ => println!("usage: /register <username> <email> <password>"),
            }
        }

        "/login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(username), Some(password)) => {
                    app.login(username, password).await?;
                    println!("logged in as {}", username.cyan());
                }
                _ => println!("usage: /login <username> <password>"),
            }
        }

        "/logout" => {
            if !app.is_authenticated() {
                println!("not logged in");
            } else if confirm(rl, "Are you sure you want to logout?") {
                app.logout().await?;
                println!("logged out");
            }
        }

        "/whoami" => match app.current_identity() {
            Some(username) => println!("{}", username.cyan()),
            None => println!("{}", "unauthenticated".dimmed()),
        },

        "/mode" => {
            app.toggle_auth_mode();
            println!("auth form: {:?}", app.auth_mode());
        }

        "/books" | "/page" => {
            let page = if rest.is_empty() { 1 } else { parse_number(rest, "page")? };
            app.load_page(page).await?;
            print_books(app);
        }

        "/search" => {
            // Keeps the active genre filter, like typing in the explore box.
            let genre = app.catalog().genre_filter().to_string();
            app.search(rest, &genre).await?;
            print_books(app);
        }

        "/genre" => {
            let genre = if rest == "clear" { "" } else { rest };
            let term = app.catalog().search_term().to_string();
            app.search(&term, genre).await?;
            print_books(app);
        }

        "/hero" => {
            // The landing-box search: clears the genre filter, first page.
            app.hero_search(rest).await?;
            print_books(app);
        }

        "/genres" => {
            if app.catalog().genres().is_empty() {
                println!("{}", "no genres loaded".dimmed());
            }
            for genre in app.catalog().genres() {
                println!("  {genre}");
            }
        }

        "/open" => {
            let book_id = parse_number(rest, "book id")?;
            app.open_book(book_id).await?;
            let username = app.current_identity().map(String::from);
            if let Some(detail) = app.open_detail() {
                print_detail(detail, username.as_deref());
            }
        }

        "/close" => app.close_book(),

        "/rate" => {
            let star = parse_star(rest)?;
            app.review_picker().click(star);
            println!("review rating: {}", stars(star));
        }

        "/shelfrate" => {
            let star = parse_star(rest)?;
            app.shelf_picker().click(star);
            println!("shelf rating: {}", stars(star));
        }

        "/review" => {
            app.submit_review(rest).await?;
            println!("{}", "review posted".green());
            let username = app.current_identity().map(String::from);
            if let Some(detail) = app.open_detail() {
                print_detail(detail, username.as_deref());
            }
        }

        "/delreview" => {
            let review_id = parse_number(rest, "review id")?;
            if confirm(rl, "Delete this review?") {
                app.remove_review(review_id).await?;
                println!("review deleted");
            }
        }

        "/add" => {
            let Some(detail) = app.open_detail() else {
                println!("open a book first: /open <book id>");
                return Ok(());
            };
            let title = detail.book.title.clone();

            let mut parts = rest.splitn(2, char::is_whitespace);
            let status = match parts.next().filter(|s| !s.is_empty()) {
                Some(raw) => parse_status(raw)?,
                None => ShelfStatus::WantToRead,
            };
            let notes = parts.next().unwrap_or("").trim();

            if !confirm(rl, &format!("Add \"{title}\" to your shelf?")) {
                return Ok(());
            }
            match app.add_to_shelf(status, notes).await {
                Ok(title) => println!("added {} to your shelf", title.cyan()),
                Err(BooklogError::Conflict(_)) => {
                    println!(
                        "{}",
                        "This book is already on your shelf -- update it instead.".yellow()
                    );
                }
                Err(e) => return Err(e),
            }
        }

        "/shelf" => {
            let filter = match rest {
                "" | "all" => None,
                raw => Some(parse_status(raw)?),
            };
            print_shelf(app, filter);
        }

        "/move" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(id), Some(raw_status)) => {
                    let entry_id = parse_number(id, "entry id")?;
                    let status = parse_status(raw_status)?;
                    app.update_shelf_status(entry_id, status).await?;
                    print_shelf(app, None);
                }
                _ => println!("usage: /move <entry id> <want-to-read|reading|completed>"),
            }
        }

        "/remove" => {
            let entry_id = parse_number(rest, "entry id")?;
            let Some(title) = app
                .shelf()
                .find_entry(entry_id)
                .map(|e| e.book_title.clone())
            else {
                println!("no shelf entry {entry_id}");
                return Ok(());
            };
            if confirm(rl, &format!("Remove \"{title}\" from your shelf?")) {
                app.remove_shelf_entry(entry_id).await?;
                println!("removed {} from your shelf", title.cyan());
            }
        }

        "/addbook" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            if fields.len() < 3 {
                println!("usage: /addbook <title> | <author> | <genre> [| cover url [| year]]");
                return Ok(());
            }
            let book = NewBook {
                title: fields[0].to_string(),
                author: fields[1].to_string(),
                isbn: None,
                publication_year: fields
                    .get(4)
                    .and_then(|y| y.parse::<i32>().ok()),
                genre: fields[2].to_string(),
                cover_image: fields.get(3).unwrap_or(&"").to_string(),
                description: None,
                rating: 0.0,
            };
            let book_id = app.submit_book(&book).await?;
            println!("book #{book_id} added to the catalog");
        }

        "/profile" => {
            let profile = app.profile().await?;
            let username = app.current_identity().unwrap_or("?").to_string();
            println!("{}", format!("reviews by {username}").bold());
            if profile.is_empty() {
                println!("  {}", "none on the current page".dimmed());
            }
            for item in &profile {
                println!(
                    "  {} {} -- {}",
                    stars(item.review.rating),
                    item.book_title.cyan(),
                    item.review.comment.as_deref().unwrap_or("(no comment)")
                );
            }
            println!("{}", "shelf".bold());
            print_shelf(app, None);
        }

        _ => println!("unknown command {command}, try /help"),
    }
    Ok(())
}

/// Ask a yes/no question on the readline. Anything but y/yes is a no.
fn confirm(rl: &mut DefaultEditor, question: &str) -> bool {
    match rl.readline(&format!("{question} ({}/{}) ", "y".green(), "n".red())) {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn report_error(e: &BooklogError) {
    match e {
        BooklogError::Validation(message) => eprintln!("{}: {message}", "invalid".yellow()),
        BooklogError::Conflict(message) => eprintln!("{}: {message}", "conflict".yellow()),
        BooklogError::Auth(message) | BooklogError::NotFound(message) => {
            eprintln!("{}: {message}", "denied".yellow())
        }
        _ => eprintln!("{}: {e}", "error".red()),
    }
}

fn parse_number(raw: &str, what: &str) -> Result<i64, BooklogError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BooklogError::Validation(format!("`{raw}` is not a valid {what}")))
}

fn parse_star(raw: &str) -> Result<u8, BooklogError> {
    match raw.trim().parse::<u8>() {
        Ok(star) if (1..=5).contains(&star) => Ok(star),
        _ => Err(BooklogError::Validation(
            "rating must be between 1 and 5".to_string(),
        )),
    }
}

fn parse_status(raw: &str) -> Result<ShelfStatus, BooklogError> {
    ShelfStatus::from_str(raw).map_err(|_| {
        BooklogError::Validation(format!(
            "`{raw}` is not a shelf status (want-to-read, reading, completed)"
        ))
    })
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

fn print_help() {
    println!("{}", "session".bold());
    println!("  /register <user> <email> <pass>   create an account and log in");
    println!("  /login <user> <pass>              log in");
    println!("  /logout                           log out (asks first)");
    println!("  /whoami  /mode");
    println!("{}", "catalog".bold());
    println!("  /books [page]                     list a catalog page");
    println!("  /search <term>  /genre <g|clear>  filter the catalog");
    println!("  /hero <term>                      search from scratch (clears genre)");
    println!("  /genres                           list genre options");
    println!("  /addbook t | a | g [| cover]      add a book to the catalog");
    println!("{}", "book detail".bold());
    println!("  /open <book id>  /close");
    println!("  /rate <1-5>  /review <comment>    rate, then post a review");
    println!("  /delreview <review id>            delete your review (asks first)");
    println!("{}", "shelf".bold());
    println!("  /shelfrate <1-5>  /add [status] [notes]");
    println!("  /shelf [status|all]  /move <id> <status>  /remove <id>");
    println!("{}", "misc".bold());
    println!("  /profile  /help  /quit");
}

fn print_books(app: &App) {
    let catalog = app.catalog();
    if catalog.books().is_empty() {
        println!("{}", "no books found".dimmed());
        return;
    }
    for book in catalog.books() {
        println!(
            "  {:>4}  {} -- {}  {} ({} reviews)",
            book.id,
            book.title.cyan(),
            book.author,
            format!("{:.1}\u{2605}", book.rating).yellow(),
            book.review_count
        );
    }
    println!(
        "{}",
        format!("page {} of {}", catalog.page(), catalog.total_pages()).dimmed()
    );
}

fn print_detail(detail: &BookDetail, current_username: Option<&str>) {
    let book = &detail.book;
    println!("{} by {}", book.title.bold().cyan(), book.author);
    println!(
        "  {} ({} reviews)  genre: {}  year: {}",
        format!("{:.1}\u{2605}", book.rating).yellow(),
        book.review_count,
        book.genre.as_deref().unwrap_or("unknown"),
        book.publication_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
    );
    if let Some(description) = &book.description {
        println!("  {description}");
    }

    if detail.reviews.is_empty() {
        println!("  {}", "no reviews yet -- be the first".dimmed());
        return;
    }
    for review in &detail.reviews {
        // Delete affordance only for the acting user's own reviews.
        let yours = current_username == Some(review.reviewer_name.as_str());
        let marker = if yours {
            format!("  (yours -- /delreview {})", review.id).dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} -- {}{}",
            stars(review.rating),
            review.reviewer_name,
            review.comment.as_deref().unwrap_or("(no comment)"),
            marker
        );
    }
}

fn print_shelf(app: &App, filter: Option<ShelfStatus>) {
    let entries = app.shelf().filtered_by(filter);
    if entries.is_empty() {
        println!("{}", "no books in this shelf yet".dimmed());
        return;
    }
    for entry in entries {
        let rating = entry
            .rating
            .map(stars)
            .unwrap_or_else(|| "unrated".dimmed().to_string());
        println!(
            "  {:>4}  {} [{}] {}  {}",
            entry.id,
            entry.book_title.cyan(),
            entry.status,
            rating,
            entry.user_notes.as_deref().unwrap_or("").dimmed()
        );
    }
}
