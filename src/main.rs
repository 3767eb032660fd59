//! To-do list console front-end
//!
//! Stands in for the desktop view: it renders the table projection and
//! publishes the same topics the window's buttons and table clicks would.
//! All state lives in the library; this binary is wiring and text.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;

use todolist::{
    Item, Message, Messenger, Subscriber, TableProjection, TodoController, TodoList, Topic,
    formatting, logging,
};

/// Interactive to-do list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with a few sample items
    #[arg(long)]
    sample: bool,

    /// Log level specification (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// The view: holds the table projection and re-renders on every `items`.
struct ConsoleView {
    messenger: Rc<Messenger>,
    projection: RefCell<TableProjection>,
}

impl ConsoleView {
    fn new(messenger: Rc<Messenger>) -> Rc<Self> {
        let view = Rc::new(Self {
            messenger,
            projection: RefCell::new(TableProjection::new()),
        });
        let subscriber: Rc<dyn Subscriber> = view.clone();
        view.messenger.subscribe(Topic::Ready, &subscriber);
        view.messenger.subscribe(Topic::Items, &subscriber);
        view
    }

    /// Map a 1-based row argument onto the current projection.
    fn row_index(&self, arg: &str) -> Option<usize> {
        let row = arg.parse::<usize>().ok()?.checked_sub(1)?;
        (row < self.projection.borrow().row_count()).then_some(row)
    }

    /// Run one command line. Returns `false` when the user asked to quit.
    fn dispatch(&self, line: &str) -> bool {
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => self.messenger.publish(Message::GetItems),
            "add" => self
                .messenger
                .publish(Message::SaveItem(Item::new(Item::UNASSIGNED, rest))),
            "done" => match self.row_index(rest) {
                Some(row) => {
                    // Work on a snapshot: the save round-trips back into
                    // receive(), which re-borrows the projection mutably.
                    let projection = self.projection.borrow().clone();
                    projection.toggle_done_at(row, &self.messenger);
                }
                None => eprintln!("usage: done <row>"),
            },
            "edit" => match rest.split_once(' ') {
                Some((row_arg, text)) => match self.row_index(row_arg) {
                    Some(row) => {
                        let mut item = self.projection.borrow().item_at(row);
                        item.set_description(text.trim());
                        self.messenger.publish(Message::SaveItem(item));
                    }
                    None => eprintln!("usage: edit <row> <description>"),
                },
                None => eprintln!("usage: edit <row> <description>"),
            },
            "date" => match rest.split_once(' ') {
                Some((row_arg, date_arg)) => match self.row_index(row_arg) {
                    Some(row) => self.set_date(row, date_arg.trim()),
                    None => eprintln!("usage: date <row> <YYYY-MM-DD|->"),
                },
                None => eprintln!("usage: date <row> <YYYY-MM-DD|->"),
            },
            "sort" => match rest {
                "asc" => self.messenger.publish(Message::SortAscending),
                "desc" => self.messenger.publish(Message::SortDescending),
                _ => eprintln!("usage: sort asc|desc"),
            },
            "purge" => self.messenger.publish(Message::RemoveCompletedItems),
            "help" => print_help(),
            "quit" | "exit" => return false,
            other => eprintln!("unknown command '{other}' (try 'help')"),
        }
        true
    }

    /// Set or clear (`-`) the date of the item at `row`.
    fn set_date(&self, row: usize, date_arg: &str) {
        let date = if date_arg == "-" {
            None
        } else {
            match NaiveDate::parse_from_str(date_arg, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    eprintln!("Invalid date format '{date_arg}'. Use YYYY-MM-DD (e.g., '2026-08-15')");
                    return;
                }
            }
        };
        let mut item = self.projection.borrow().item_at(row);
        item.set_date(date);
        self.messenger.publish(Message::SaveItem(item));
    }
}

impl Subscriber for ConsoleView {
    fn receive(&self, message: &Message) {
        match message {
            // the app is up; ask for the list
            Message::Ready => self.messenger.publish(Message::GetItems),
            Message::Items(items) => {
                let mut projection = self.projection.borrow_mut();
                projection.reload(items);
                println!("{}", formatting::render_table(projection.rows()));
            }
            _ => {}
        }
    }
}

fn print_help() {
    println!(
        "commands:\n  \
         add <description>       create an item\n  \
         edit <row> <text>       rewrite an item's description\n  \
         date <row> <date|->     set or clear a due date (YYYY-MM-DD)\n  \
         done <row>              toggle completion\n  \
         sort asc|desc           reorder by date\n  \
         purge                   remove completed items\n  \
         list                    reprint the table\n  \
         quit"
    );
}

fn sample_list() -> Result<TodoList> {
    let today = Local::now().date_naive();
    let items = vec![
        Item::new(1, "Finish the quarterly report").with_date(today + Duration::days(4)),
        Item::new(2, "Water the plants").with_done(true),
        Item::new(3, "Book dentist appointment").with_date(today + Duration::days(1)),
    ];
    Ok(TodoList::from_items(items)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_level).map_err(anyhow::Error::msg)?;

    let list = if args.sample {
        sample_list()?
    } else {
        TodoList::new()
    };

    let messenger = Rc::new(Messenger::new());
    let view = ConsoleView::new(Rc::clone(&messenger));
    let controller = TodoController::new(Rc::clone(&messenger), list);
    controller.start();
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if !view.dispatch(line.trim()) {
            break;
        }
    }
    Ok(())
}
