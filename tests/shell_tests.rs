use invsort::config::Limits;
use invsort::intake::read_records;
use invsort::present::TablePresenter;
use invsort::shell::{Command, Shell, UnknownCommand};
use invsort::{Record, Session, SortKey};
use std::io::Cursor;

fn example() -> Session {
    Session::new(vec![
        Record::new("Zeta", "core", 3),
        Record::new("Alpha", "core", 7),
        Record::new("Mid", "aux", 1),
    ])
}

/// Runs a scripted menu session and returns the final session and everything printed.
fn drive(script: &str, session: Session) -> (Session, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut shell = Shell::new(input, TablePresenter::new(Vec::<u8>::new()), session);
    shell.run().unwrap();
    let (session, presenter) = shell.into_parts();
    (session, String::from_utf8(presenter.into_inner()).unwrap())
}

fn names(session: &Session) -> Vec<&str> {
    session.records().iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_parse_commands() {
    assert_eq!("0".parse::<Command>(), Ok(Command::Exit));
    assert_eq!("1".parse::<Command>(), Ok(Command::Show));
    assert_eq!(" 2 ".parse::<Command>(), Ok(Command::Sort(SortKey::Name)));
    assert_eq!("3".parse::<Command>(), Ok(Command::Sort(SortKey::Type)));
    assert_eq!("4".parse::<Command>(), Ok(Command::Sort(SortKey::Priority)));
    assert_eq!("5".parse::<Command>(), Ok(Command::Search));
    assert_eq!("6".parse::<Command>(), Ok(Command::ShowFinal));
    assert_eq!(
        "7".parse::<Command>(),
        Err(UnknownCommand("7".to_string()))
    );
    assert!("".parse::<Command>().is_err());
}

#[test]
fn test_show_and_exit() {
    let (session, output) = drive("1\n0\n", example());

    assert!(output.contains("Records (3):"));
    assert!(output.contains("| ID | Name"));
    assert!(output.contains("|  0 | Zeta"));
    assert!(output.contains("Exiting."));
    assert!(!session.is_sorted_by_name());
}

#[test]
fn test_sort_by_name_reports_counts() {
    let (session, output) = drive("2\n0\n", example());

    assert!(output.contains("Result: Bubble Sort by name (ascending)"));
    assert!(output.contains("Comparisons: 3"));
    assert!(output.contains("Time: "));
    assert_eq!(names(&session), vec!["Alpha", "Mid", "Zeta"]);
    assert!(session.is_sorted_by_name());
}

#[test]
fn test_search_after_name_sort() {
    let (_, output) = drive("2\n5\nMid\n5\nOmega\n0\n", example());

    assert!(output.contains("Record found at index 1:"));
    assert!(output.contains("  Name: Mid"));
    assert!(output.contains("  Type: aux"));
    assert!(output.contains("  Priority: 1"));
    assert!(output.contains("Record 'Omega' not found in the current list."));
}

#[test]
fn test_search_declined_when_unsorted() {
    let (session, output) = drive("5\nn\n0\n", example());

    assert!(output.contains("Binary search requires the list to be sorted by NAME."));
    assert!(output.contains("Search cancelled."));
    assert!(!output.contains("Enter the NAME"));
    assert_eq!(names(&session), vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_search_confirmed_sorts_first() {
    let (session, output) = drive("4\n5\ny\nZeta\n0\n", example());

    assert!(output.contains("Sort done. comparisons: 3"));
    assert!(output.contains("Record found at index 2:"));
    assert!(session.is_sorted_by_name());
}

#[test]
fn test_type_sort_blocks_search_again() {
    let (_, output) = drive("2\n3\n5\nno\n0\n", example());

    assert!(output.contains("Result: Insertion Sort by type (ascending)"));
    assert!(output.contains("Search cancelled."));
}

#[test]
fn test_empty_search_key_cancels() {
    let (_, output) = drive("2\n5\n\n0\n", example());
    assert!(output.contains("Empty name. Search cancelled."));
}

#[test]
fn test_invalid_choice_loops() {
    let (_, output) = drive("9\nabc\n0\n", example());
    assert_eq!(output.matches("Invalid option. Try again.").count(), 2);
    assert!(output.contains("Exiting."));
}

#[test]
fn test_end_of_input_exits() {
    let (_, output) = drive("1\n", example());
    assert!(output.contains("Records (3):"));
    assert!(!output.contains("Exiting."));

    // End of input while asked to confirm a sort.
    let (session, _) = drive("5\n", example());
    assert!(!session.is_sorted_by_name());
}

#[test]
fn test_show_final() {
    let (_, output) = drive("4\n6\n0\n", example());
    assert!(output.contains("=== Final assembly (current list) ==="));
    assert!(output.contains("|  0 | Mid"));
}

#[test]
fn test_empty_session_table() {
    let (_, output) = drive("1\n0\n", Session::new(vec![]));
    assert!(output.contains("No records registered."));
}

#[test]
fn test_execute_directly() {
    let input = Cursor::new(Vec::new());
    let mut shell = Shell::new(input, TablePresenter::new(Vec::<u8>::new()), example());

    assert!(shell.execute(Command::Sort(SortKey::Priority)).unwrap().is_continue());
    assert!(!shell.session().is_sorted_by_name());
    assert!(shell.execute(Command::Exit).unwrap().is_break());
}

#[test]
fn test_search_key_bounded_like_registered_names() {
    let registration = "Propulsion stabilizer assembly unit\ncore\n5\nZeta\naux\n2\n\n";
    let mut input = Cursor::new(registration.as_bytes().to_vec());
    let records = read_records(&mut input, &mut Vec::new(), Limits::default()).unwrap();
    assert_eq!(records[0].name, "Propulsion stabilizer assembl");

    let script = "2\n5\nPropulsion stabilizer assembly unit\n0\n";
    let mut shell = Shell::with_limits(
        Cursor::new(script.as_bytes().to_vec()),
        TablePresenter::new(Vec::<u8>::new()),
        Session::new(records),
        Limits::default(),
    );
    shell.run().unwrap();
    let (_, presenter) = shell.into_parts();
    let output = String::from_utf8(presenter.into_inner()).unwrap();

    assert!(output.contains("Record found at index 0:"));
    assert!(!output.contains("not found"));
}

#[test]
fn test_search_key_bound_follows_limits() {
    let limits = Limits {
        max_name_len: 4,
        ..Limits::default()
    };
    let session = Session::new(vec![
        Record::new("Alph", "core", 7),
        Record::new("Zeta", "aux", 2),
    ]);
    let script = "2\n5\nAlphabet\n0\n";
    let mut shell = Shell::with_limits(
        Cursor::new(script.as_bytes().to_vec()),
        TablePresenter::new(Vec::<u8>::new()),
        session,
        limits,
    );
    shell.run().unwrap();
    let (_, presenter) = shell.into_parts();
    let output = String::from_utf8(presenter.into_inner()).unwrap();

    assert!(output.contains("Record found at index 0:"));
}
