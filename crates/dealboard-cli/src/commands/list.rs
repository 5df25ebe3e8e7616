use dealboard_core::{Session, SortKey};

use crate::commands::common::{board_items, format_board_lines};
use crate::error::CliError;

/// Render the seeded board once under the given ordering.
pub fn run_list(sort: SortKey, as_json: bool) -> Result<(), CliError> {
    let mut session = Session::seeded();
    session.set_sort_key(sort);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&board_items(&session))?);
    } else {
        for line in format_board_lines(&session) {
            println!("{line}");
        }
    }

    Ok(())
}
